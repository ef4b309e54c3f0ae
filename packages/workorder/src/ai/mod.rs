//! Extraction service implementations.
//!
//! Enabled by the `gemini` feature so the core library stays free of
//! HTTP dependencies.

pub mod gemini;

pub use gemini::GeminiExtractor;
