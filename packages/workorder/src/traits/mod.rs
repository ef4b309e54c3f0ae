//! Core trait abstractions for the work order library.
//!
//! These traits define the two injected capabilities the controller
//! orchestrates: supplying the active message and extracting a record.

pub mod extractor;
pub mod source;

pub use extractor::Extractor;
pub use source::MessageSource;
