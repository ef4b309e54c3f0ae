//! Email-to-Work-Order Extraction Library
//!
//! Turns a free-form repair request email into a validated, printable work
//! order by sending the body to a schema-constrained extraction service.
//!
//! # Design Philosophy
//!
//! **"One operation at a time"**
//!
//! - Explicit state machine, no hidden concurrency
//! - Capability traits at the seams (message source, extraction service)
//! - `&mut self` operations make overlapping work unrepresentable
//! - Records land atomically: validated whole, or not at all
//!
//! # Usage
//!
//! ```rust,ignore
//! use workorder::{render_text, FormView, WorkOrderController};
//! use workorder::sources::CannedMessageSource;
//! use workorder::ai::GeminiExtractor;
//!
//! let extractor = GeminiExtractor::from_env()?;
//! let mut controller = WorkOrderController::new(CannedMessageSource::new(), extractor);
//!
//! controller.request_message().await?;
//! let record = controller.transform().await?;
//!
//! println!("{}", render_text(&FormView::from_record(record)));
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (MessageSource, Extractor)
//! - [`types`] - Message and work order record types
//! - [`controller`] - Fetch / transform / clear state machine
//! - [`render`] - Printable form projection
//! - [`prompts`] - Extraction prompt construction
//! - [`sources`] - Built-in message sources
//! - [`security`] - Credential handling
//! - [`testing`] - Mock implementations for testing

pub mod controller;
pub mod error;
pub mod prompts;
pub mod render;
pub mod security;
pub mod sources;
pub mod state;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "gemini")]
pub mod ai;

// Re-export core types at crate root
pub use controller::{
    WorkOrderController, DEFAULT_EXTRACT_TIMEOUT, DEFAULT_FAILURE_MESSAGE, DEFAULT_FETCH_TIMEOUT,
};
pub use error::WorkOrderError;
pub use state::{ProcessState, View};
pub use traits::{Extractor, MessageSource};
pub use types::{FieldSpec, InboundMessage, WorkOrderRecord, FIELDS};

// Re-export rendering
pub use render::{render_text, FormView};

// Re-export prompt construction
pub use prompts::{format_extract_prompt, EXTRACT_WORK_ORDER_PROMPT};

// Re-export built-in sources
pub use sources::{sample_message, CannedMessageSource};

// Re-export credential handling
pub use security::{ExtractorCredentials, SecretString};

// Re-export testing utilities
pub use testing::{sample_record, MockExtractor, MockMessageSource};

#[cfg(feature = "gemini")]
pub use ai::GeminiExtractor;
