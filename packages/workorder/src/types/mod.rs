//! Data types for the work order library.

pub mod message;
pub mod record;

pub use message::InboundMessage;
pub use record::{FieldSpec, WorkOrderRecord, FIELDS};
