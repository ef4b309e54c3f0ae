//! The raw email-like input to be transformed.

use serde::{Deserialize, Serialize};

/// One candidate email to transform into a work order.
///
/// Created by a `MessageSource` on fetch and held immutably by the
/// controller until cleared or replaced. Only `body` is consumed by the
/// extraction service; the remaining fields are operator context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Subject line
    pub subject: String,

    /// Sender address
    pub sender: String,

    /// Display date string (never parsed)
    pub date: String,

    /// Raw unstructured body text
    pub body: String,
}

impl InboundMessage {
    /// Create a new message.
    pub fn new(
        subject: impl Into<String>,
        sender: impl Into<String>,
        date: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            sender: sender.into(),
            date: date.into(),
            body: body.into(),
        }
    }
}
