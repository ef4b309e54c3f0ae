//! Message source trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::InboundMessage;

/// Supplies the currently open/selected email-like message.
///
/// In a real deployment this wraps the host mail client's active-message
/// accessor; [`crate::sources::CannedMessageSource`] stands in for it here.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Fetch the currently active message.
    async fn fetch_active_message(&self) -> Result<InboundMessage>;
}
