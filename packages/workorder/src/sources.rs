//! Message source implementations.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::MessageSource;
use crate::types::InboundMessage;

/// The sample repair-request email used when no mail client is wired up.
pub fn sample_message() -> InboundMessage {
    InboundMessage::new(
        "SERVICE REQUEST: CC234 - Urgent Lighting Repair",
        "facilities@retailcorp.com",
        "Oct 24, 2024",
        "Hello Dynamic Systems Team,\n\n\
         We have an urgent repair needed at our Detroit location (CC234).\n\
         Work Order ID: #WO-99283\n\
         Location: RetailCorp Store #234\n\
         Address: 1234 Woodward Ave, Detroit, MI 48226\n\n\
         Problem: Main sales floor lights are flickering and 3 ballasts have failed completely. \
         Needs immediate attention before store opening tomorrow.\n\n\
         IVR Check-in: 888-555-0199\n\
         PIN: 4452\n\
         Tracking: DS-REF-99283",
    )
}

/// A message source holding one canned message.
///
/// Stands in for the host mail client's active-message accessor. The
/// optional delay imitates the round trip to a real add-on host.
#[derive(Debug, Clone)]
pub struct CannedMessageSource {
    message: InboundMessage,
    delay: Option<Duration>,
}

impl CannedMessageSource {
    /// Create a source holding the sample repair-request email.
    pub fn new() -> Self {
        Self {
            message: sample_message(),
            delay: None,
        }
    }

    /// Replace the held message.
    pub fn with_message(mut self, message: InboundMessage) -> Self {
        self.message = message;
        self
    }

    /// Delay each fetch by the given duration.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl Default for CannedMessageSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageSource for CannedMessageSource {
    async fn fetch_active_message(&self) -> Result<InboundMessage> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_source_returns_sample() {
        let source = CannedMessageSource::new();
        let message = source.fetch_active_message().await.unwrap();

        assert_eq!(message, sample_message());
        assert!(message.body.contains("Work Order ID: #WO-99283"));
        assert!(message.body.contains("Tracking: DS-REF-99283"));
    }

    #[tokio::test]
    async fn test_canned_source_custom_message() {
        let source = CannedMessageSource::new()
            .with_message(InboundMessage::new("Subject", "a@b.com", "Jan 1, 2025", "Body"));

        let message = source.fetch_active_message().await.unwrap();
        assert_eq!(message.body, "Body");
    }
}
