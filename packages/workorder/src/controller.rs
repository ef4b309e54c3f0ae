//! Work order pipeline controller.
//!
//! [`WorkOrderController`] owns the full lifecycle: fetch the active
//! message, hand its body to the extraction service, validate the result,
//! and project the outcome for display. All operations take `&mut self`,
//! so overlapping operations on one controller cannot be expressed and
//! the state machine never needs interior locking.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Result, WorkOrderError};
use crate::state::{ProcessState, View};
use crate::traits::{Extractor, MessageSource};
use crate::types::{InboundMessage, WorkOrderRecord};

/// Upper bound on a single message fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound on a single extraction call.
pub const DEFAULT_EXTRACT_TIMEOUT: Duration = Duration::from_secs(60);

/// Shown when a failure carries no message of its own.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to analyze email content.";

/// Drives a message source and an extraction service through the
/// fetch / transform / clear lifecycle.
pub struct WorkOrderController<S: MessageSource, E: Extractor> {
    source: S,
    extractor: E,
    state: ProcessState,
    message: Option<InboundMessage>,
    record: Option<WorkOrderRecord>,
    last_error: Option<String>,
    fetch_timeout: Duration,
    extract_timeout: Duration,
}

impl<S: MessageSource, E: Extractor> WorkOrderController<S, E> {
    /// Create a controller with the default timeouts.
    pub fn new(source: S, extractor: E) -> Self {
        Self {
            source,
            extractor,
            state: ProcessState::default(),
            message: None,
            record: None,
            last_error: None,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            extract_timeout: DEFAULT_EXTRACT_TIMEOUT,
        }
    }

    /// Override the message fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Override the extraction timeout.
    pub fn with_extract_timeout(mut self, timeout: Duration) -> Self {
        self.extract_timeout = timeout;
        self
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn message(&self) -> Option<&InboundMessage> {
        self.message.as_ref()
    }

    pub fn record(&self) -> Option<&WorkOrderRecord> {
        self.record.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fetch the active message from the source and hold it for
    /// [`transform`](Self::transform).
    ///
    /// Any previously extracted record and error are discarded before the
    /// fetch starts. On success the controller returns to idle with the
    /// message loaded; on failure or timeout it moves to failed.
    pub async fn request_message(&mut self) -> Result<&InboundMessage> {
        self.state = ProcessState::FetchingMessage;
        self.record = None;
        self.last_error = None;

        let fetched =
            tokio::time::timeout(self.fetch_timeout, self.source.fetch_active_message()).await;

        let message = match fetched {
            Ok(Ok(message)) => message,
            Ok(Err(error)) => return Err(self.fail(error)),
            Err(_) => {
                let error = WorkOrderError::Timeout {
                    operation: "message fetch".to_string(),
                    elapsed: self.fetch_timeout,
                };
                return Err(self.fail(error));
            }
        };

        debug!(subject = %message.subject, sender = %message.sender, "message fetched");
        self.state = ProcessState::Idle;
        Ok(&*self.message.insert(message))
    }

    /// Extract a work order record from the held message body.
    ///
    /// Returns [`WorkOrderError::NoMessage`] without touching the state
    /// when no message is loaded. The extracted record is re-validated
    /// before it is accepted; a record that fails validation counts as a
    /// failed extraction. On failure the previously held record (if any)
    /// stays in place, but the view reports the error until the next
    /// operation.
    pub async fn transform(&mut self) -> Result<&WorkOrderRecord> {
        let body = match &self.message {
            Some(message) => message.body.clone(),
            None => return Err(WorkOrderError::NoMessage),
        };

        self.state = ProcessState::Extracting;
        self.last_error = None;

        let extracted = tokio::time::timeout(
            self.extract_timeout,
            self.extractor.extract_work_order(&body),
        )
        .await;

        let record = match extracted {
            Ok(Ok(record)) => match record.validate() {
                Ok(()) => record,
                Err(error) => return Err(self.fail(error)),
            },
            Ok(Err(error)) => return Err(self.fail(error)),
            Err(_) => {
                let error = WorkOrderError::Timeout {
                    operation: "extraction".to_string(),
                    elapsed: self.extract_timeout,
                };
                return Err(self.fail(error));
            }
        };

        debug!(work_order_number = %record.work_order_number, "work order extracted");
        self.state = ProcessState::Success;
        Ok(&*self.record.insert(record))
    }

    /// Drop the held message, record, and error, returning to idle.
    pub fn clear(&mut self) {
        self.message = None;
        self.record = None;
        self.last_error = None;
        self.state = ProcessState::Idle;
    }

    /// Project the current state for display.
    pub fn current_view(&self) -> View {
        match self.state {
            ProcessState::FetchingMessage => View::Fetching,
            ProcessState::Extracting => View::Extracting,
            ProcessState::Success => match &self.record {
                Some(record) => View::Ready {
                    work_order_number: record.work_order_number.clone(),
                },
                None => View::Empty,
            },
            ProcessState::Failed => View::Error {
                message: self
                    .last_error
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            },
            ProcessState::Idle => {
                if self.message.is_some() {
                    View::MessageLoaded
                } else {
                    View::Empty
                }
            }
        }
    }

    fn fail(&mut self, error: WorkOrderError) -> WorkOrderError {
        warn!(error = %error, "work order pipeline step failed");
        self.state = ProcessState::Failed;
        self.last_error = Some(error.to_string());
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockExtractor, MockMessageSource};

    #[test]
    fn test_new_controller_is_empty() {
        let controller = WorkOrderController::new(MockMessageSource::new(), MockExtractor::new());
        assert_eq!(controller.state(), ProcessState::Idle);
        assert_eq!(controller.current_view(), View::Empty);
        assert!(controller.message().is_none());
        assert!(controller.record().is_none());
        assert!(controller.last_error().is_none());
    }

    #[tokio::test]
    async fn test_loaded_message_projects_as_message_loaded() {
        let mut controller =
            WorkOrderController::new(MockMessageSource::new(), MockExtractor::new());
        controller
            .request_message()
            .await
            .expect("fetch should succeed");
        assert_eq!(controller.state(), ProcessState::Idle);
        assert_eq!(controller.current_view(), View::MessageLoaded);
    }

    #[tokio::test]
    async fn test_transform_without_message_leaves_state_untouched() {
        let mut controller =
            WorkOrderController::new(MockMessageSource::new(), MockExtractor::new());
        let result = controller.transform().await;
        assert!(matches!(result, Err(WorkOrderError::NoMessage)));
        assert_eq!(controller.state(), ProcessState::Idle);
        assert_eq!(controller.current_view(), View::Empty);
    }

    #[tokio::test]
    async fn test_clear_returns_to_empty() {
        let mut controller =
            WorkOrderController::new(MockMessageSource::new(), MockExtractor::new());
        controller
            .request_message()
            .await
            .expect("fetch should succeed");
        controller.transform().await.expect("extraction should succeed");
        controller.clear();
        assert_eq!(controller.state(), ProcessState::Idle);
        assert_eq!(controller.current_view(), View::Empty);
        assert!(controller.message().is_none());
        assert!(controller.record().is_none());
    }
}
