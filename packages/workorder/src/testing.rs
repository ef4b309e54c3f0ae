//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the work order
//! library without making real extraction or mailbox calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{Result, WorkOrderError};
use crate::sources::sample_message;
use crate::traits::{Extractor, MessageSource};
use crate::types::{InboundMessage, WorkOrderRecord};

/// A fully populated record matching [`sample_message`].
pub fn sample_record() -> WorkOrderRecord {
    WorkOrderRecord::new(
        "WO-99283",
        "Main sales floor lights are flickering and 3 ballasts have failed completely. \
         Needs immediate attention before store opening tomorrow.",
    )
    .with_location_name("RetailCorp Store #234")
    .with_location_id("CC234")
    .with_address("1234 Woodward Ave")
    .with_city_state_zip("Detroit, MI 48226")
    .with_ivr_check_in_line("888-555-0199")
    .with_account_code_pin("4452")
    .with_ds_tracking_number("DS-REF-99283")
    .with_customer_name("RetailCorp")
}

/// A mock extraction service for testing.
///
/// Returns deterministic, configurable records without calling a real
/// model. Clones share state, so a test can keep one handle for
/// assertions while the controller owns another.
#[derive(Clone, Default)]
pub struct MockExtractor {
    /// Record to return, [`sample_record`] when unset
    record: Arc<RwLock<Option<WorkOrderRecord>>>,

    /// Failure message, makes calls fail when set
    failure: Arc<RwLock<Option<String>>>,

    /// Artificial latency before responding
    delay: Arc<RwLock<Option<Duration>>>,

    /// Bodies passed to each call, for assertions
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockExtractor {
    /// Create a new mock extractor with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record returned by successful calls.
    pub fn with_record(self, record: WorkOrderRecord) -> Self {
        *self.record.write().unwrap() = Some(record);
        self
    }

    /// Make all calls fail with the given message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// Sleep before responding.
    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.write().unwrap() = Some(delay);
        self
    }

    /// Make later calls fail, even after the extractor has been handed off.
    pub fn set_failure(&self, message: impl Into<String>) {
        *self.failure.write().unwrap() = Some(message.into());
    }

    /// Remove a configured failure so later calls succeed.
    pub fn clear_failure(&self) {
        *self.failure.write().unwrap() = None;
    }

    /// Get the bodies passed to this mock.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract_work_order(&self, body: &str) -> Result<WorkOrderRecord> {
        self.calls.write().unwrap().push(body.to_string());

        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failure.read().unwrap().clone();
        if let Some(message) = failure {
            return Err(WorkOrderError::Extraction(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                message,
            ))));
        }

        Ok(self
            .record
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(sample_record))
    }
}

/// A mock message source for testing.
///
/// Returns a predefined message without touching a real mailbox. Clones
/// share state, same as [`MockExtractor`].
#[derive(Clone, Default)]
pub struct MockMessageSource {
    /// Message to return, [`sample_message`] when unset
    message: Arc<RwLock<Option<InboundMessage>>>,

    /// Failure message, makes fetches fail when set
    failure: Arc<RwLock<Option<String>>>,

    /// Artificial latency before responding
    delay: Arc<RwLock<Option<Duration>>>,

    /// Number of fetches made, for assertions
    fetches: Arc<RwLock<usize>>,
}

impl MockMessageSource {
    /// Create a new mock source with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message returned by successful fetches.
    pub fn with_message(self, message: InboundMessage) -> Self {
        *self.message.write().unwrap() = Some(message);
        self
    }

    /// Make all fetches fail with the given message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// Sleep before responding.
    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.write().unwrap() = Some(delay);
        self
    }

    /// Get the number of fetches made against this mock.
    pub fn fetch_count(&self) -> usize {
        *self.fetches.read().unwrap()
    }
}

#[async_trait]
impl MessageSource for MockMessageSource {
    async fn fetch_active_message(&self) -> Result<InboundMessage> {
        *self.fetches.write().unwrap() += 1;

        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failure.read().unwrap().clone();
        if let Some(message) = failure {
            return Err(WorkOrderError::Fetch(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message,
            ))));
        }

        Ok(self
            .message
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(sample_message))
    }
}
