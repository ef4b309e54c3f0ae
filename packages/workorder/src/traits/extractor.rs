//! Extraction service trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::WorkOrderRecord;

/// The extraction capability: free text in, structured record out.
///
/// Implementations wrap a specific hosted model and handle prompting and
/// response parsing. A call either yields a complete, schema-conforming
/// record or fails; there is no partial result.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract a work order record from raw email body text.
    async fn extract_work_order(&self, body: &str) -> Result<WorkOrderRecord>;
}
