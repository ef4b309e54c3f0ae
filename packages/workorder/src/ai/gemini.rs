//! Gemini implementation of the extraction trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use workorder::ai::GeminiExtractor;
//! use workorder::security::ExtractorCredentials;
//!
//! let credentials = ExtractorCredentials::from_env()?;
//! let extractor = GeminiExtractor::new(&credentials);
//! ```

use async_trait::async_trait;
use gemini_client::{GeminiClient, GeminiError, Schema};
use tracing::debug;

use crate::error::{Result, WorkOrderError};
use crate::prompts::format_extract_prompt;
use crate::security::ExtractorCredentials;
use crate::traits::Extractor;
use crate::types::{WorkOrderRecord, FIELDS};

/// Gemini-backed extraction service.
///
/// Sends the email body with a field-by-field prompt and a response
/// schema that constrains the model to the record contract.
#[derive(Clone)]
pub struct GeminiExtractor {
    client: GeminiClient,
    model: String,
}

impl GeminiExtractor {
    /// Create an extractor from credentials.
    pub fn new(credentials: &ExtractorCredentials) -> Self {
        let mut client = GeminiClient::new(credentials.api_key.expose());
        if let Some(base_url) = &credentials.base_url {
            client = client.with_base_url(base_url.clone());
        }
        Self {
            client,
            model: credentials.model.clone(),
        }
    }

    /// Create from `GEMINI_API_KEY` / `GEMINI_MODEL` in the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(&ExtractorCredentials::from_env()?))
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Response schema matching the record contract.
    ///
    /// Every field is a string property in declaration order; only the
    /// mandatory fields appear in `required`.
    pub fn response_schema() -> Schema {
        let mut schema = Schema::object();
        for field in FIELDS.iter() {
            schema = schema.property(field.name, Schema::string().describe(field.description));
        }
        schema.required(FIELDS.iter().filter(|f| f.required).map(|f| f.name))
    }
}

#[async_trait]
impl Extractor for GeminiExtractor {
    async fn extract_work_order(&self, body: &str) -> Result<WorkOrderRecord> {
        debug!(model = %self.model, body_len = body.len(), "extracting work order");

        let prompt = format_extract_prompt(body);

        let record: WorkOrderRecord = self
            .client
            .extract(&self.model, prompt, Self::response_schema())
            .await
            .map_err(|e| match e {
                GeminiError::Parse(reason) => WorkOrderError::Schema { reason },
                other => WorkOrderError::Extraction(Box::new(other)),
            })?;

        record.validate()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_schema_matches_contract() {
        let value = serde_json::to_value(GeminiExtractor::response_schema()).unwrap();

        assert_eq!(value["type"], "OBJECT");

        let properties = value["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 10);
        assert_eq!(
            properties["workOrderNumber"]["description"],
            "look for # or Work Order ID"
        );

        let required = value["required"].as_array().unwrap();
        assert_eq!(required.len(), 2);
        assert_eq!(required[0], "workOrderNumber");
        assert_eq!(required[1], "problemDescription");
    }

    #[test]
    fn test_extractor_builder() {
        let credentials = ExtractorCredentials::new("test-key", "gemini-3-pro")
            .with_base_url("http://localhost:8080/v1beta");
        let extractor = GeminiExtractor::new(&credentials);

        assert_eq!(extractor.model(), "gemini-3-pro");
        assert_eq!(extractor.client.base_url(), "http://localhost:8080/v1beta");
    }
}
