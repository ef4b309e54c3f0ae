//! Pure Gemini REST API client
//!
//! A clean, minimal client for the Google Gemini API with no domain-specific
//! logic. Supports text generation and schema-constrained JSON output.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateRequest};
//!
//! let client = GeminiClient::from_env()?;
//!
//! let response = client
//!     .generate_content("gemini-3-flash-preview", GenerateRequest::user_text("Hello!"))
//!     .await?;
//!
//! println!("{}", response.text().unwrap_or_default());
//! ```
//!
//! # Type-Safe Structured Output
//!
//! ```rust,ignore
//! use gemini_client::Schema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Person {
//!     name: String,
//!     age: Option<u32>,
//! }
//!
//! let schema = Schema::object()
//!     .property("name", Schema::string())
//!     .property("age", Schema::integer().nullable())
//!     .required(["name"]);
//!
//! let person: Person = client
//!     .extract("gemini-3-flash-preview", "John Smith is 35.", schema)
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{GeminiError, Result};
pub use schema::{Schema, SchemaType};
pub use types::*;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY` (falling back to `API_KEY`).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, regional endpoints, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate content with the given model.
    ///
    /// Sends the request to the `generateContent` endpoint and returns the
    /// full response, including candidates and usage metadata.
    pub async fn generate_content(
        &self,
        model: &str,
        request: GenerateRequest,
    ) -> Result<GenerateResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/models/{}:generateContent", self.base_url, model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api(format!("Gemini API error: {}", error_text)));
        }

        let generate_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            model = %model,
            duration_ms = start.elapsed().as_millis(),
            candidates = generate_response.candidates.len(),
            "Gemini content generation"
        );

        Ok(generate_response)
    }

    /// Schema-constrained JSON output.
    ///
    /// Uses `responseMimeType: application/json` with a `responseSchema` so
    /// the model returns valid JSON matching the schema. Returns the raw JSON
    /// string of the first candidate.
    pub async fn generate_structured(
        &self,
        model: &str,
        prompt: impl Into<String>,
        schema: Schema,
    ) -> Result<String> {
        let request = GenerateRequest::user_text(prompt)
            .config(GenerationConfig::json(schema).temperature(0.0));

        let response = self.generate_content(model, request).await?;

        response.text().ok_or_else(|| match response.block_reason() {
            Some(reason) => GeminiError::Api(format!("Prompt blocked: {}", reason)),
            None => GeminiError::Api("No candidates from Gemini".into()),
        })
    }

    /// Type-safe structured output extraction.
    ///
    /// Runs `generate_structured` and deserializes the JSON into `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Person {
    ///     name: String,
    /// }
    ///
    /// let person: Person = client
    ///     .extract("gemini-3-flash-preview", prompt, schema)
    ///     .await?;
    /// ```
    pub async fn extract<T: DeserializeOwned>(
        &self,
        model: &str,
        prompt: impl Into<String>,
        schema: Schema,
    ) -> Result<T> {
        debug!(
            schema = %serde_json::to_string(&schema).unwrap_or_default(),
            "Sending Gemini schema for extraction"
        );

        let json_str = self.generate_structured(model, prompt, schema).await?;
        let json_str = strip_code_blocks(&json_str);

        serde_json::from_str(json_str)
            .map_err(|e| GeminiError::Parse(format!("Failed to deserialize response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = GeminiClient::new("test-key")
            .with_base_url("https://custom.api.com/v1beta");

        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, "https://custom.api.com/v1beta");
    }

    #[test]
    fn test_default_base_url() {
        let client = GeminiClient::new("test-key");
        assert_eq!(
            client.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }
}
