//! Gemini receipt extraction client
//!
//! Sends a receipt photo to the Gemini `generateContent` endpoint and asks
//! for a structured JSON response matching [`ReceiptData`]. This is the
//! application's only network boundary. The call is blocking, fires once,
//! and is never retried: any failure degrades to "no result" and leaves
//! every collection untouched.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{SpendError, SpendResult};
use crate::models::{Category, ReceiptData};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Configuration for the Gemini receipt scanner
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    /// Build a config from the `GEMINI_API_KEY` environment variable
    ///
    /// Returns `None` when no key is set; the scanner is unavailable then.
    pub fn from_env(model: impl Into<String>) -> Option<Self> {
        Some(Self {
            api_key: std::env::var("GEMINI_API_KEY").ok()?,
            model: model.into(),
        })
    }
}

/// Receipt scanner backed by the Gemini API
pub struct ReceiptScanner {
    config: GeminiConfig,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

impl ReceiptScanner {
    /// Create a new scanner
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Create a scanner from the environment, if a key is available
    pub fn from_env(model: impl Into<String>) -> Option<Self> {
        Some(Self::new(GeminiConfig::from_env(model)?))
    }

    /// Scan a receipt image (JPEG bytes), returning the extracted fields
    ///
    /// Any failure (network error, HTTP error status, malformed body,
    /// non-JSON response text) is logged and yields `None`; callers treat
    /// that identically to a cancelled scan.
    pub fn scan_receipt(&self, image: &[u8]) -> Option<ReceiptData> {
        match self.extract(image) {
            Ok(receipt) => Some(receipt),
            Err(e) => {
                log::warn!("Receipt scan failed: {}", e);
                None
            }
        }
    }

    fn extract(&self, image: &[u8]) -> SpendResult<ReceiptData> {
        let request = build_request(image);
        let url = format!(
            "{}/{}:generateContent",
            GEMINI_API_BASE, self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .map_err(|e| SpendError::Scan(format!("Network error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(SpendError::Scan(format!("HTTP {}: {}", status, body)));
        }

        let body: GenerateContentResponse = response
            .json()
            .map_err(|e| SpendError::Scan(format!("Invalid response body: {}", e)))?;

        parse_response(body)
    }
}

/// The extraction instruction sent alongside the image
fn extraction_prompt() -> String {
    let categories: Vec<&str> = Category::spending().map(|c| c.label()).collect();
    format!(
        "Extract transaction details from this receipt: Total Amount, \
         Description (Store/Merchant Name), Category (pick from: {}), \
         and Date (YYYY-MM-DD).",
        categories.join(", ")
    )
}

/// JSON schema the service is asked to conform to
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "amount": { "type": "NUMBER" },
            "description": { "type": "STRING" },
            "category": { "type": "STRING" },
            "date": { "type": "STRING" }
        },
        "required": ["amount", "description", "category", "date"]
    })
}

fn build_request(image: &[u8]) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part {
                    inline_data: Some(InlineData {
                        mime_type: "image/jpeg".to_string(),
                        data: BASE64.encode(image),
                    }),
                    text: None,
                },
                Part {
                    inline_data: None,
                    text: Some(extraction_prompt()),
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(),
        },
    }
}

/// Pull the structured receipt out of a generateContent response
fn parse_response(body: GenerateContentResponse) -> SpendResult<ReceiptData> {
    let text = body
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())
        .ok_or_else(|| SpendError::Scan("Response contained no candidates".into()))?;

    serde_json::from_str(text)
        .map_err(|e| SpendError::Scan(format!("Response was not valid receipt JSON: {}", e)))
}
