use serde::{Deserialize, Serialize};

use crate::error::{ImgtextError, Result};
use crate::json::to_legacy_string;

/// Message returned in place of lines whenever the OCR call fails.
pub const TEXTRACT_ERROR_MESSAGE: &str = "Unable to process Textract request";

/// Outcome of one OCR call.
///
/// Serialized untagged, so callers see either a plain array of lines or
/// `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractionResult {
    Lines(Vec<String>),
    Error { error: String },
}

impl ExtractionResult {
    pub fn failed() -> Self {
        ExtractionResult::Error {
            error: TEXTRACT_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn lines(&self) -> Option<&[String]> {
        match self {
            ExtractionResult::Lines(lines) => Some(lines),
            ExtractionResult::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ExtractionResult::Error { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub text: ExtractionResult,
}

/// The fixed header set attached to every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeaders {
    #[serde(rename = "Content-Type")]
    pub content_type: String,
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: String,
    #[serde(rename = "Access-Control-Allow-Methods")]
    pub allow_methods: String,
    #[serde(rename = "Access-Control-Allow-Headers")]
    pub allow_headers: String,
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            content_type: "*/*".to_string(),
            allow_origin: "*".to_string(),
            allow_methods: "'POST','OPTIONS'".to_string(),
            allow_headers: "Content-Type, Authorization".to_string(),
        }
    }
}

impl ResponseHeaders {
    /// Header name/value pairs in wire order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("Content-Type", self.content_type.as_str()),
            ("Access-Control-Allow-Origin", self.allow_origin.as_str()),
            ("Access-Control-Allow-Methods", self.allow_methods.as_str()),
            ("Access-Control-Allow-Headers", self.allow_headers.as_str()),
        ]
    }
}

/// API Gateway proxy-integration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: ResponseHeaders,
    pub body: String,
}

impl HttpResponse {
    /// Always 200: OCR failures travel inside the body, not the status.
    pub fn ok(body: &ResponseBody) -> Result<Self> {
        Ok(Self {
            status_code: 200,
            headers: ResponseHeaders::default(),
            body: to_legacy_string(body).map_err(ImgtextError::Encode)?,
        })
    }

    pub fn parsed_body(&self) -> Result<ResponseBody> {
        serde_json::from_str(&self.body).map_err(ImgtextError::Decode)
    }
}
