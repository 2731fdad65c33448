//! OCR (Optical Character Recognition) Module
//!
//! Turns an object reference into recognized text lines.
//!
//! # Architecture
//!
//! - `TextDetector` trait is the seam to the remote OCR service. It returns raw
//!   content blocks for an object and may fail for any reason.
//! - `TextractDetector` implements it with AWS Textract `DetectDocumentText`,
//!   handing Textract the bucket/key so the image bytes never pass through
//!   this function.
//! - `TextExtractor` keeps only `LINE` blocks, in service order, and folds every
//!   detector failure into the fixed error payload.
//!
//! # Configuration
//!
//! The Textract client is controlled via `TextractConfig` (see `config.rs`):
//! - `region`: overrides the region from the AWS default chain
//! - `endpoint_url`: points the client at an emulator or mock
//! - `timeout_secs`: optional operation timeout (none by default)
//!
//! SDK retries are always disabled.
//!
//! # Usage
//!
//! ```rust,ignore
//! let detector = TextractDetector::from_config(&config.textract).await?;
//! let extractor = TextExtractor::new(Arc::new(detector));
//! let result = extractor.extract(&ObjectLocation::new("bucket", "scan.png")).await;
//! ```

mod api;
mod provider;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ContentBlock, ObjectLocation};

pub use api::TextractDetector;
pub use provider::{collect_lines, TextExtractor};

/// Runs text detection against an object that the OCR service reads itself.
#[async_trait]
pub trait TextDetector: Send + Sync {
    async fn detect(&self, location: &ObjectLocation) -> Result<Vec<ContentBlock>>;
}
