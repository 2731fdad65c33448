//! Request handling: address resolution, OCR, and response shaping.

mod address;

pub use address::{
    resolve_address, resolve_with, AddressSource, Lookup, ADDRESS_SOURCES, MULTI_VALUE_SEPARATOR,
};

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::DEFAULT_PLACEHOLDER_URL;
use crate::error::Result;
use crate::models::{HttpResponse, InboundRequest, ObjectLocation, ResponseBody};
use crate::ocr::{TextDetector, TextExtractor};

/// Turns one inbound request into one response.
///
/// OCR failures and missing address sources never fail the call. Two input
/// problems do: a body that is not JSON, and an address that is not a URL
/// with a host. Those propagate as `Err` and the front door reports them as
/// a failed invocation.
#[derive(Clone)]
pub struct RequestHandler {
    extractor: TextExtractor,
    placeholder: Arc<str>,
}

impl RequestHandler {
    pub fn new(detector: Arc<dyn TextDetector>) -> Self {
        Self::with_placeholder(detector, DEFAULT_PLACEHOLDER_URL)
    }

    pub fn with_placeholder(detector: Arc<dyn TextDetector>, placeholder: &str) -> Self {
        Self {
            extractor: TextExtractor::new(detector),
            placeholder: Arc::from(placeholder),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub async fn handle(&self, request: &InboundRequest) -> Result<HttpResponse> {
        debug!(?request, "Inbound request");

        let address = resolve_address(request, &self.placeholder)?;
        let location = ObjectLocation::parse(&address)?;
        info!(bucket = %location.bucket, key = %location.key, "Resolved object");

        let text = self.extractor.extract(&location).await;

        HttpResponse::ok(&ResponseBody { text })
    }
}
