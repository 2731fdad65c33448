use std::sync::Arc;

use tracing::{debug, error};

use crate::models::{ContentBlock, ExtractionResult, ObjectLocation};

use super::TextDetector;

/// Text of every `LINE` block, in the order the service returned them.
pub fn collect_lines<I>(blocks: I) -> Vec<String>
where
    I: IntoIterator<Item = ContentBlock>,
{
    blocks
        .into_iter()
        .filter(ContentBlock::is_line)
        .filter_map(|block| block.text)
        .collect()
}

#[derive(Clone)]
pub struct TextExtractor {
    detector: Arc<dyn TextDetector>,
}

impl TextExtractor {
    pub fn new(detector: Arc<dyn TextDetector>) -> Self {
        Self { detector }
    }

    /// Never fails: network, permission, object and quota errors all collapse
    /// into [`ExtractionResult::failed`].
    pub async fn extract(&self, location: &ObjectLocation) -> ExtractionResult {
        match self.detector.detect(location).await {
            Ok(blocks) => {
                let lines = collect_lines(blocks);
                debug!(
                    bucket = %location.bucket,
                    key = %location.key,
                    lines = lines.len(),
                    "Textract detection complete"
                );
                ExtractionResult::Lines(lines)
            }
            Err(e) => {
                error!(
                    bucket = %location.bucket,
                    key = %location.key,
                    error = %e,
                    "Error in Textract"
                );
                ExtractionResult::failed()
            }
        }
    }
}
