use std::time::Duration;

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_textract::config::Region;
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::types::{Block, Document, S3Object};
use aws_sdk_textract::Client;
use tracing::info;

use crate::config::TextractConfig;
use crate::error::{ImgtextError, Result};
use crate::models::{BlockKind, ContentBlock, ObjectLocation};

use super::TextDetector;

/// `DetectDocumentText` over an S3 object reference.
#[derive(Clone, Debug)]
pub struct TextractDetector {
    client: Client,
}

impl TextractDetector {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_conf(conf: aws_sdk_textract::Config) -> Self {
        Self::new(Client::from_conf(conf))
    }

    /// Build the client once from the AWS default chain plus overrides.
    pub async fn from_config(config: &TextractConfig) -> Result<Self> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }

        if let Some(endpoint) = &config.endpoint_url {
            url::Url::parse(endpoint).map_err(|e| {
                ImgtextError::Config(format!("Invalid TEXTRACT_ENDPOINT_URL '{endpoint}': {e}"))
            })?;
            loader = loader.endpoint_url(endpoint.clone());
        }

        if let Some(secs) = config.timeout_secs {
            loader = loader.timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(Duration::from_secs(secs))
                    .build(),
            );
        }

        let shared = loader.load().await;
        info!(
            region = ?shared.region().map(|r| r.as_ref().to_string()),
            endpoint = ?config.endpoint_url,
            "Textract client initialized"
        );

        Ok(Self::new(Client::new(&shared)))
    }
}

fn to_content_block(block: &Block) -> ContentBlock {
    ContentBlock {
        block_type: block
            .block_type()
            .map(|t| BlockKind::from(t.as_str()))
            .unwrap_or_else(|| BlockKind::Other(String::new())),
        text: block.text().map(str::to_string),
    }
}

#[async_trait]
impl TextDetector for TextractDetector {
    async fn detect(&self, location: &ObjectLocation) -> Result<Vec<ContentBlock>> {
        let document = Document::builder()
            .s3_object(
                S3Object::builder()
                    .bucket(location.bucket.as_str())
                    .name(location.key.as_str())
                    .build(),
            )
            .build();

        let output = self
            .client
            .detect_document_text()
            .document(document)
            .send()
            .await
            .map_err(|e| ImgtextError::Textract(DisplayErrorContext(&e).to_string()))?;

        Ok(output.blocks().iter().map(to_content_block).collect())
    }
}
