use std::fmt;

use serde::{Deserialize, Serialize};

/// Block type tag reported by the OCR service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockKind {
    Line,
    Word,
    Other(String),
}

impl From<&str> for BlockKind {
    fn from(tag: &str) -> Self {
        match tag {
            "LINE" => BlockKind::Line,
            "WORD" => BlockKind::Word,
            other => BlockKind::Other(other.to_string()),
        }
    }
}

impl From<String> for BlockKind {
    fn from(tag: String) -> Self {
        BlockKind::from(tag.as_str())
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Line => write!(f, "LINE"),
            BlockKind::Word => write!(f, "WORD"),
            BlockKind::Other(tag) => write!(f, "{tag}"),
        }
    }
}

/// One unit of OCR output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub block_type: BlockKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ContentBlock {
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            block_type: BlockKind::Line,
            text: Some(text.into()),
        }
    }

    pub fn word(text: impl Into<String>) -> Self {
        Self {
            block_type: BlockKind::Word,
            text: Some(text.into()),
        }
    }

    pub fn is_line(&self) -> bool {
        self.block_type == BlockKind::Line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kind_from_tag() {
        assert_eq!(BlockKind::from("LINE"), BlockKind::Line);
        assert_eq!(BlockKind::from("WORD"), BlockKind::Word);
        assert_eq!(BlockKind::from("PAGE"), BlockKind::Other("PAGE".to_string()));
        // Tags are case-sensitive.
        assert_eq!(BlockKind::from("line"), BlockKind::Other("line".to_string()));
    }

    #[test]
    fn test_block_kind_display_round_trips() {
        for tag in ["LINE", "WORD", "KEY_VALUE_SET"] {
            assert_eq!(BlockKind::from(tag).to_string(), tag);
        }
    }

    #[test]
    fn test_content_block_serde() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"block_type": "LINE", "text": "Hello"}"#).unwrap();
        assert!(block.is_line());
        assert_eq!(block, ContentBlock::line("Hello"));

        let page: ContentBlock = serde_json::from_str(r#"{"block_type": "PAGE"}"#).unwrap();
        assert!(!page.is_line());
        assert!(page.text.is_none());
    }
}
