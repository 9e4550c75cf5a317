// file: src/models/document.rs
// description: corpus document and query specification models
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub content: String,
}

impl Document {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub text: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

impl QuerySpec {
    pub fn new(text: impl Into<String>, limit: usize) -> Self {
        Self {
            text: text.into(),
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new("Tech Innovation", "artificial intelligence");
        assert_eq!(doc.title, "Tech Innovation");
        assert_eq!(doc.content, "artificial intelligence");
    }

    #[test]
    fn test_query_limit_defaults_when_missing() {
        let query: QuerySpec = serde_json::from_str(r#"{"text": "technology"}"#).unwrap();
        assert_eq!(query, QuerySpec::new("technology", 10));
    }
}
