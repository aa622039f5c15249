//! Shared types for the Quad engine.
//!
//! These are the boundary types exchanged between the FAQ index, the
//! chat synthesizer, and the caller's transport layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single question/answer record in the FAQ corpus.
///
/// `question` text serves as the de facto unique key within the corpus;
/// the rotation mechanism tracks recently shown items by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// Free-text category name.
    pub category: String,
    /// Link to the page the answer came from.
    pub link: String,
}

/// A raw FAQ record as it appears in a source collection.
///
/// Source collections may omit `category`; the corpus loader fills in
/// a default when it is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqSource {
    pub question: String,
    pub answer: String,
    pub link: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// A corpus item paired with its relevance score for a query.
///
/// Scores are always >= 1; zero-scoring items are dropped by the scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredFaq {
    pub item: FaqItem,
    pub score: u32,
}

/// Which strategy produced a chat response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    /// Canned reply to a conversational message (greeting, thanks, ...).
    Conversational,
    /// Intent-specific generated answer.
    AiGenerated,
    /// Creative-intent generated answer.
    Creative,
    /// Single best FAQ match wrapped in the standard template.
    FaqEnhanced,
    /// Generic response when nothing matched.
    Fallback,
}

impl std::fmt::Display for ResponseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResponseSource::Conversational => "conversational",
            ResponseSource::AiGenerated => "ai_generated",
            ResponseSource::Creative => "creative",
            ResponseSource::FaqEnhanced => "faq_enhanced",
            ResponseSource::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

/// The response returned for a processed message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Rendered answer text.
    pub answer: String,
    /// Confidence in [0, 1].
    pub confidence: f32,
    /// Which strategy produced the answer.
    pub source: ResponseSource,
    /// Related FAQ items to surface alongside the answer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_faqs: Vec<FaqItem>,
    /// Category of the answering FAQ item, when one was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Link of the answering FAQ item, when one was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Short note on why this strategy was chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// Per-category item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Corpus statistics exposed to operators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqStats {
    pub total: usize,
    pub categories: Vec<CategoryCount>,
}

/// Summary of a live conversation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub started_at: String,
    pub last_message_at: String,
    pub message_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_source_display() {
        assert_eq!(ResponseSource::Conversational.to_string(), "conversational");
        assert_eq!(ResponseSource::AiGenerated.to_string(), "ai_generated");
        assert_eq!(ResponseSource::Creative.to_string(), "creative");
        assert_eq!(ResponseSource::FaqEnhanced.to_string(), "faq_enhanced");
        assert_eq!(ResponseSource::Fallback.to_string(), "fallback");
    }

    #[test]
    fn test_response_source_serde_snake_case() {
        let json = serde_json::to_string(&ResponseSource::FaqEnhanced).unwrap();
        assert_eq!(json, "\"faq_enhanced\"");
        let back: ResponseSource = serde_json::from_str("\"ai_generated\"").unwrap();
        assert_eq!(back, ResponseSource::AiGenerated);
    }

    #[test]
    fn test_faq_source_optional_category() {
        let json = r#"{"question":"Q?","answer":"A.","link":"https://example.edu/faq"}"#;
        let src: FaqSource = serde_json::from_str(json).unwrap();
        assert!(src.category.is_none());

        let json = r#"{"question":"Q?","answer":"A.","link":"l","category":"Admissions"}"#;
        let src: FaqSource = serde_json::from_str(json).unwrap();
        assert_eq!(src.category.as_deref(), Some("Admissions"));
    }

    #[test]
    fn test_chat_response_skips_empty_optionals() {
        let resp = ChatResponse {
            answer: "hello".to_string(),
            confidence: 0.3,
            source: ResponseSource::Fallback,
            related_faqs: vec![],
            category: None,
            link: None,
            reasoning: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("related_faqs"));
        assert!(!json.contains("category"));
        assert!(!json.contains("reasoning"));
    }
}
