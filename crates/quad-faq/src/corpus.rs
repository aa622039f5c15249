//! In-memory FAQ corpus and its indexes.
//!
//! The corpus is loaded once from source collections and never changes
//! afterwards; every accessor is a pure read.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use quad_core::types::{CategoryCount, FaqItem, FaqSource, FaqStats};

/// Category assigned to source records that carry none.
pub const DEFAULT_CATEGORY: &str = "General Information";

/// Minimum length a word must exceed to enter the keyword index.
const KEYWORD_MIN_LEN: usize = 3;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9]+").unwrap());

/// Extract index keywords from question text.
///
/// Lowercases, strips punctuation, and keeps distinct alphanumeric words
/// longer than three characters, in first-seen order.
pub fn keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen = Vec::new();
    for m in WORD_RE.find_iter(&lower) {
        let word = m.as_str();
        if word.len() > KEYWORD_MIN_LEN && !seen.iter().any(|s| s == word) {
            seen.push(word.to_string());
        }
    }
    seen
}

// =============================================================================
// FaqCorpus
// =============================================================================

/// Immutable, queryable view of the FAQ corpus.
///
/// Holds the concatenated items plus two indexes built once at load time:
/// category -> items (insertion order) and question keyword -> items.
pub struct FaqCorpus {
    items: Vec<FaqItem>,
    by_category: HashMap<String, Vec<usize>>,
    by_keyword: HashMap<String, Vec<usize>>,
    /// Deduplicated categories in first-seen order, derived from the items.
    categories: Vec<String>,
}

impl FaqCorpus {
    /// Build a corpus from source collections.
    ///
    /// Collections are concatenated in order; records without a category
    /// get [`DEFAULT_CATEGORY`].
    pub fn load(sources: Vec<Vec<FaqSource>>) -> Self {
        let items: Vec<FaqItem> = sources
            .into_iter()
            .flatten()
            .map(|src| FaqItem {
                question: src.question,
                answer: src.answer,
                link: src.link,
                category: src.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            })
            .collect();
        debug!("FAQ corpus loaded with {} items", items.len());
        Self::from_items(items)
    }

    /// Build a corpus from JSON-encoded source collections.
    ///
    /// A collection that fails to parse degrades the whole corpus to empty
    /// rather than erroring; downstream queries then behave as "no match".
    pub fn from_json(sources: &[&str]) -> Self {
        let mut parsed = Vec::with_capacity(sources.len());
        for (i, raw) in sources.iter().enumerate() {
            match serde_json::from_str::<Vec<FaqSource>>(raw) {
                Ok(records) => parsed.push(records),
                Err(e) => {
                    warn!("FAQ source {} failed to parse, loading empty corpus: {}", i, e);
                    return Self::from_items(Vec::new());
                }
            }
        }
        Self::load(parsed)
    }

    fn from_items(items: Vec<FaqItem>) -> Self {
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_keyword: HashMap<String, Vec<usize>> = HashMap::new();
        let mut categories: Vec<String> = Vec::new();

        for (idx, item) in items.iter().enumerate() {
            by_category
                .entry(item.category.clone())
                .or_default()
                .push(idx);
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
            for word in keywords(&item.question) {
                by_keyword.entry(word).or_default().push(idx);
            }
        }

        Self {
            items,
            by_category,
            by_keyword,
            categories,
        }
    }

    /// All items in insertion order.
    pub fn all(&self) -> &[FaqItem] {
        &self.items
    }

    /// Number of items in the corpus.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the corpus contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when the corpus loaded at least one item.
    pub fn is_ready(&self) -> bool {
        !self.items.is_empty()
    }

    /// Items in a category, in insertion order. Unknown category is empty.
    pub fn by_category(&self, category: &str) -> Vec<&FaqItem> {
        self.by_category
            .get(category)
            .map(|ids| ids.iter().map(|&i| &self.items[i]).collect())
            .unwrap_or_default()
    }

    /// Items whose question contains an indexed keyword, in insertion order.
    pub fn by_keyword(&self, word: &str) -> Vec<&FaqItem> {
        self.by_keyword
            .get(word)
            .map(|ids| ids.iter().map(|&i| &self.items[i]).collect())
            .unwrap_or_default()
    }

    /// Items matching any of the given keywords, deduplicated, in
    /// insertion order.
    pub fn by_keywords(&self, words: &[String]) -> Vec<&FaqItem> {
        let mut ids: Vec<usize> = Vec::new();
        for word in words {
            if let Some(bucket) = self.by_keyword.get(word.as_str()) {
                for &i in bucket {
                    if !ids.contains(&i) {
                        ids.push(i);
                    }
                }
            }
        }
        ids.sort_unstable();
        ids.into_iter().map(|i| &self.items[i]).collect()
    }

    /// Deduplicated category names in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Corpus statistics: total item count plus per-category counts.
    pub fn stats(&self) -> FaqStats {
        let categories = self
            .categories
            .iter()
            .map(|c| CategoryCount {
                category: c.clone(),
                count: self.by_category.get(c).map_or(0, Vec::len),
            })
            .collect();
        FaqStats {
            total: self.items.len(),
            categories,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
