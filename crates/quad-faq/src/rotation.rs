//! Anti-repetition rotation of related questions.
//!
//! Selects up to N related FAQ questions per turn without repeating the
//! same set across consecutive turns. Keeps a per-category rotation offset
//! and one global set of recently shown question texts.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use quad_core::config::RotationConfig;
use quad_core::types::FaqItem;

use crate::corpus::keywords;

/// Order candidates by word overlap with the originating message.
///
/// Overlap counts distinct indexed keywords shared between the message and
/// the candidate question. Sort is descending and stable, so equal-overlap
/// candidates keep their incoming order.
pub fn order_by_overlap(mut candidates: Vec<FaqItem>, message: &str) -> Vec<FaqItem> {
    let message_words = keywords(message);
    let overlap = |item: &FaqItem| -> usize {
        let question_words = keywords(&item.question);
        question_words
            .iter()
            .filter(|w| message_words.contains(w))
            .count()
    };
    candidates.sort_by_key(|item| std::cmp::Reverse(overlap(item)));
    candidates
}

/// Rotating selector of related questions.
///
/// State is mutated by every retrieval; one instance belongs to exactly one
/// conversation session.
pub struct QuestionRotator {
    /// Per-category offset into that category's candidate list.
    offsets: HashMap<String, usize>,
    /// Question texts shown recently, across all categories.
    recently_shown: HashSet<String>,
    related_count: usize,
    recently_shown_cap: usize,
}

impl QuestionRotator {
    /// Create a rotator with the configured selection size and cap.
    pub fn new(config: &RotationConfig) -> Self {
        Self {
            offsets: HashMap::new(),
            recently_shown: HashSet::new(),
            related_count: config.related_count,
            recently_shown_cap: config.recently_shown_cap,
        }
    }

    /// Select up to the configured number of related questions.
    ///
    /// Rotates the candidate list to the stored per-category offset, skips
    /// recently shown questions (clearing the set once if fewer than the
    /// requested count remain fresh), marks the selection as shown, and
    /// advances the offset by the number selected.
    pub fn next_related(&mut self, category: &str, candidates: &[FaqItem]) -> Vec<FaqItem> {
        if candidates.is_empty() {
            return Vec::new();
        }
        let len = candidates.len();
        let offset = self.offsets.get(category).copied().unwrap_or(0) % len;

        let rotated: Vec<&FaqItem> = candidates[offset..]
            .iter()
            .chain(candidates[..offset].iter())
            .collect();

        let mut fresh: Vec<&FaqItem> = rotated
            .iter()
            .filter(|i| !self.recently_shown.contains(&i.question))
            .copied()
            .collect();

        if fresh.len() < self.related_count {
            debug!(
                "only {} fresh candidates in '{}', clearing recently-shown set",
                fresh.len(),
                category
            );
            self.recently_shown.clear();
            fresh = rotated;
        }

        let selected: Vec<FaqItem> = fresh
            .into_iter()
            .take(self.related_count)
            .cloned()
            .collect();

        for item in &selected {
            self.recently_shown.insert(item.question.clone());
        }
        self.offsets
            .insert(category.to_string(), (offset + selected.len()) % len);

        if self.recently_shown.len() > self.recently_shown_cap {
            self.recently_shown.clear();
        }

        selected
    }

    /// Clear all rotation state: offsets and the recently-shown set.
    pub fn reset(&mut self) {
        self.offsets.clear();
        self.recently_shown.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================
