//! Lexical relevance scoring over the FAQ corpus.
//!
//! Ranks corpus items against a free-text query using weighted substring
//! containment. Absence of a match is never an error: short queries and
//! unmatched queries return empty results.

use std::sync::Arc;

use tracing::debug;

use quad_core::config::ScoringConfig;
use quad_core::types::ScoredFaq;

use crate::corpus::FaqCorpus;

/// Weight for the full query appearing in the question text.
const WEIGHT_QUERY_IN_QUESTION: u32 = 10;
/// Weight for the full query appearing in the answer text.
const WEIGHT_QUERY_IN_ANSWER: u32 = 5;
/// Weight for the full query appearing in the category name.
const WEIGHT_QUERY_IN_CATEGORY: u32 = 3;
/// Per-word weight for a query word appearing in the question text.
const WEIGHT_WORD_IN_QUESTION: u32 = 2;
/// Per-word weight for a query word appearing in the answer text.
const WEIGHT_WORD_IN_ANSWER: u32 = 1;

/// Score at which confidence saturates: a query contained in both question
/// and answer earns 10 + 5 before per-word bonuses.
const CONFIDENCE_SCALE: f32 = 15.0;

/// Program and course name fragments checked when a message scores too low
/// through the primary path. Ordered most specific first; first fragment
/// contained in the message wins.
const PROGRAM_FRAGMENTS: &[&str] = &[
    "cyber forensic",
    "bsc ai ml",
    "bsc computer science",
    "artificial intelligence",
    "machine learning",
    "data analytics",
    "computer science",
    "computer applications",
    "business administration",
    "english literature",
];

/// Map a relevance score to the [0, 1] confidence scale.
pub fn score_to_confidence(score: u32) -> f32 {
    (score as f32 / CONFIDENCE_SCALE).min(1.0)
}

/// Lexical scorer over an immutable corpus.
pub struct RelevanceScorer {
    corpus: Arc<FaqCorpus>,
    min_query_length: usize,
    fragment_threshold: f32,
}

impl RelevanceScorer {
    /// Create a scorer over the given corpus.
    pub fn new(corpus: Arc<FaqCorpus>, config: &ScoringConfig) -> Self {
        Self {
            corpus,
            min_query_length: config.min_query_length,
            fragment_threshold: config.fragment_confidence_threshold,
        }
    }

    /// Rank corpus items against a query.
    ///
    /// The query is trimmed and lowercased; normalized queries shorter than
    /// the configured minimum return no results. Items with score zero are
    /// dropped; the rest are sorted descending by score with ties keeping
    /// corpus order.
    pub fn search(&self, query: &str) -> Vec<ScoredFaq> {
        let normalized = query.trim().to_lowercase();
        // Character count, not byte length: accented queries must not slip
        // past the minimum
        if normalized.chars().count() < self.min_query_length {
            return Vec::new();
        }
        let words: Vec<&str> = normalized.split_whitespace().collect();

        let mut results: Vec<ScoredFaq> = self
            .corpus
            .all()
            .iter()
            .filter_map(|item| {
                let question = item.question.to_lowercase();
                let answer = item.answer.to_lowercase();
                let category = item.category.to_lowercase();

                let mut score = 0;
                if question.contains(&normalized) {
                    score += WEIGHT_QUERY_IN_QUESTION;
                }
                if answer.contains(&normalized) {
                    score += WEIGHT_QUERY_IN_ANSWER;
                }
                if category.contains(&normalized) {
                    score += WEIGHT_QUERY_IN_CATEGORY;
                }
                for word in &words {
                    if question.contains(word) {
                        score += WEIGHT_WORD_IN_QUESTION;
                    }
                    if answer.contains(word) {
                        score += WEIGHT_WORD_IN_ANSWER;
                    }
                }

                (score > 0).then(|| ScoredFaq {
                    item: item.clone(),
                    score,
                })
            })
            .collect();

        // Stable sort keeps corpus order for equal scores
        results.sort_by(|a, b| b.score.cmp(&a.score));
        debug!("search '{}' matched {} items", normalized, results.len());
        results
    }

    /// The top-ranked item for a query, if any.
    pub fn find_best_match(&self, query: &str) -> Option<ScoredFaq> {
        self.search(query).into_iter().next()
    }

    /// Secondary matching path for short program/course-name messages.
    ///
    /// Scans the fixed fragment list for the first fragment contained in the
    /// message, re-runs the search on that fragment alone, and accepts the
    /// top hit only if its confidence clears the configured threshold.
    /// Short course-name queries otherwise score too low against a large
    /// corpus.
    pub fn find_program_match(&self, message: &str) -> Option<ScoredFaq> {
        let lower = message.to_lowercase();
        let fragment = PROGRAM_FRAGMENTS.iter().find(|f| lower.contains(**f))?;

        let best = self.find_best_match(fragment)?;
        let confidence = score_to_confidence(best.score);
        if confidence > self.fragment_threshold {
            debug!(
                "program fragment '{}' accepted with confidence {:.2}",
                fragment, confidence
            );
            Some(best)
        } else {
            debug!(
                "program fragment '{}' rejected with confidence {:.2}",
                fragment, confidence
            );
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quad_core::types::FaqSource;

    fn src(question: &str, answer: &str, category: &str) -> FaqSource {
        FaqSource {
            question: question.to_string(),
            answer: answer.to_string(),
            link: "https://example.edu/faq".to_string(),
            category: Some(category.to_string()),
        }
    }

    fn scorer_over(sources: Vec<FaqSource>) -> RelevanceScorer {
        let corpus = Arc::new(FaqCorpus::load(vec![sources]));
        RelevanceScorer::new(corpus, &ScoringConfig::default())
    }

    fn sample_scorer() -> RelevanceScorer {
        scorer_over(vec![
            src(
                "What is the admission deadline?",
                "Applications close on June 30.",
                "Admissions",
            ),
            src(
                "How much is the tuition fee?",
                "Tuition depends on the program.",
                "Fees & Scholarships",
            ),
            src(
                "Does the college offer BSc Computer Science?",
                "Yes, the computer science department runs a three-year BSc Computer Science program.",
                "Courses & Programs",
            ),
            src(
                "What about cyber forensic courses?",
                "The BSc Cyber Forensic & Data Analytics program covers digital forensics.",
                "Courses & Programs",
            ),
        ])
    }

    // ---- Query normalization ----

    #[test]
    fn test_short_query_returns_empty() {
        let scorer = sample_scorer();
        assert!(scorer.search("").is_empty());
        assert!(scorer.search("ab").is_empty());
        assert!(scorer.search("  a  ").is_empty());
    }

    #[test]
    fn test_three_char_query_is_searched() {
        let scorer = sample_scorer();
        assert!(!scorer.search("fee").is_empty());
    }

    #[test]
    fn test_min_query_length_counts_characters_not_bytes() {
        let scorer = scorer_over(vec![src(
            "Does the café have wifi?",
            "Yes, the café has free wifi.",
            "Campus Life",
        )]);
        // "fé" is two characters (three bytes) and contained in "café"
        assert!(scorer.search("fé").is_empty());
        assert!(!scorer.search("café").is_empty());
    }

    #[test]
    fn test_query_case_insensitive() {
        let scorer = sample_scorer();
        let upper = scorer.search("ADMISSION DEADLINE");
        let lower = scorer.search("admission deadline");
        assert_eq!(upper.len(), lower.len());
        assert_eq!(upper[0].item.question, lower[0].item.question);
    }

    // ---- Scoring weights ----

    #[test]
    fn test_full_phrase_in_question_scores_at_least_ten() {
        let scorer = sample_scorer();
        let best = scorer.find_best_match("admission deadline").unwrap();
        assert_eq!(best.item.question, "What is the admission deadline?");
        assert!(best.score >= 10);
    }

    #[test]
    fn test_word_hits_accumulate() {
        // "admission deadline": phrase in question (10) + "admission" in
        // question (2) + "deadline" in question (2) = 14
        let scorer = sample_scorer();
        let best = scorer.find_best_match("admission deadline").unwrap();
        assert_eq!(best.score, 14);
    }

    #[test]
    fn test_answer_only_match_scores_lower() {
        let scorer = scorer_over(vec![
            src("What are the hostel rules?", "Curfew applies after 10pm.", "Campus Life"),
            src("When is curfew?", "Hostel curfew applies after 10pm.", "Campus Life"),
        ]);
        let results = scorer.search("curfew");
        // Question hit (10 + 2) outranks answer-only hit
        assert_eq!(results[0].item.question, "When is curfew?");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_category_containment_counts() {
        let scorer = sample_scorer();
        let results = scorer.search("admissions");
        assert!(results
            .iter()
            .any(|r| r.item.category == "Admissions" && r.score >= 3));
    }

    #[test]
    fn test_all_scores_positive() {
        let scorer = sample_scorer();
        for r in scorer.search("program") {
            assert!(r.score > 0);
        }
    }

    // ---- Ordering ----

    #[test]
    fn test_sorted_descending() {
        let scorer = sample_scorer();
        let results = scorer.search("computer science program");
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let scorer = scorer_over(vec![
            src("First campus question", "campus info", "General Information"),
            src("Second campus question", "campus info", "General Information"),
        ]);
        let results = scorer.search("campus");
        assert_eq!(results[0].item.question, "First campus question");
        assert_eq!(results[1].item.question, "Second campus question");
        assert_eq!(results[0].score, results[1].score);
    }

    #[test]
    fn test_find_best_match_is_first_of_search() {
        let scorer = sample_scorer();
        let best = scorer.find_best_match("tuition fee").unwrap();
        let all = scorer.search("tuition fee");
        assert_eq!(best, all[0]);
    }

    #[test]
    fn test_find_best_match_none_on_no_hits() {
        let scorer = sample_scorer();
        assert!(scorer.find_best_match("zzxxqqpp").is_none());
    }

    // ---- Empty corpus ----

    #[test]
    fn test_empty_corpus_no_results() {
        let scorer = scorer_over(vec![]);
        assert!(scorer.search("admission deadline").is_empty());
        assert!(scorer.find_best_match("admission deadline").is_none());
    }

    // ---- Confidence mapping ----

    #[test]
    fn test_confidence_scale() {
        assert!((score_to_confidence(15) - 1.0).abs() < f32::EPSILON);
        assert!(score_to_confidence(30) <= 1.0);
        assert!(score_to_confidence(7) < 0.5);
        assert_eq!(score_to_confidence(0), 0.0);
    }

    // ---- Program fragment path ----

    #[test]
    fn test_fragment_match_accepted() {
        let scorer = sample_scorer();
        // "cyber forensic" appears in a question verbatim: 10 + 2 + 2 plus
        // answer word hits clears the 0.7 gate
        let hit = scorer
            .find_program_match("im interested in cyber forensic")
            .unwrap();
        assert!(hit.item.question.contains("cyber forensic"));
    }

    #[test]
    fn test_fragment_no_fragment_in_message() {
        let scorer = sample_scorer();
        assert!(scorer.find_program_match("when does the semester start").is_none());
    }

    #[test]
    fn test_fragment_weak_match_rejected() {
        // Fragment only appears in an answer: 5 + word bonuses stays under
        // the 0.7 confidence gate
        let scorer = scorer_over(vec![src(
            "What optional modules exist?",
            "Electives include machine learning basics.",
            "Courses & Programs",
        )]);
        assert!(scorer.find_program_match("tell me about machine learning").is_none());
    }

    #[test]
    fn test_fragment_priority_order() {
        // Message contains both "cyber forensic" and "data analytics";
        // "cyber forensic" is earlier in the priority list
        let scorer = sample_scorer();
        let hit = scorer
            .find_program_match("cyber forensic or data analytics?")
            .unwrap();
        assert_eq!(hit.item.question, "What about cyber forensic courses?");
    }
}
