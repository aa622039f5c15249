//! Short-term conversation memory.
//!
//! Keeps a bounded rolling window of recent user messages and derives a
//! coarse topic/mood/depth summary from the most recent few.

use std::collections::VecDeque;

/// Topic vocabulary scanned when deriving the dominant topic.
const TOPIC_VOCABULARY: &[&str] = &[
    "admission", "fees", "scholarship", "courses", "hostel", "placement",
    "exams", "library", "sports", "faculty",
];

/// Words counted toward a positive mood.
const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "thanks", "excited", "love", "awesome", "happy", "interested",
];

/// Words counted toward a negative mood.
const NEGATIVE_WORDS: &[&str] = &[
    "worried", "confused", "bad", "difficult", "problem", "stressed", "afraid", "unsure",
];

/// Overall mood inferred from recent messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

/// How far into a conversation the user is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Surface,
    Deep,
}

/// Summary derived from the context window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSummary {
    /// Most frequent topic keyword across recent messages; `"general"`
    /// when nothing from the vocabulary appears.
    pub topic: String,
    pub mood: Mood,
    pub depth: Depth,
}

/// Bounded FIFO of recent normalized user messages.
pub struct ContextTracker {
    messages: VecDeque<String>,
    window: usize,
    analysis_window: usize,
}

impl ContextTracker {
    /// Create a tracker keeping `window` messages and analyzing the most
    /// recent `analysis_window` of them.
    pub fn new(window: usize, analysis_window: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(window + 1),
            window,
            analysis_window,
        }
    }

    /// Append a message, evicting the oldest once the window is full.
    ///
    /// Messages are normalized (trimmed, lowercased) before storage.
    pub fn push(&mut self, message: &str) {
        self.messages.push_back(message.trim().to_lowercase());
        while self.messages.len() > self.window {
            self.messages.pop_front();
        }
    }

    /// The stored messages, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Number of messages currently held.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no messages have been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Derive topic, mood, and depth from the recent window.
    pub fn analyze(&self) -> ContextSummary {
        let recent: Vec<&String> = self
            .messages
            .iter()
            .rev()
            .take(self.analysis_window)
            .collect();

        let tokens: Vec<&str> = recent
            .iter()
            .flat_map(|m| m.split_whitespace())
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .collect();
        let count_hits = |word: &str| tokens.iter().filter(|t| **t == word).count();

        // Topic: most frequent vocabulary word; ties keep vocabulary order
        let mut topic = "general".to_string();
        let mut best = 0usize;
        for word in TOPIC_VOCABULARY {
            let hits = count_hits(word);
            if hits > best {
                best = hits;
                topic = word.to_string();
            }
        }

        let positive: usize = POSITIVE_WORDS.iter().map(|w| count_hits(w)).sum();
        let negative: usize = NEGATIVE_WORDS.iter().map(|w| count_hits(w)).sum();
        let mood = if positive > negative {
            Mood::Positive
        } else if negative > positive {
            Mood::Negative
        } else {
            Mood::Neutral
        };

        let depth = if self.messages.len() > 2 {
            Depth::Deep
        } else {
            Depth::Surface
        };

        ContextSummary { topic, mood, depth }
    }
}

// =============================================================================
// Tests
// =============================================================================
