//! Rule-based intent classification.
//!
//! Decides which response strategy handles a message: a conversational
//! canned reply, a program-specific answer, one of six keyword buckets, or
//! the general fallback. All rules live in fixed data tables loaded once;
//! matching is fixed-order, first-match-wins.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use quad_directory::ProgramDirectory;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9]+").unwrap());

/// Split a message into its lowercase word set.
fn message_words(message: &str) -> HashSet<String> {
    let lower = message.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

// =============================================================================
// Rule tables
// =============================================================================

/// A conversational intent: ordered trigger phrases plus a canned reply.
#[derive(Debug, Clone)]
pub struct ConversationalRule {
    /// Intent name, e.g. `greeting`.
    pub name: &'static str,
    /// Trigger phrases. A phrase matches when every one of its words
    /// appears somewhere among the message's words.
    pub phrases: &'static [&'static str],
    /// Canned reply returned on match.
    pub reply: &'static str,
}

/// Conversational rules in priority order; the first matching rule wins.
///
/// Matching is deliberately word-set containment rather than contiguous
/// phrase matching, which tolerates word order ("you are who?") at the cost
/// of occasional over-matching.
const CONVERSATIONAL_RULES: &[ConversationalRule] = &[
    ConversationalRule {
        name: "greeting",
        phrases: &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
        reply: "Hello! 👋 I'm Quad, your campus assistant. Ask me anything about admissions, \
                courses, fees, or campus life!",
    },
    ConversationalRule {
        name: "who_are_you",
        phrases: &["who are you", "what are you"],
        reply: "I'm Quad, the college's virtual assistant. I know the FAQ corpus inside out \
                and can point you at programs, fees, and campus facilities. 🎓",
    },
    ConversationalRule {
        name: "how_are_you",
        phrases: &["how are you"],
        reply: "I'm doing great, thanks for asking! 😄 How can I help you with the college today?",
    },
    ConversationalRule {
        name: "thanks",
        phrases: &["thank you", "thanks"],
        reply: "You're welcome! Happy to help. Is there anything else you'd like to know? 😊",
    },
    ConversationalRule {
        name: "farewell",
        phrases: &["bye", "goodbye", "see you"],
        reply: "Goodbye! 👋 Best of luck, and come back any time you have questions.",
    },
    ConversationalRule {
        name: "help",
        phrases: &["help", "what can you do"],
        reply: "I can answer questions about admissions, courses and programs, fees and \
                scholarships, placements, and campus life. Just ask in your own words! 💡",
    },
];

/// Degree abbreviations and subject names that signal a program question.
const PROGRAM_TERMS: &[&str] = &[
    "bsc", "bca", "bcom", "bba", "msc", "mcom", "ba", "degree", "course", "program",
    "programme", "computer", "science", "commerce", "management", "mathematics",
    "english",
];

/// A keyword bucket: intent plus its trigger vocabulary.
struct IntentBucket {
    intent: Intent,
    vocabulary: &'static [&'static str],
}

/// Keyword buckets in priority order; the first bucket whose vocabulary
/// overlaps the message wins.
const INTENT_BUCKETS: &[IntentBucket] = &[
    IntentBucket {
        intent: Intent::AcademicAdvice,
        vocabulary: &[
            "study", "exam", "exams", "grades", "syllabus", "semester", "subjects",
            "preparation", "tips", "advice",
        ],
    },
    IntentBucket {
        intent: Intent::CampusLife,
        vocabulary: &[
            "hostel", "campus", "library", "sports", "canteen", "club", "clubs",
            "events", "facilities", "fest",
        ],
    },
    IntentBucket {
        intent: Intent::CareerGuidance,
        vocabulary: &[
            "career", "job", "jobs", "placement", "placements", "salary", "internship",
            "future", "opportunities", "scope",
        ],
    },
    IntentBucket {
        intent: Intent::Comparison,
        vocabulary: &["compare", "comparison", "versus", "better", "difference", "between"],
    },
    IntentBucket {
        intent: Intent::Personalized,
        vocabulary: &[
            "recommend", "suggest", "confused", "interested", "personally", "prefer",
            "myself",
        ],
    },
    IntentBucket {
        intent: Intent::Creative,
        vocabulary: &["imagine", "story", "poem", "creative", "joke", "fun"],
    },
];

/// The fixed keyword vocabulary reported back with every classification.
const KEYWORD_VOCABULARY: &[&str] = &[
    "admission", "admissions", "deadline", "apply", "application", "eligibility",
    "fees", "fee", "tuition", "scholarship", "scholarships", "payment",
    "course", "courses", "program", "programs", "degree", "semester",
    "syllabus", "exam", "exams", "grades", "study",
    "hostel", "campus", "library", "sports", "canteen", "clubs", "events",
    "placement", "placements", "career", "internship", "salary", "job",
    "faculty", "department", "timings", "documents",
];

// =============================================================================
// Classification types
// =============================================================================

/// The response strategy chosen for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ProgramSpecific,
    AcademicAdvice,
    CampusLife,
    CareerGuidance,
    Comparison,
    Personalized,
    Creative,
    General,
}

/// Sentiment tag tied to the chosen bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Curious,
    Interested,
    Concerned,
    Analytical,
    Personal,
    Exploratory,
    Neutral,
}

impl Intent {
    /// The sentiment tag associated with this intent bucket.
    pub fn sentiment(self) -> Sentiment {
        match self {
            Intent::ProgramSpecific => Sentiment::Interested,
            Intent::AcademicAdvice => Sentiment::Curious,
            Intent::CampusLife => Sentiment::Exploratory,
            Intent::CareerGuidance => Sentiment::Concerned,
            Intent::Comparison => Sentiment::Analytical,
            Intent::Personalized => Sentiment::Personal,
            Intent::Creative => Sentiment::Exploratory,
            Intent::General => Sentiment::Neutral,
        }
    }
}

/// Result of classifying a message.
#[derive(Debug, Clone)]
pub struct IntentAnalysis {
    pub intent: Intent,
    /// Subset of the fixed keyword vocabulary present in the message,
    /// in vocabulary order.
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
}

// =============================================================================
// IntentClassifier
// =============================================================================

/// Rule-based classifier over the fixed rule tables.
///
/// Classification is total: it always terminates with [`Intent::General`]
/// as the default and never errors.
pub struct IntentClassifier {
    rules: &'static [ConversationalRule],
}

impl IntentClassifier {
    /// Create a classifier over the built-in rule tables.
    pub fn new() -> Self {
        Self {
            rules: CONVERSATIONAL_RULES,
        }
    }

    /// Check the message against the conversational rules.
    ///
    /// Highest priority check; callers short-circuit everything else on a
    /// match. Returns the first rule with a phrase whose every word appears
    /// among the message's words.
    pub fn match_conversational(&self, message: &str) -> Option<&'static ConversationalRule> {
        let words = message_words(message);
        if words.is_empty() {
            return None;
        }
        for rule in self.rules {
            for phrase in rule.phrases {
                if phrase.split_whitespace().all(|w| words.contains(w)) {
                    debug!("conversational match: {} via '{}'", rule.name, phrase);
                    return Some(rule);
                }
            }
        }
        None
    }

    /// Classify a non-conversational message into a response strategy.
    pub fn classify(&self, message: &str, directory: &ProgramDirectory) -> IntentAnalysis {
        let words = message_words(message);

        let keywords: Vec<String> = KEYWORD_VOCABULARY
            .iter()
            .filter(|k| words.contains(**k))
            .map(|k| k.to_string())
            .collect();

        // Program-specific check runs before all other buckets
        let program_term_hit = PROGRAM_TERMS.iter().any(|t| words.contains(*t));
        let intent = if program_term_hit || !directory.search_programs(message).is_empty() {
            Intent::ProgramSpecific
        } else {
            INTENT_BUCKETS
                .iter()
                .find(|b| b.vocabulary.iter().any(|v| words.contains(*v)))
                .map(|b| b.intent)
                .unwrap_or(Intent::General)
        };

        debug!("classified intent {:?} with {} keywords", intent, keywords.len());
        IntentAnalysis {
            intent,
            keywords,
            sentiment: intent.sentiment(),
        }
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
