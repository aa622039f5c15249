//! Conversational engine for the Quad college chatbot.
//!
//! Classifies incoming messages, tracks short-term conversation context,
//! and synthesizes persona-voiced answers from the FAQ corpus. The
//! [`ResponseSynthesizer`] is the only entry point; the caller's transport
//! layer owns everything outside it.

pub mod classifier;
pub mod context;
pub mod error;
pub mod response;
pub mod synthesizer;

pub use classifier::{Intent, IntentAnalysis, IntentClassifier, Sentiment};
pub use context::{ContextSummary, ContextTracker, Depth, Mood};
pub use error::ChatError;
pub use response::{bundle_for_category, AnswerSections, LinkBundle, LinkRef};
pub use synthesizer::ResponseSynthesizer;
