//! FAQ retrieval for the Quad engine.
//!
//! Provides the in-memory corpus index, the lexical relevance scorer,
//! and the anti-repetition rotation of related questions.

pub mod corpus;
pub mod rotation;
pub mod scorer;

pub use corpus::FaqCorpus;
pub use rotation::{order_by_overlap, QuestionRotator};
pub use scorer::RelevanceScorer;
