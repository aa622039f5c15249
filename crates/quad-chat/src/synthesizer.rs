//! Response synthesis: the engine's only entry point.
//!
//! Coordinates the classifier, per-session context and rotation state, the
//! relevance scorer, and the answer builder. Once a message passes boundary
//! validation, every path through `process_message` produces a response;
//! generator misses degrade to the FAQ fallback and then to the generic
//! fallback rather than erroring.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Local, TimeZone};
use tracing::debug;
use uuid::Uuid;

use quad_core::config::QuadConfig;
use quad_core::types::{
    ChatResponse, FaqItem, FaqStats, ResponseSource, ScoredFaq, SessionSummary,
};
use quad_directory::ProgramDirectory;
use quad_faq::{order_by_overlap, FaqCorpus, QuestionRotator, RelevanceScorer};

use crate::classifier::{Intent, IntentAnalysis, IntentClassifier};
use crate::context::ContextTracker;
use crate::error::ChatError;
use crate::response::AnswerSections;

/// Confidence of a conversational canned reply.
const CONFIDENCE_CONVERSATIONAL: f32 = 0.95;
/// Confidence of the single-best-FAQ fallback.
const CONFIDENCE_FAQ_ENHANCED: f32 = 0.9;
/// Confidence of the generic fallback.
const CONFIDENCE_FALLBACK: f32 = 0.3;

/// Synthetic rotation key for the popular-question pool used by fallbacks.
const POPULAR_ROTATION_KEY: &str = "__popular__";

/// Per-conversation state: context window and rotation state are owned by
/// exactly one session, never shared across conversations.
struct Session {
    id: Uuid,
    started_at: i64,
    last_message_at: i64,
    message_count: u64,
    tracker: ContextTracker,
    rotator: QuestionRotator,
}

/// The engine entry point.
///
/// Holds the immutable corpus, scorer, classifier, and directory, plus the
/// mutable per-session state behind a mutex keyed by session ID.
pub struct ResponseSynthesizer {
    config: QuadConfig,
    corpus: Arc<FaqCorpus>,
    scorer: RelevanceScorer,
    classifier: IntentClassifier,
    directory: ProgramDirectory,
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl ResponseSynthesizer {
    /// Create a synthesizer over a loaded corpus and program directory.
    pub fn new(config: QuadConfig, corpus: Arc<FaqCorpus>, directory: ProgramDirectory) -> Self {
        let scorer = RelevanceScorer::new(Arc::clone(&corpus), &config.scoring);
        Self {
            config,
            corpus,
            scorer,
            classifier: IntentClassifier::new(),
            directory,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Handle an incoming chat message.
    ///
    /// Returns the generated response and the session ID (new or existing).
    /// The only error paths are boundary validation and session state
    /// access; the engine itself always produces a response.
    pub fn process_message(
        &self,
        session_id: Option<Uuid>,
        text: &str,
    ) -> Result<(ChatResponse, Uuid), ChatError> {
        if !self.config.chat.enabled {
            return Err(ChatError::Disabled);
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if text.len() > self.config.chat.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.chat.max_message_length));
        }

        // Resolution and mutation happen under one lock acquisition, so a
        // concurrent delete cannot invalidate the resolved ID in between
        let mut sessions = self.lock_sessions()?;
        let sid = self.resolve_session(&mut sessions, session_id);
        let session = sessions
            .get_mut(&sid)
            .ok_or(ChatError::SessionNotFound(sid))?;
        session.last_message_at = Local::now().timestamp();
        session.message_count += 1;
        session.tracker.push(trimmed);

        let response = self.synthesize(trimmed, session);
        Ok((response, sid))
    }

    /// One suggested question per popular category present in the corpus.
    pub fn suggested_questions(&self) -> Vec<String> {
        self.config
            .chat
            .popular_categories
            .iter()
            .filter_map(|c| {
                self.corpus
                    .by_category(c)
                    .first()
                    .map(|i| i.question.clone())
            })
            .collect()
    }

    /// Corpus statistics.
    pub fn faq_stats(&self) -> FaqStats {
        self.corpus.stats()
    }

    /// Clear the rotation state of every live session.
    ///
    /// Test/operational hook; contexts and sessions themselves survive.
    pub fn reset_rotation_state(&self) -> Result<(), ChatError> {
        let mut sessions = self.lock_sessions()?;
        for session in sessions.values_mut() {
            session.rotator.reset();
        }
        Ok(())
    }

    /// List all active sessions as summaries.
    pub fn list_sessions(&self) -> Vec<SessionSummary> {
        let sessions = match self.sessions.lock() {
            Ok(s) => s,
            Err(_) => return vec![],
        };
        sessions.values().map(summarize).collect()
    }

    /// Summary of one session, if it exists.
    pub fn get_session(&self, session_id: Uuid) -> Option<SessionSummary> {
        let sessions = self.sessions.lock().ok()?;
        sessions.get(&session_id).map(summarize)
    }

    /// Delete a session and its context/rotation state.
    pub fn delete_session(&self, session_id: Uuid) -> Result<(), ChatError> {
        let mut sessions = self.lock_sessions()?;
        if sessions.remove(&session_id).is_some() {
            Ok(())
        } else {
            Err(ChatError::SessionNotFound(session_id))
        }
    }

    // -- Synthesis pipeline --

    /// Produce a response for a validated message. Infallible by design:
    /// every branch below returns a `ChatResponse`.
    fn synthesize(&self, message: &str, session: &mut Session) -> ChatResponse {
        let normalized = message.to_lowercase();

        // Conversational check short-circuits everything else
        if let Some(rule) = self.classifier.match_conversational(&normalized) {
            return ChatResponse {
                answer: rule.reply.to_string(),
                confidence: CONFIDENCE_CONVERSATIONAL,
                source: ResponseSource::Conversational,
                related_faqs: self.popular_faqs(),
                category: None,
                link: None,
                reasoning: Some(format!("conversational intent: {}", rule.name)),
            };
        }

        let analysis = self.classifier.classify(&normalized, &self.directory);
        if let Some(response) = self.generate(&analysis, &normalized, session) {
            return response;
        }

        // No dedicated generator result: fall back to the single best match
        if let Some(best) = self.scorer.find_best_match(&normalized) {
            debug!("faq_enhanced fallback for '{}'", normalized);
            return self.compose(
                best,
                CONFIDENCE_FAQ_ENHANCED,
                ResponseSource::FaqEnhanced,
                "best direct corpus match",
                "Here's what I found. 📖",
                &normalized,
                session,
            );
        }

        self.fallback(session)
    }

    /// Dispatch to the generator for a classified intent.
    ///
    /// Returns `None` when the intent has no dedicated generator
    /// (`general`) or when the generator finds nothing to answer with.
    fn generate(
        &self,
        analysis: &IntentAnalysis,
        message: &str,
        session: &mut Session,
    ) -> Option<ChatResponse> {
        let (confidence, source, voice): (f32, ResponseSource, String) = match analysis.intent {
            Intent::ProgramSpecific => (
                0.92,
                ResponseSource::AiGenerated,
                "Great choice to ask about our programs! 🎓".to_string(),
            ),
            Intent::AcademicAdvice => (
                0.86,
                ResponseSource::AiGenerated,
                "Good question about academics! 📚".to_string(),
            ),
            Intent::CampusLife => (
                0.84,
                ResponseSource::AiGenerated,
                "Campus life is a big part of the experience here. 🏫".to_string(),
            ),
            Intent::CareerGuidance => (
                0.88,
                ResponseSource::AiGenerated,
                "Thinking ahead about your career is smart. 💼".to_string(),
            ),
            Intent::Comparison => (
                0.85,
                ResponseSource::AiGenerated,
                "Let's weigh the options side by side. ⚖️".to_string(),
            ),
            Intent::Personalized => {
                let summary = session.tracker.analyze();
                (
                    0.82,
                    ResponseSource::AiGenerated,
                    format!(
                        "Based on our chat so far (you seem focused on {}), here's my take. 🤝",
                        summary.topic
                    ),
                )
            }
            Intent::Creative => (
                0.9,
                ResponseSource::Creative,
                "Let's have some fun with this one! ✨".to_string(),
            ),
            Intent::General => return None,
        };

        // Score against the extracted keywords; fall back to the raw
        // message when the vocabulary matched nothing
        let query = if analysis.keywords.is_empty() {
            message.to_string()
        } else {
            analysis.keywords.join(" ")
        };

        let best = match analysis.intent {
            // Program questions get the fragment path first: short course
            // names score too low through the primary path
            Intent::ProgramSpecific => self
                .scorer
                .find_program_match(message)
                .or_else(|| self.scorer.find_best_match(&query)),
            _ => self.scorer.find_best_match(&query),
        }?;

        let reasoning = format!(
            "intent {:?}, sentiment {:?}, {} keyword(s)",
            analysis.intent,
            analysis.sentiment,
            analysis.keywords.len()
        );
        Some(self.compose(best, confidence, source, &reasoning, &voice, message, session))
    }

    /// Wrap a scored FAQ item in the standard sectioned answer: persona
    /// voice line, the item's answer, its category's link bundle, and
    /// rotated related questions.
    #[allow(clippy::too_many_arguments)]
    fn compose(
        &self,
        best: ScoredFaq,
        confidence: f32,
        source: ResponseSource,
        reasoning: &str,
        voice: &str,
        message: &str,
        session: &mut Session,
    ) -> ChatResponse {
        let item = best.item;

        let candidates: Vec<FaqItem> = self
            .corpus
            .by_category(&item.category)
            .into_iter()
            .filter(|c| c.question != item.question)
            .cloned()
            .collect();
        let ordered = order_by_overlap(candidates, message);
        let related = session.rotator.next_related(&item.category, &ordered);

        let answer = AnswerSections::new(format!("{}\n\n{}", voice, item.answer))
            .with_links(&item.category)
            .with_related(related.clone())
            .render();

        ChatResponse {
            answer,
            confidence,
            source,
            related_faqs: related,
            category: Some(item.category),
            link: Some(item.link),
            reasoning: Some(reasoning.to_string()),
        }
    }

    /// Generic response when nothing in the corpus matched.
    fn fallback(&self, session: &mut Session) -> ChatResponse {
        let popular = self.popular_pool();
        let rotated = session.rotator.next_related(POPULAR_ROTATION_KEY, &popular);

        let mut overview = String::from(
            "I couldn't find a direct answer to that one. 🤔 Try rephrasing, or pick \
             one of the questions below.",
        );
        let categories = self.corpus.categories();
        if !categories.is_empty() {
            overview.push_str("\n\nI can help with: ");
            overview.push_str(&categories.join(", "));
            overview.push('.');
        }

        let answer = AnswerSections::new(overview)
            .with_related(rotated.clone())
            .render();

        ChatResponse {
            answer,
            confidence: CONFIDENCE_FALLBACK,
            source: ResponseSource::Fallback,
            related_faqs: rotated,
            category: None,
            link: None,
            reasoning: Some("no corpus match".to_string()),
        }
    }

    /// First FAQ of each popular category, for conversational replies.
    fn popular_faqs(&self) -> Vec<FaqItem> {
        self.config
            .chat
            .popular_categories
            .iter()
            .filter_map(|c| self.corpus.by_category(c).first().map(|i| (*i).clone()))
            .collect()
    }

    /// All FAQs of the popular categories, the rotation pool for fallbacks.
    fn popular_pool(&self) -> Vec<FaqItem> {
        self.config
            .chat
            .popular_categories
            .iter()
            .flat_map(|c| self.corpus.by_category(c).into_iter().cloned())
            .collect()
    }

    // -- Session management --

    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ChatError> {
        self.sessions
            .lock()
            .map_err(|e| ChatError::StateError(format!("session lock poisoned: {}", e)))
    }

    /// Resolve or create a session ID within an already-held lock.
    /// Expired or unknown requested IDs get a fresh session, matching how
    /// the caller's transport retries.
    fn resolve_session(
        &self,
        sessions: &mut HashMap<Uuid, Session>,
        requested: Option<Uuid>,
    ) -> Uuid {
        if let Some(sid) = requested {
            if let Some(session) = sessions.get(&sid) {
                if !self.is_expired(session) {
                    return sid;
                }
                sessions.remove(&sid);
            }
        }

        let session = self.new_session();
        let sid = session.id;
        sessions.insert(sid, session);
        sid
    }

    fn new_session(&self) -> Session {
        let now = Local::now().timestamp();
        Session {
            id: Uuid::new_v4(),
            started_at: now,
            last_message_at: now,
            message_count: 0,
            tracker: ContextTracker::new(
                self.config.chat.context_window,
                self.config.chat.analysis_window,
            ),
            rotator: QuestionRotator::new(&self.config.rotation),
        }
    }

    fn is_expired(&self, session: &Session) -> bool {
        let now = Local::now().timestamp();
        let timeout_secs = i64::from(self.config.chat.session_timeout_minutes) * 60;
        now - session.last_message_at > timeout_secs
    }
}

fn summarize(session: &Session) -> SessionSummary {
    SessionSummary {
        id: session.id,
        started_at: format_epoch(session.started_at),
        last_message_at: format_epoch(session.last_message_at),
        message_count: session.message_count,
    }
}

/// Format epoch seconds as ISO 8601 string.
fn format_epoch(epoch: i64) -> String {
    Local
        .timestamp_opt(epoch, 0)
        .single()
        .map(|dt: DateTime<Local>| dt.to_rfc3339())
        .unwrap_or_else(|| epoch.to_string())
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
            link: format!("https://example.edu/faq/{}", question.len()),
            category: Some(category.to_string()),
        }
    }

    fn sample_sources() -> Vec<FaqSource> {
        vec![
            src(
                "What is the admission deadline?",
                "Applications close on June 30.",
                "Admissions",
            ),
            src(
                "What documents are needed for admission?",
                "Transcripts and ID proof.",
                "Admissions",
            ),
            src(
                "How do I apply online?",
                "Use the admissions portal.",
                "Admissions",
            ),
            src(
                "Is there an entrance exam for admission?",
                "Yes, a merit-based entrance test.",
                "Admissions",
            ),
            src(
                "Can I defer my admission to the next year?",
                "Deferral requests go to the registrar.",
                "Admissions",
            ),
            src(
                "Does the college offer BSc Computer Science?",
                "Yes, a three-year BSc Computer Science program.",
                "Courses & Programs",
            ),
            src(
                "What electives can I pick?",
                "Electives vary by semester.",
                "Courses & Programs",
            ),
            src(
                "How much is the tuition fee?",
                "Tuition depends on the program.",
                "Fees & Scholarships",
            ),
            src(
                "Are there placement drives on campus?",
                "Yes, recruiters visit every spring.",
                "Placements",
            ),
        ]
    }

    fn engine() -> ResponseSynthesizer {
        let corpus = Arc::new(FaqCorpus::load(vec![sample_sources()]));
        ResponseSynthesizer::new(QuadConfig::default(), corpus, ProgramDirectory::new())
    }

    fn empty_engine() -> ResponseSynthesizer {
        let corpus = Arc::new(FaqCorpus::load(vec![]));
        ResponseSynthesizer::new(QuadConfig::default(), corpus, ProgramDirectory::new())
    }

    // ---- Boundary validation ----

    #[test]
    fn test_disabled_engine_rejects() {
        let mut config = QuadConfig::default();
        config.chat.enabled = false;
        let corpus = Arc::new(FaqCorpus::load(vec![sample_sources()]));
        let engine = ResponseSynthesizer::new(config, corpus, ProgramDirectory::new());
        assert!(matches!(
            engine.process_message(None, "hello"),
            Err(ChatError::Disabled)
        ));
    }

    #[test]
    fn test_empty_message_rejected() {
        assert!(matches!(
            engine().process_message(None, "   "),
            Err(ChatError::EmptyMessage)
        ));
    }

    #[test]
    fn test_too_long_message_rejected() {
        let long = "x".repeat(2001);
        assert!(matches!(
            engine().process_message(None, &long),
            Err(ChatError::MessageTooLong(2000))
        ));
    }

    // ---- Conversational path ----

    #[test]
    fn test_hello_is_conversational() {
        let (resp, _) = engine().process_message(None, "hello").unwrap();
        assert_eq!(resp.source, ResponseSource::Conversational);
        assert!((resp.confidence - 0.95).abs() < f32::EPSILON);
        assert!(!resp.related_faqs.is_empty());
    }

    #[test]
    fn test_conversational_related_one_per_popular_category() {
        let (resp, _) = engine().process_message(None, "hello").unwrap();
        // Popular categories: Admissions, Courses & Programs, Fees & Scholarships
        assert_eq!(resp.related_faqs.len(), 3);
        assert_eq!(resp.related_faqs[0].category, "Admissions");
    }

    // ---- Generator paths ----

    #[test]
    fn test_program_specific_generator() {
        let (resp, _) = engine()
            .process_message(None, "tell me about bsc computer science")
            .unwrap();
        assert_eq!(resp.source, ResponseSource::AiGenerated);
        assert!((resp.confidence - 0.92).abs() < f32::EPSILON);
        assert_eq!(resp.category.as_deref(), Some("Courses & Programs"));
    }

    #[test]
    fn test_career_guidance_generator() {
        let (resp, _) = engine()
            .process_message(None, "how are the placement drives")
            .unwrap();
        assert_eq!(resp.source, ResponseSource::AiGenerated);
        assert!((resp.confidence - 0.88).abs() < f32::EPSILON);
        assert_eq!(resp.category.as_deref(), Some("Placements"));
    }

    #[test]
    fn test_generator_response_has_link_block() {
        let (resp, _) = engine()
            .process_message(None, "how are the placement drives")
            .unwrap();
        assert!(resp.answer.contains("Placement cell"));
        assert!(resp.link.is_some());
    }

    // ---- faq_enhanced fallback ----

    #[test]
    fn test_best_match_fallback() {
        // "documents" is not in any bucket vocabulary but matches an item
        let (resp, _) = engine()
            .process_message(None, "which documents do i need")
            .unwrap();
        assert_eq!(resp.source, ResponseSource::FaqEnhanced);
        assert!((resp.confidence - 0.9).abs() < f32::EPSILON);
        assert!(resp.answer.contains("Transcripts and ID proof."));
    }

    // ---- Generic fallback ----

    #[test]
    fn test_unmatched_message_is_fallback() {
        let (resp, _) = engine().process_message(None, "zzxxqqpp").unwrap();
        assert_eq!(resp.source, ResponseSource::Fallback);
        assert!((resp.confidence - 0.3).abs() < f32::EPSILON);
        assert!(resp.answer.contains("Admissions"));
    }

    #[test]
    fn test_fallback_on_empty_corpus() {
        let (resp, _) = empty_engine().process_message(None, "anything at all?").unwrap();
        assert_eq!(resp.source, ResponseSource::Fallback);
        assert!(resp.related_faqs.is_empty());
    }

    // ---- Sessions ----

    #[test]
    fn test_session_created_and_reused() {
        let engine = engine();
        let (_, sid) = engine.process_message(None, "hello").unwrap();
        let (_, sid2) = engine.process_message(Some(sid), "thanks").unwrap();
        assert_eq!(sid, sid2);
        assert_eq!(engine.list_sessions().len(), 1);
        assert_eq!(engine.list_sessions()[0].message_count, 2);
    }

    #[test]
    fn test_unknown_session_id_gets_fresh_session() {
        let engine = engine();
        let bogus = Uuid::new_v4();
        let (_, sid) = engine.process_message(Some(bogus), "hello").unwrap();
        assert_ne!(sid, bogus);
    }

    #[test]
    fn test_sessions_have_independent_rotation() {
        let engine = engine();
        let (first_a, a) = engine.process_message(None, "admission deadline").unwrap();
        let (first_b, b) = engine.process_message(None, "admission deadline").unwrap();
        assert_ne!(a, b);
        // Session b starts from offset zero, so it sees the same related
        // questions session a saw on its first turn
        assert_eq!(
            first_a.related_faqs.iter().map(|f| &f.question).collect::<Vec<_>>(),
            first_b.related_faqs.iter().map(|f| &f.question).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_get_session() {
        let engine = engine();
        let (_, sid) = engine.process_message(None, "hello").unwrap();
        let summary = engine.get_session(sid).unwrap();
        assert_eq!(summary.id, sid);
        assert_eq!(summary.message_count, 1);
        assert!(engine.get_session(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_expired_session_gets_replaced() {
        let mut config = QuadConfig::default();
        config.chat.session_timeout_minutes = 0;
        let corpus = Arc::new(FaqCorpus::load(vec![sample_sources()]));
        let engine = ResponseSynthesizer::new(config, corpus, ProgramDirectory::new());

        let (_, sid) = engine.process_message(None, "hello").unwrap();
        // With a zero timeout, anything older than one second is expired
        std::thread::sleep(std::time::Duration::from_millis(1500));
        let (_, replacement) = engine.process_message(Some(sid), "hello").unwrap();
        assert_ne!(sid, replacement);
        assert_eq!(engine.list_sessions().len(), 1);
    }

    #[test]
    fn test_processing_survives_concurrent_deletes() {
        let engine = Arc::new(engine());
        let (_, sid) = engine.process_message(None, "hello").unwrap();

        let deleter = {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                for _ in 0..200 {
                    let _ = engine.delete_session(sid);
                }
            })
        };

        // A deleted ID resolves to a fresh session, never an error
        for _ in 0..200 {
            assert!(engine.process_message(Some(sid), "hello").is_ok());
        }
        deleter.join().unwrap();
    }

    #[test]
    fn test_delete_session() {
        let engine = engine();
        let (_, sid) = engine.process_message(None, "hello").unwrap();
        engine.delete_session(sid).unwrap();
        assert!(engine.list_sessions().is_empty());
        assert!(matches!(
            engine.delete_session(sid),
            Err(ChatError::SessionNotFound(_))
        ));
    }

    // ---- Public operations ----

    #[test]
    fn test_suggested_questions_one_per_popular_category() {
        let suggestions = engine().suggested_questions();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0], "What is the admission deadline?");
    }

    #[test]
    fn test_suggested_questions_empty_corpus() {
        assert!(empty_engine().suggested_questions().is_empty());
    }

    #[test]
    fn test_faq_stats() {
        let stats = engine().faq_stats();
        assert_eq!(stats.total, 9);
        assert!(stats
            .categories
            .iter()
            .any(|c| c.category == "Admissions" && c.count == 5));
    }

    #[test]
    fn test_reset_rotation_state() {
        let engine = engine();
        let (first, sid) = engine.process_message(None, "admission deadline").unwrap();
        let _ = engine.process_message(Some(sid), "admission deadline").unwrap();
        engine.reset_rotation_state().unwrap();
        let (after_reset, _) = engine.process_message(Some(sid), "admission deadline").unwrap();
        // Rotation restarted from offset zero: same related set as turn one
        assert_eq!(
            first.related_faqs.iter().map(|f| &f.question).collect::<Vec<_>>(),
            after_reset.related_faqs.iter().map(|f| &f.question).collect::<Vec<_>>()
        );
    }

    // ---- Related question rotation across turns ----

    #[test]
    fn test_related_questions_rotate_across_turns() {
        let engine = engine();
        let (first, sid) = engine.process_message(None, "admission deadline").unwrap();
        let (second, _) = engine
            .process_message(Some(sid), "admission deadline")
            .unwrap();
        assert_ne!(
            first.related_faqs.iter().map(|f| &f.question).collect::<Vec<_>>(),
            second.related_faqs.iter().map(|f| &f.question).collect::<Vec<_>>()
        );
    }

    // ---- Reasoning metadata ----

    #[test]
    fn test_reasoning_present_on_all_paths() {
        let engine = engine();
        let (conv, _) = engine.process_message(None, "hello").unwrap();
        let (faq, _) = engine.process_message(None, "which documents do i need").unwrap();
        let (fb, _) = engine.process_message(None, "zzxxqqpp").unwrap();
        assert!(conv.reasoning.is_some());
        assert!(faq.reasoning.is_some());
        assert!(fb.reasoning.is_some());
    }
}
