use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

/// Top-level configuration for the Quad engine.
///
/// Loaded from `~/.quad/config.toml` by default. Each section corresponds
/// to one subsystem of the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuadConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub rotation: RotationConfig,
}

impl QuadConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: QuadConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Chat session and context-window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Whether the chat engine accepts messages.
    pub enabled: bool,
    /// Maximum message length in characters.
    pub max_message_length: usize,
    /// Number of recent messages kept per conversation.
    pub context_window: usize,
    /// Number of recent messages inspected for topic/mood analysis.
    pub analysis_window: usize,
    /// Session timeout in minutes.
    pub session_timeout_minutes: u32,
    /// Categories surfaced as "popular" in suggestions and fallbacks.
    pub popular_categories: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_message_length: 2000,
            context_window: 5,
            analysis_window: 3,
            session_timeout_minutes: 30,
            popular_categories: vec![
                "Admissions".to_string(),
                "Courses & Programs".to_string(),
                "Fees & Scholarships".to_string(),
            ],
        }
    }
}

/// Relevance scoring settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Queries shorter than this (after trimming) return no results.
    pub min_query_length: usize,
    /// Confidence a program-fragment match must exceed to be accepted.
    pub fragment_confidence_threshold: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_query_length: 3,
            fragment_confidence_threshold: 0.7,
        }
    }
}

/// Related-question rotation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Number of related questions returned per turn.
    pub related_count: usize,
    /// Capacity of the recently-shown set; cleared wholesale on overflow.
    pub recently_shown_cap: usize,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            related_count: 3,
            recently_shown_cap: 100,
        }
    }
}
