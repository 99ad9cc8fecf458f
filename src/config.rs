//! Engine configuration.
//!
//! Runtime knobs for the completion engine. The host application usually
//! ships defaults and lets users override them from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Tunable limits for [`crate::CompletionEngine`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cap on the number of suggestions returned per query.
    /// `None` leaves the list unbounded.
    pub max_results: Option<usize>,
    /// How many executed lines the in-memory session history retains.
    pub history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results: None,
            history_limit: 1000,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid engine config at {}", path.display()))?;
        Ok(config)
    }
}
