//! Command-line autocompletion from session history.
//!
//! This module is the completion core of the application: a frequency-
//! weighted trie over tokenized command lines, queried on every edit of the
//! input line. Collaborators (the line editor, the history log) talk to it
//! through [`CompletionEngine`], which exposes exactly two operations:
//! record an executed line, and suggest continuations of a prefix.

mod fuzzy;
mod history;
mod tokenizer;
mod trie;


pub use history::SessionHistory;
pub use tokenizer::tokenize;
pub use trie::{HistoryTrie, Suggestion};

use crate::config::EngineConfig;

/// The completion surface the host application talks to.
///
/// Owns the history trie, the session history, and the engine configuration.
/// Rebuilt from the persisted history log each session; the log itself is
/// the caller's concern.
#[derive(Debug)]
pub struct CompletionEngine {
    trie: HistoryTrie,
    history: SessionHistory,
    config: EngineConfig,
}

impl Default for CompletionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            trie: HistoryTrie::new(),
            history: SessionHistory::new(config.history_limit),
            config,
        }
    }

    /// Rebuild the engine from a previously persisted history log.
    ///
    /// Lines must arrive in their original chronological order so that
    /// frequency counts and tie ordering match the session they came from.
    pub fn from_history<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut engine = Self::new();
        for line in lines {
            engine.record(line.as_ref());
        }
        engine
    }

    /// Record one executed command line.
    ///
    /// Called once per executed command, after the caller has persisted it.
    /// Every recorded line bumps the trie frequencies; the session history
    /// applies its own display-side duplicate suppression.
    pub fn record(&mut self, line: &str) {
        self.trie.add(line);
        self.history.push(line);
        tracing::trace!("recorded command line: {}", line.trim());
    }

    /// Suggest continuations of the in-progress input line.
    ///
    /// Returns the ranked suggestion list, capped at the configured maximum.
    /// An empty list is a normal outcome, not a fault.
    pub fn suggest(&self, input: &str) -> Vec<Suggestion> {
        let mut suggestions = self.trie.continuations_for(input);
        if let Some(max) = self.config.max_results {
            suggestions.truncate(max);
        }
        tracing::debug!("{} suggestion(s) for input {:?}", suggestions.len(), input);
        suggestions
    }

    /// The most recently executed lines, oldest first.
    pub fn recent(&self, n: usize) -> Vec<String> {
        self.history.recent(n)
    }
}
