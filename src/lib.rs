//! RustySuggest - history-driven autocompletion for command shells
//!
//! This library provides the completion core used by terminal frontends:
//! - Quote-aware tokenization of command lines
//! - A frequency-weighted trie over previously executed commands
//! - Continuation lookup with exact-prefix matching, fuzzy sub-token
//!   fallback, and unambiguous deep-chain completion
//! - Session history tracking for recall and startup replay
//!
//! The engine is rebuilt in memory each session by replaying the persisted
//! history log; storage, rendering, and keyboard handling stay with the host
//! application.
//!
//! # Example
//!
//! ```
//! use rusty_suggest::CompletionEngine;
//!
//! let mut engine = CompletionEngine::new();
//! engine.record("git status");
//! engine.record("git pull");
//! engine.record("git pull");
//!
//! for suggestion in engine.suggest("git ") {
//!     // "pull" first: ranked by how often each continuation was used
//!     println!("{}", suggestion.value);
//! }
//! ```

pub mod complete;
pub mod config;
pub mod utils;

// Re-export commonly used types
pub use complete::{CompletionEngine, HistoryTrie, SessionHistory, Suggestion};
pub use config::EngineConfig;
