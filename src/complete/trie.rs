//! Frequency-weighted history trie and continuation lookup.
//!
//! Every recorded command line is inserted token by token; each edge counts
//! how many lines traversed it. Queries walk the already-complete tokens of
//! the input, then rank the children of the node they land on: an exact
//! prefix pass first, a fuzzy sub-token pass as fallback, ordered by edge
//! frequency with first-seen order breaking ties.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::fuzzy;
use super::tokenizer;

/// A completion candidate returned by [`HistoryTrie::continuations_for`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The full token at the matched node, or a space-joined token chain for
    /// a deep-chain result. Never a suffix slice of the typed word.
    pub value: String,
    /// True when further typing is expected after accepting the suggestion,
    /// so the caller should append a separator.
    pub space: bool,
}

/// One trie node: the state of having typed a sequence of complete tokens.
#[derive(Debug, Default)]
struct TrieNode {
    /// Children keyed by exact token text, in first-seen order. Insertion
    /// order is the tiebreak between equal-frequency candidates, so the map
    /// must preserve it.
    children: IndexMap<String, TrieNode>,
    /// How many recorded lines traversed the edge into this node.
    frequency: u64,
}

impl TrieNode {
    /// A leaf marks the end of at least one recorded command line.
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// In-memory index over previously executed command lines.
///
/// Built empty at session start and populated by replaying history; only
/// [`add`](Self::add) mutates it.
#[derive(Debug, Default)]
pub struct HistoryTrie {
    root: TrieNode,
}

impl HistoryTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one executed command line.
    ///
    /// Each token descends one level, creating the edge if it is new and
    /// incrementing its frequency either way. A blank line is a no-op.
    pub fn add(&mut self, line: &str) {
        let mut node = &mut self.root;
        for token in tokenizer::tokenize(line) {
            let child = node.children.entry(token).or_default();
            child.frequency += 1;
            node = child;
        }
    }

    /// Suggest continuations for a partially typed line.
    ///
    /// The tokens before the word being typed must match recorded history
    /// exactly; the final word is completed against the children of the node
    /// they lead to. Empty input, or a prefix no history shares, yields an
    /// empty list, never an error.
    pub fn continuations_for(&self, input: &str) -> Vec<Suggestion> {
        let (mut tokens, open_word) = tokenizer::tokenize_line(input);
        if tokens.is_empty() {
            return Vec::new();
        }
        let partial = if open_word {
            tokens.pop().unwrap_or_default()
        } else {
            // The line ends after a separator: every child is a candidate.
            String::new()
        };

        let mut node = &self.root;
        for token in &tokens {
            match node.children.get(token) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut matched: Vec<(&String, &TrieNode)> = node
            .children
            .iter()
            .filter(|(token, _)| token.starts_with(partial.as_str()))
            .collect();
        if matched.is_empty() {
            matched = node
                .children
                .iter()
                .filter(|(token, _)| fuzzy::matches(token, &partial))
                .collect();
        }

        // Stable sort: equal frequencies keep first-seen order.
        matched.sort_by(|a, b| b.1.frequency.cmp(&a.1.frequency));

        let mut suggestions: Vec<Suggestion> = matched
            .iter()
            .map(|(token, child)| Suggestion {
                value: (*token).clone(),
                space: !child.is_leaf(),
            })
            .collect();

        if let [(token, child)] = matched[..] {
            if let Some(chain) = unique_chain(token, child) {
                suggestions.push(Suggestion {
                    value: chain,
                    space: false,
                });
            }
        }

        suggestions
    }
}

/// Follow a single-child chain from `node` down to a leaf.
///
/// Returns the space-joined tokens starting with `token` itself when the
/// continuation is unambiguous. A branch anywhere below, or `node` already
/// being a leaf, disqualifies the chain.
fn unique_chain(token: &str, node: &TrieNode) -> Option<String> {
    if node.is_leaf() {
        return None;
    }
    let mut parts = vec![token.to_string()];
    let mut current = node;
    loop {
        match current.children.len() {
            0 => return Some(parts.join(" ")),
            1 => {
                if let Some((next_token, next_node)) = current.children.first() {
                    parts.push(next_token.clone());
                    current = next_node;
                } else {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequency_along(trie: &HistoryTrie, path: &[&str]) -> Option<u64> {
        let mut node = &trie.root;
        for token in path {
            node = node.children.get(*token)?;
        }
        Some(node.frequency)
    }

    #[test]
    fn test_added_line_is_reachable_with_positive_frequency() {
        let mut trie = HistoryTrie::new();
        trie.add("git checkout master");

        for depth in 1..=3 {
            let path = &["git", "checkout", "master"][..depth];
            assert!(frequency_along(&trie, path) >= Some(1), "path {path:?}");
        }
    }

    #[test]
    fn test_frequency_counts_per_edge_not_per_line() {
        let mut trie = HistoryTrie::new();
        trie.add("git status");
        trie.add("git pull");
        trie.add("git pull");

        assert_eq!(frequency_along(&trie, &["git"]), Some(3));
        assert_eq!(frequency_along(&trie, &["git", "pull"]), Some(2));
        assert_eq!(frequency_along(&trie, &["git", "status"]), Some(1));
    }

    #[test]
    fn test_replaying_the_log_doubles_every_edge_frequency() {
        let lines = ["git status", "git pull", "git pull"];
        let mut once = HistoryTrie::new();
        for line in lines {
            once.add(line);
        }
        let mut twice = HistoryTrie::new();
        for _ in 0..2 {
            for line in lines {
                twice.add(line);
            }
        }

        for path in [&["git"][..], &["git", "pull"], &["git", "status"]] {
            let single = frequency_along(&once, path);
            let doubled = frequency_along(&twice, path);
            assert_eq!(doubled, single.map(|f| f * 2), "path {path:?}");
        }
    }

    #[test]
    fn test_edge_lookup_is_case_sensitive() {
        let mut trie = HistoryTrie::new();
        trie.add("Git status");

        assert_eq!(frequency_along(&trie, &["git"]), None);
        assert_eq!(frequency_along(&trie, &["Git", "status"]), Some(1));
    }

    #[test]
    fn test_a_leaf_stops_being_a_leaf_when_extended() {
        let mut trie = HistoryTrie::new();
        trie.add("git checkout");

        let before = trie.continuations_for("git ch");
        assert_eq!(before.len(), 1);
        assert!(!before[0].space);

        trie.add("git checkout master");
        let after = trie.continuations_for("git ch");
        assert!(after[0].space);
    }

    #[test]
    fn test_blank_line_does_not_touch_the_root() {
        let mut trie = HistoryTrie::new();
        trie.add("   ");
        assert!(trie.root.children.is_empty());
    }
}
