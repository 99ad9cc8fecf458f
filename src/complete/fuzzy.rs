//! Fallback matching for completion candidates.
//!
//! When no child of the fork node starts with the typed partial word
//! verbatim, candidates are retried with a looser rule: case-insensitive
//! prefix match against the whole token or against any of its sub-tokens.
//! Typing `pi` still reaches `cherry-pick` this way.

/// Separators that split a candidate token into matchable sub-tokens.
const SUB_TOKEN_SEPARATORS: [char; 4] = ['-', '_', ':', '/'];

/// Whether `candidate` is a plausible completion of `partial` once the
/// exact-prefix pass came up empty.
pub(crate) fn matches(candidate: &str, partial: &str) -> bool {
    if starts_with_ignore_case(candidate, partial) {
        return true;
    }
    candidate
        .split(SUB_TOKEN_SEPARATORS)
        .any(|part| starts_with_ignore_case(part, partial))
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.to_lowercase().starts_with(&prefix.to_lowercase())
}
