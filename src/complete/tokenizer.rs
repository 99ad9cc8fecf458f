//! Quote-aware tokenization of command lines.
//!
//! Command lines are split on runs of whitespace, except that quoted
//! substrings stay inside a single token. This is what lets a recorded
//! `git commit -m 'fix the build'` round-trip as four tokens instead of six.

/// Scanner state while walking a line character by character.
enum State {
    Normal,
    InSingleQuote,
    InDoubleQuote,
}

/// Split a command line into tokens.
///
/// Runs of whitespace separate tokens. A substring delimited by matching
/// single or double quotes is emitted as part of one token, quote characters
/// included. Quotes do not nest: the first quote character opens a literal
/// that closes at the next occurrence of the same character. An unterminated
/// quote extends to the end of the line rather than raising an error.
///
/// An empty or whitespace-only line produces no tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    scan(line).0
}

/// Tokenize and report whether the line ended in the middle of a word.
///
/// The flag is false when the last character was an unquoted separator, i.e.
/// the next keystroke would start a new token. A trailing space inside an
/// unterminated quote is part of the open word, so the flag stays true.
pub(crate) fn tokenize_line(line: &str) -> (Vec<String>, bool) {
    scan(line)
}

fn scan(line: &str) -> (Vec<String>, bool) {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut state = State::Normal;

    for ch in line.chars() {
        match state {
            State::Normal => match ch {
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                '\'' => {
                    current.push(ch);
                    state = State::InSingleQuote;
                }
                '"' => {
                    current.push(ch);
                    state = State::InDoubleQuote;
                }
                _ => current.push(ch),
            },
            State::InSingleQuote => {
                current.push(ch);
                if ch == '\'' {
                    state = State::Normal;
                }
            }
            State::InDoubleQuote => {
                current.push(ch);
                if ch == '"' {
                    state = State::Normal;
                }
            }
        }
    }

    let open_word = !current.is_empty();
    if open_word {
        tokens.push(current);
    }
    (tokens, open_word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace_runs() {
        assert_eq!(tokenize("git   status"), vec!["git", "status"]);
        assert_eq!(tokenize("  ls -la  "), vec!["ls", "-la"]);
    }

    #[test]
    fn test_empty_and_blank_lines_produce_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn test_single_quotes_keep_whitespace_and_quotes() {
        assert_eq!(
            tokenize("git commit -m 'first message'"),
            vec!["git", "commit", "-m", "'first message'"]
        );
    }

    #[test]
    fn test_double_quotes_keep_whitespace_and_quotes() {
        assert_eq!(
            tokenize(r#"echo "hello   world" done"#),
            vec!["echo", "\"hello   world\"", "done"]
        );
    }

    #[test]
    fn test_quotes_do_not_nest() {
        // The double quote inside single quotes is literal, and vice versa.
        assert_eq!(
            tokenize(r#"echo 'a "b" c' "d 'e' f""#),
            vec!["echo", "'a \"b\" c'", "\"d 'e' f\""]
        );
    }

    #[test]
    fn test_unterminated_quote_runs_to_end_of_line() {
        assert_eq!(
            tokenize("git commit -m 'oops no close"),
            vec!["git", "commit", "-m", "'oops no close"]
        );
    }

    #[test]
    fn test_quote_adjacent_to_word_stays_in_token() {
        assert_eq!(tokenize("grep -e'a b' file"), vec!["grep", "-e'a b'", "file"]);
    }

    #[test]
    fn test_reports_open_word_at_end_of_line() {
        assert_eq!(tokenize_line("git ch"), (vec!["git".to_string(), "ch".to_string()], true));
        assert_eq!(tokenize_line("git "), (vec!["git".to_string()], false));
        assert_eq!(tokenize_line(""), (Vec::new(), false));
    }

    #[test]
    fn test_trailing_space_inside_open_quote_is_part_of_the_word() {
        let (tokens, open_word) = tokenize_line("git commit -m 'fix ");
        assert_eq!(tokens.last().map(String::as_str), Some("'fix "));
        assert!(open_word);
    }
}
