//! Literal escaping for double-quoted Turtle strings.
//!
//! Spreadsheet cells arrive with arbitrary punctuation, quotes, and mixed
//! line endings. [`escape_literal`] maps any such text to content that is
//! valid inside a short double-quoted literal. Backslashes are handled in
//! the same pass as everything else (character by character), so no later
//! replacement can double-escape an earlier one.
//!
//! Line-ending policy: CR, LF, and CRLF all become the two-character
//! escape `\n`. Windows-authored and Unix-authored cells therefore
//! serialize identically; a query layer reconstructs readable multi-line
//! text from the same escape.

/// Escape text for embedding inside a double-quoted Turtle literal.
///
/// Total function: empty input maps to empty output, and no input can
/// fail. No length limit is applied — only identifier tokens are
/// length-constrained, never literal text.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\r' => {
                // CRLF collapses to a single escaped newline
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }

    out
}

/// Reverse [`escape_literal`].
///
/// Logical inverse only: CR and CRLF were normalized to `\n` on the way
/// in, so they come back as LF. Unknown escape sequences are preserved
/// verbatim rather than dropped.
pub fn unescape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_literal("Start collaboration"), "Start collaboration");
        assert_eq!(escape_literal(""), "");
    }

    #[test]
    fn quotes_and_backslashes() {
        assert_eq!(escape_literal(r#"He said "go""#), r#"He said \"go\""#);
        assert_eq!(escape_literal(r"a\b"), r"a\\b");
    }

    #[test]
    fn backslash_escaped_before_other_escapes() {
        // A literal backslash-n in source must stay distinguishable from
        // an actual newline after escaping.
        assert_eq!(escape_literal("a\\nb"), "a\\\\nb");
        assert_eq!(escape_literal("a\nb"), "a\\nb");
        assert_ne!(escape_literal("a\\nb"), escape_literal("a\nb"));
    }

    #[test]
    fn spec_example_embedded_quote_and_backslash_n() {
        let input = "He said \"go\" \\n next";
        assert_eq!(escape_literal(input), "He said \\\"go\\\" \\\\n next");
    }

    #[test]
    fn line_endings_normalize_identically() {
        assert_eq!(escape_literal("a\nb"), "a\\nb");
        assert_eq!(escape_literal("a\rb"), "a\\nb");
        assert_eq!(escape_literal("a\r\nb"), "a\\nb");
    }

    #[test]
    fn tab_escapes() {
        assert_eq!(escape_literal("a\tb"), "a\\tb");
    }

    #[test]
    fn round_trip_normalizes_newlines() {
        let input = "line one\r\nline two\ttabbed \"quoted\" back\\slash";
        let round = unescape_literal(&escape_literal(input));
        assert_eq!(round, "line one\nline two\ttabbed \"quoted\" back\\slash");
    }

    #[test]
    fn round_trip_exact_without_cr() {
        let input = "plain\nlines\twith \"quotes\" and \\ marks";
        assert_eq!(unescape_literal(&escape_literal(input)), input);
    }
}
