//! Line-level assembly of Turtle fragments into one document.
//!
//! Fragments are combined without parsing their bodies: `@prefix` lines
//! are lifted into a single deduplicated header and everything else is
//! carried through verbatim. The first declaration of a prefix wins;
//! redeclaring a prefix with a different namespace is fatal because the
//! bodies were written against the original binding and silently
//! rebinding would corrupt every term using it.
//!
//! Output is deterministic: the header lists prefixes sorted by name,
//! bodies appear in input order separated by blank lines.

use std::collections::BTreeMap;

use crate::error::{Result, TurtleError};

/// One input fragment: a name for error reporting plus its full text.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub name: String,
    pub text: String,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Combine Turtle fragments into a single document.
///
/// Empty documents (or documents that are all prefix declarations)
/// contribute nothing to the body. Combining a combined document with
/// nothing else reproduces it byte for byte.
pub fn combine(documents: &[SourceDocument]) -> Result<String> {
    let mut prefixes: BTreeMap<String, String> = BTreeMap::new();
    let mut bodies: Vec<String> = Vec::new();

    for document in documents {
        let mut body_lines: Vec<&str> = Vec::new();

        for line in document.text.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with("@prefix") {
                let (name, namespace) = parse_prefix_line(trimmed).ok_or_else(|| {
                    TurtleError::MalformedPrefix {
                        document: document.name.clone(),
                        line: trimmed.to_string(),
                    }
                })?;
                match prefixes.get(name) {
                    None => {
                        prefixes.insert(name.to_string(), namespace.to_string());
                    }
                    Some(first) if first == namespace => {}
                    Some(first) => {
                        return Err(TurtleError::PrefixConflict {
                            document: document.name.clone(),
                            prefix: name.to_string(),
                            first: first.clone(),
                            second: namespace.to_string(),
                        });
                    }
                }
            } else {
                body_lines.push(line);
            }
        }

        // strip leading/trailing blank lines left behind by the header
        while body_lines.first().is_some_and(|l| l.trim().is_empty()) {
            body_lines.remove(0);
        }
        while body_lines.last().is_some_and(|l| l.trim().is_empty()) {
            body_lines.pop();
        }

        if !body_lines.is_empty() {
            bodies.push(body_lines.join("\n"));
        }
    }

    let mut out = String::new();
    for (name, namespace) in &prefixes {
        out.push_str("@prefix ");
        out.push_str(name);
        out.push_str(": <");
        out.push_str(namespace);
        out.push_str("> .\n");
    }
    for body in &bodies {
        out.push('\n');
        out.push_str(body);
        out.push('\n');
    }
    Ok(out)
}

/// Split a trimmed `@prefix name: <namespace> .` line into its parts.
///
/// A trailing `#` comment after the terminating dot is allowed and
/// discarded.
fn parse_prefix_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("@prefix")?.trim_start();
    let colon = rest.find(':')?;
    let name = rest[..colon].trim_end();
    if name.contains(char::is_whitespace) {
        return None;
    }

    let rest = rest[colon + 1..].trim_start();
    let rest = rest.strip_prefix('<')?;
    let close = rest.find('>')?;
    let namespace = &rest[..close];

    let tail = rest[close + 1..].trim().strip_prefix('.')?.trim_start();
    if !(tail.is_empty() || tail.starts_with('#')) {
        return None;
    }
    Some((name, namespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, text: &str) -> SourceDocument {
        SourceDocument::new(name, text)
    }

    #[test]
    fn merges_prefixes_and_bodies() {
        let a = doc(
            "schema.ttl",
            "@prefix sg: <https://w3id.org/stage-gate#> .\n\nsg:Stage a sg:Class .\n",
        );
        let b = doc(
            "instances.ttl",
            "@prefix sg: <https://w3id.org/stage-gate#> .\n\
             @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\n\
             sg:x rdfs:label \"x\" .\n",
        );
        let combined = combine(&[a, b]).unwrap();
        assert_eq!(
            combined,
            "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
             @prefix sg: <https://w3id.org/stage-gate#> .\n\
             \nsg:Stage a sg:Class .\n\
             \nsg:x rdfs:label \"x\" .\n"
        );
    }

    #[test]
    fn first_declaration_wins_on_identical_rebinding() {
        let a = doc("a.ttl", "@prefix sg: <https://w3id.org/stage-gate#> .\nsg:x sg:p sg:y .\n");
        let b = doc("b.ttl", "@prefix sg: <https://w3id.org/stage-gate#> .\nsg:y sg:p sg:z .\n");
        let combined = combine(&[a, b]).unwrap();
        assert_eq!(combined.matches("@prefix sg:").count(), 1);
    }

    #[test]
    fn conflicting_namespaces_are_fatal() {
        let a = doc("a.ttl", "@prefix sg: <https://w3id.org/stage-gate#> .\n");
        let b = doc("b.ttl", "@prefix sg: <https://example.org/other#> .\n");
        let err = combine(&[a, b]).unwrap_err();
        match err {
            TurtleError::PrefixConflict { document, prefix, first, second } => {
                assert_eq!(document, "b.ttl");
                assert_eq!(prefix, "sg");
                assert_eq!(first, "https://w3id.org/stage-gate#");
                assert_eq!(second, "https://example.org/other#");
            }
            other => panic!("expected PrefixConflict, got {other}"),
        }
    }

    #[test]
    fn malformed_prefix_line_is_fatal() {
        let a = doc("a.ttl", "@prefix sg <https://w3id.org/stage-gate#> .\n");
        assert!(matches!(
            combine(&[a]),
            Err(TurtleError::MalformedPrefix { document, .. }) if document == "a.ttl"
        ));
    }

    #[test]
    fn prefix_line_with_trailing_comment_merges() {
        let a = doc(
            "a.ttl",
            "@prefix sg: <https://w3id.org/stage-gate#> . # project namespace\nsg:x sg:p sg:y .\n",
        );
        let b = doc("b.ttl", "@prefix sg: <https://w3id.org/stage-gate#> .\nsg:y sg:p sg:z .\n");
        let combined = combine(&[a, b]).unwrap();
        assert_eq!(combined.matches("@prefix sg:").count(), 1);
        assert!(!combined.contains("project namespace"));
    }

    #[test]
    fn junk_after_prefix_dot_is_fatal() {
        let a = doc("a.ttl", "@prefix sg: <https://w3id.org/stage-gate#> . sg:x sg:p sg:y .\n");
        assert!(matches!(
            combine(&[a]),
            Err(TurtleError::MalformedPrefix { .. })
        ));
    }

    #[test]
    fn comments_survive_verbatim() {
        let a = doc("a.ttl", "# Stage: CGT 0\nsg:x sg:p sg:y .\n");
        let combined = combine(&[a]).unwrap();
        assert!(combined.contains("# Stage: CGT 0\n"));
    }

    #[test]
    fn combining_is_idempotent() {
        let a = doc(
            "a.ttl",
            "@prefix sg: <https://w3id.org/stage-gate#> .\n\nsg:x sg:p sg:y .\n",
        );
        let once = combine(&[a]).unwrap();
        let twice = combine(&[doc("once.ttl", &once)]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_documents_contribute_nothing() {
        let a = doc("a.ttl", "@prefix sg: <https://w3id.org/stage-gate#> .\n\nsg:x sg:p sg:y .\n");
        let b = doc("empty.ttl", "");
        let c = doc("header_only.ttl", "@prefix sg: <https://w3id.org/stage-gate#> .\n");
        let combined = combine(&[a, b, c]).unwrap();
        assert_eq!(combined.matches('\n').count(), 3);
        assert!(combined.ends_with("sg:x sg:p sg:y .\n"));
    }

    #[test]
    fn internal_blank_lines_are_preserved() {
        let a = doc("a.ttl", "sg:x sg:p sg:y .\n\nsg:z sg:p sg:w .\n");
        let combined = combine(&[a]).unwrap();
        assert!(combined.contains("sg:y .\n\nsg:z"));
    }
}
