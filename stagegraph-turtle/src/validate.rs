//! Syntax validation gate for combined documents.
//!
//! A token-cursor parser over the lexer that checks the document is
//! well-formed Turtle, every prefixed name resolves to a declared prefix,
//! and produces triple and per-class `rdf:type` counts. Counting is the
//! cross-check hook: the caller supplies expected counts (e.g. the source
//! row count) and mismatches surface as warnings, never as failures,
//! because some rows are legitimately skipped upstream.

use std::collections::{BTreeMap, HashMap};

use stagegraph_vocab::rdf;

use crate::error::{Result, TurtleError};
use crate::lex::{tokenize, Token, TokenKind};

/// Counts gathered while parsing a document.
#[derive(Debug, Default)]
pub struct DocumentStats {
    /// Total asserted triples (including those inside blank node
    /// property lists; collection plumbing counts rdf:first/rdf:rest).
    pub triple_count: usize,
    /// Asserted `rdf:type` triples per expanded class IRI.
    pub type_counts: BTreeMap<String, usize>,
    /// Number of distinct prefixes declared.
    pub prefix_count: usize,
}

/// Outcome of validating one document.
#[derive(Debug)]
pub struct ValidationResult {
    /// False iff the document failed to parse. A syntactically invalid
    /// document is always fatal for the pipeline.
    pub valid: bool,
    /// Triples counted (zero when invalid).
    pub triple_count: usize,
    /// Asserted types per class IRI (empty when invalid).
    pub type_counts: BTreeMap<String, usize>,
    /// Fatal problems (parse errors).
    pub errors: Vec<String>,
    /// Non-fatal discrepancies (count mismatches).
    pub warnings: Vec<String>,
}

/// Parse a document and return its statistics, or the first syntax error.
pub fn parse_stats(input: &str) -> Result<DocumentStats> {
    Checker::new(input)?.run()
}

/// Validate a document and cross-check per-class type counts.
///
/// `expected_types` pairs an expanded class IRI with the count the caller
/// expects; a mismatch is reported as a warning.
pub fn validate(document: &str, expected_types: &[(&str, usize)]) -> ValidationResult {
    match parse_stats(document) {
        Err(e) => ValidationResult {
            valid: false,
            triple_count: 0,
            type_counts: BTreeMap::new(),
            errors: vec![e.to_string()],
            warnings: Vec::new(),
        },
        Ok(stats) => {
            let mut warnings = Vec::new();
            for (class_iri, expected) in expected_types {
                let actual = stats.type_counts.get(*class_iri).copied().unwrap_or(0);
                if actual != *expected {
                    warnings.push(format!(
                        "type count mismatch for <{class_iri}>: expected {expected}, found {actual}"
                    ));
                }
            }
            ValidationResult {
                valid: true,
                triple_count: stats.triple_count,
                type_counts: stats.type_counts,
                errors: Vec::new(),
                warnings,
            }
        }
    }
}

/// A parsed term, reduced to what counting needs.
enum Term {
    /// Named node with expanded IRI.
    Iri(String),
    /// Blank node (labeled, anonymous, or a property list).
    Blank,
    /// Any literal.
    Literal,
}

struct Checker {
    tokens: Vec<Token>,
    pos: usize,
    prefixes: HashMap<String, String>,
    stats: DocumentStats,
}

impl Checker {
    fn new(input: &str) -> Result<Self> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
            prefixes: HashMap::new(),
            stats: DocumentStats::default(),
        })
    }

    fn run(mut self) -> Result<DocumentStats> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        self.stats.prefix_count = self.prefixes.len();
        Ok(self.stats)
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> &Token {
        let token = &self.tokens[self.pos];
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<()> {
        if std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind) {
            self.advance();
            Ok(())
        } else {
            Err(TurtleError::parse(
                self.current().start,
                format!("expected {}, found {}", kind, self.current().kind),
            ))
        }
    }

    fn parse_statement(&mut self) -> Result<()> {
        match &self.current().kind {
            TokenKind::KwPrefix | TokenKind::KwSparqlPrefix => self.parse_prefix_directive(),
            TokenKind::KwBase | TokenKind::KwSparqlBase => self.parse_base_directive(),
            TokenKind::Eof => Ok(()),
            _ => self.parse_triples(),
        }
    }

    fn parse_prefix_directive(&mut self) -> Result<()> {
        let requires_dot = matches!(self.current().kind, TokenKind::KwPrefix);
        self.advance();

        let prefix = match &self.current().kind {
            TokenKind::PrefixedNameNs(p) => p.clone(),
            other => {
                return Err(TurtleError::parse(
                    self.current().start,
                    format!("expected prefix namespace, found {other}"),
                ))
            }
        };
        self.advance();

        let namespace = match &self.current().kind {
            TokenKind::Iri(iri) => iri.clone(),
            other => {
                return Err(TurtleError::parse(
                    self.current().start,
                    format!("expected IRI for prefix namespace, found {other}"),
                ))
            }
        };
        self.advance();

        self.prefixes.insert(prefix, namespace);

        if requires_dot {
            self.expect(&TokenKind::Dot)?;
        }
        Ok(())
    }

    fn parse_base_directive(&mut self) -> Result<()> {
        let requires_dot = matches!(self.current().kind, TokenKind::KwBase);
        self.advance();

        match &self.current().kind {
            TokenKind::Iri(_) => {
                self.advance();
            }
            other => {
                return Err(TurtleError::parse(
                    self.current().start,
                    format!("expected IRI for base, found {other}"),
                ))
            }
        }

        if requires_dot {
            self.expect(&TokenKind::Dot)?;
        }
        Ok(())
    }

    fn parse_triples(&mut self) -> Result<()> {
        let subject = self.parse_subject()?;
        self.parse_predicate_object_list(&subject)?;
        self.expect(&TokenKind::Dot)?;
        Ok(())
    }

    fn parse_subject(&mut self) -> Result<Term> {
        match self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                self.advance();
                Ok(Term::Iri(iri))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand(&prefix, &local)?;
                self.advance();
                Ok(Term::Iri(iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand(&prefix, "")?;
                self.advance();
                Ok(Term::Iri(iri))
            }
            TokenKind::BlankNodeLabel(_) | TokenKind::Anon => {
                self.advance();
                Ok(Term::Blank)
            }
            TokenKind::LBracket => self.parse_blank_node_property_list(),
            TokenKind::LParen => self.parse_collection(),
            TokenKind::Nil => {
                self.advance();
                Ok(Term::Blank)
            }
            other => Err(TurtleError::parse(
                self.current().start,
                format!("expected subject, found {other}"),
            )),
        }
    }

    fn parse_predicate_object_list(&mut self, subject: &Term) -> Result<()> {
        loop {
            let predicate = self.parse_predicate()?;
            self.parse_object_list(subject, &predicate)?;

            if matches!(self.current().kind, TokenKind::Semicolon) {
                self.advance();
                // trailing semicolon before the closing token is legal
                if matches!(
                    self.current().kind,
                    TokenKind::Dot | TokenKind::RBracket | TokenKind::Eof
                ) {
                    break;
                }
            } else {
                break;
            }
        }
        Ok(())
    }

    fn parse_predicate(&mut self) -> Result<String> {
        match self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                self.advance();
                Ok(iri)
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand(&prefix, &local)?;
                self.advance();
                Ok(iri)
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand(&prefix, "")?;
                self.advance();
                Ok(iri)
            }
            TokenKind::KwA => {
                self.advance();
                Ok(rdf::TYPE.to_string())
            }
            other => Err(TurtleError::parse(
                self.current().start,
                format!("expected predicate, found {other}"),
            )),
        }
    }

    fn parse_object_list(&mut self, _subject: &Term, predicate: &str) -> Result<()> {
        loop {
            let object = self.parse_object()?;
            self.count_triple(predicate, &object);

            if matches!(self.current().kind, TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Term> {
        match self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                self.advance();
                Ok(Term::Iri(iri))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand(&prefix, &local)?;
                self.advance();
                Ok(Term::Iri(iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand(&prefix, "")?;
                self.advance();
                Ok(Term::Iri(iri))
            }
            TokenKind::BlankNodeLabel(_) | TokenKind::Anon => {
                self.advance();
                Ok(Term::Blank)
            }
            TokenKind::LBracket => self.parse_blank_node_property_list(),
            TokenKind::LParen => self.parse_collection(),
            TokenKind::Nil => {
                self.advance();
                Ok(Term::Blank)
            }
            TokenKind::String(_) => self.parse_literal(),
            TokenKind::Number(_) | TokenKind::KwTrue | TokenKind::KwFalse => {
                self.advance();
                Ok(Term::Literal)
            }
            other => Err(TurtleError::parse(
                self.current().start,
                format!("expected object, found {other}"),
            )),
        }
    }

    /// Parse a string literal with optional language tag or `^^` datatype.
    fn parse_literal(&mut self) -> Result<Term> {
        self.advance(); // the string token

        match self.current().kind.clone() {
            TokenKind::LangTag(_) => {
                self.advance();
            }
            TokenKind::DoubleCaret => {
                self.advance();
                match self.current().kind.clone() {
                    TokenKind::Iri(_) => {
                        self.advance();
                    }
                    TokenKind::PrefixedName { prefix, local } => {
                        self.expand(&prefix, &local)?;
                        self.advance();
                    }
                    other => {
                        return Err(TurtleError::parse(
                            self.current().start,
                            format!("expected datatype IRI after ^^, found {other}"),
                        ))
                    }
                }
            }
            _ => {}
        }
        Ok(Term::Literal)
    }

    /// Parse `[ predicateObjectList ]`, counting its inner triples.
    fn parse_blank_node_property_list(&mut self) -> Result<Term> {
        self.expect(&TokenKind::LBracket)?;
        let subject = Term::Blank;
        if !matches!(self.current().kind, TokenKind::RBracket) {
            self.parse_predicate_object_list(&subject)?;
        }
        self.expect(&TokenKind::RBracket)?;
        Ok(Term::Blank)
    }

    /// Parse `( object* )`; each element asserts rdf:first and rdf:rest.
    fn parse_collection(&mut self) -> Result<Term> {
        self.expect(&TokenKind::LParen)?;
        while !matches!(self.current().kind, TokenKind::RParen) {
            if self.is_at_end() {
                return Err(TurtleError::parse(
                    self.current().start,
                    "unterminated collection",
                ));
            }
            self.parse_object()?;
            self.stats.triple_count += 2;
        }
        self.expect(&TokenKind::RParen)?;
        Ok(Term::Blank)
    }

    fn count_triple(&mut self, predicate: &str, object: &Term) {
        self.stats.triple_count += 1;
        if predicate == rdf::TYPE {
            if let Term::Iri(class_iri) = object {
                *self.stats.type_counts.entry(class_iri.clone()).or_default() += 1;
            }
        }
    }

    fn expand(&self, prefix: &str, local: &str) -> Result<String> {
        let namespace = self
            .prefixes
            .get(prefix)
            .ok_or_else(|| TurtleError::UndefinedPrefix(prefix.to_string()))?;
        Ok(format!("{namespace}{local}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagegraph_vocab::sg;

    const DOC: &str = r#"
@prefix sg: <https://w3id.org/stage-gate#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix prov: <http://www.w3.org/ns/prov#> .

# Stage: CGT 0
sg:Stage_cgt_0_a1b2c3d4 a sg:Stage ;
    rdfs:label "Stage 0" ;
    sg:hasSpecification sg:Specification_e5f6a7b8 .

sg:QualityAttribute_x_11223344 a sg:QualityAttribute ;
    rdfs:label "Start collaboration" ;
    sg:plannedDate "2023-01-31"^^xsd:date ;
    prov:wasAttributedTo sg:Agent_ad_lead_55667788 .
"#;

    #[test]
    fn counts_triples_and_types() {
        let stats = parse_stats(DOC).unwrap();
        assert_eq!(stats.triple_count, 7);
        assert_eq!(stats.type_counts.get(sg::STAGE), Some(&1));
        assert_eq!(stats.type_counts.get(sg::QUALITY_ATTRIBUTE), Some(&1));
        assert_eq!(stats.prefix_count, 4);
    }

    #[test]
    fn undefined_prefix_is_an_error() {
        let doc = "sg:x a sg:Stage .";
        assert!(matches!(
            parse_stats(doc),
            Err(TurtleError::UndefinedPrefix(p)) if p == "sg"
        ));
    }

    #[test]
    fn missing_dot_is_an_error() {
        let doc = "@prefix sg: <https://w3id.org/stage-gate#> .\nsg:x a sg:Stage";
        assert!(parse_stats(doc).is_err());
    }

    #[test]
    fn comma_lists_count_each_object() {
        let doc = "@prefix sg: <https://w3id.org/stage-gate#> .\n\
                   sg:x sg:p sg:a, sg:b, sg:c .";
        let stats = parse_stats(doc).unwrap();
        assert_eq!(stats.triple_count, 3);
    }

    #[test]
    fn blank_node_property_lists_count_inner_triples() {
        let doc = "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
                   owl:Thing owl:equivalentClass [ a owl:Restriction ; owl:minCardinality 1 ] .";
        let stats = parse_stats(doc).unwrap();
        // outer triple + type + cardinality
        assert_eq!(stats.triple_count, 3);
    }

    #[test]
    fn collections_parse() {
        let doc = "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
                   owl:Thing owl:unionOf ( owl:A owl:B ) .";
        let stats = parse_stats(doc).unwrap();
        assert_eq!(stats.triple_count, 1 + 2 * 2);
    }

    #[test]
    fn validate_reports_count_mismatch_as_warning() {
        let result = validate(DOC, &[(sg::QUALITY_ATTRIBUTE, 3)]);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("expected 3, found 1"));
    }

    #[test]
    fn validate_matching_counts_no_warnings() {
        let result = validate(DOC, &[(sg::QUALITY_ATTRIBUTE, 1), (sg::STAGE, 1)]);
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn validate_syntax_error_is_fatal() {
        let result = validate("this is } not turtle", &[]);
        assert!(!result.valid);
        assert_eq!(result.triple_count, 0);
        assert!(!result.errors.is_empty());
    }
}
