//! Turtle token types.

/// A token with its source span (byte offsets).
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

/// Token kinds for the Turtle subset the validator accepts.
///
/// Numbers are kept as their source text: the validator checks syntax and
/// counts triples, it never needs typed numeric values.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Full IRI: `<http://example.org/>`
    Iri(String),

    /// Prefixed name namespace only: `prefix:`
    PrefixedNameNs(String),

    /// Prefixed name with local part: `prefix:local`
    PrefixedName { prefix: String, local: String },

    /// Labeled blank node: `_:name`
    BlankNodeLabel(String),

    /// Anonymous blank node: `[]`
    Anon,

    /// Empty collection: `()`
    Nil,

    /// String literal (unescaped content)
    String(String),

    /// Numeric literal (integer, decimal, or double), source text
    Number(String),

    /// Language tag without the `@`: `en`, `en-US`
    LangTag(String),

    /// `@prefix`
    KwPrefix,
    /// `@base`
    KwBase,
    /// SPARQL-style `PREFIX`
    KwSparqlPrefix,
    /// SPARQL-style `BASE`
    KwSparqlBase,
    /// `a` (shorthand for rdf:type)
    KwA,
    /// `true`
    KwTrue,
    /// `false`
    KwFalse,

    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `^^`
    DoubleCaret,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,

    /// End of input
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Iri(s) => write!(f, "<{s}>"),
            TokenKind::PrefixedNameNs(s) => write!(f, "{s}:"),
            TokenKind::PrefixedName { prefix, local } => write!(f, "{prefix}:{local}"),
            TokenKind::BlankNodeLabel(s) => write!(f, "_:{s}"),
            TokenKind::Anon => write!(f, "[]"),
            TokenKind::Nil => write!(f, "()"),
            TokenKind::String(s) => write!(f, "\"{s}\""),
            TokenKind::Number(s) => write!(f, "{s}"),
            TokenKind::LangTag(s) => write!(f, "@{s}"),
            TokenKind::KwPrefix => write!(f, "@prefix"),
            TokenKind::KwBase => write!(f, "@base"),
            TokenKind::KwSparqlPrefix => write!(f, "PREFIX"),
            TokenKind::KwSparqlBase => write!(f, "BASE"),
            TokenKind::KwA => write!(f, "a"),
            TokenKind::KwTrue => write!(f, "true"),
            TokenKind::KwFalse => write!(f, "false"),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::DoubleCaret => write!(f, "^^"),
            TokenKind::LBracket => write!(f, "["),
            TokenKind::RBracket => write!(f, "]"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}
