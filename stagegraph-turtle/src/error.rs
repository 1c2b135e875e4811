//! Error types for Turtle processing

/// Error type for Turtle lexing, parsing, and assembly.
#[derive(Debug, thiserror::Error)]
pub enum TurtleError {
    /// Lexer error (invalid token)
    #[error("lexer error at position {position}: {message}")]
    Lexer { position: usize, message: String },

    /// Parser error (unexpected token or invalid structure)
    #[error("parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// Prefixed name uses a prefix no directive declared
    #[error("undefined prefix: {0}:")]
    UndefinedPrefix(String),

    /// Two documents declare the same prefix with different namespaces
    #[error(
        "prefix conflict in {document}: '{prefix}:' already bound to <{first}>, \
         redeclared as <{second}>"
    )]
    PrefixConflict {
        document: String,
        prefix: String,
        first: String,
        second: String,
    },

    /// An `@prefix` line that could not be split into name and namespace
    #[error("malformed @prefix line in {document}: {line}")]
    MalformedPrefix { document: String, line: String },
}

/// Result type for Turtle operations
pub type Result<T> = std::result::Result<T, TurtleError>;

impl TurtleError {
    /// Create a lexer error
    pub fn lexer(position: usize, message: impl Into<String>) -> Self {
        Self::Lexer {
            position,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }
}
