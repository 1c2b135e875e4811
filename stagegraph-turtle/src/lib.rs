//! Turtle serialization support for stagegraph.
//!
//! Three concerns live here:
//!
//! - **Escaping** ([`escape`]): turning arbitrary cell text into content
//!   safe inside a double-quoted Turtle literal.
//! - **Assembly** ([`combine`]): merging independently authored Turtle
//!   fragments into one document with a single deduplicated, sorted
//!   `@prefix` block. Redeclaring a prefix with a different namespace is
//!   a fatal conflict, never silently resolved.
//! - **Validation** ([`validate`]): a winnow-lexed, token-cursor parser
//!   that confirms a finished document is syntactically valid Turtle and
//!   reports triple and per-class type counts for cross-checking.
//!
//! The assembler works at the line level (adequate for the narrow subset
//! the pipeline emits); the validator parses for real, so any merge that
//! mangles a multi-line construct fails before the document is published.

pub mod combine;
pub mod error;
pub mod escape;
pub mod lex;
pub mod validate;

pub use combine::{combine, SourceDocument};
pub use error::{Result, TurtleError};
pub use escape::{escape_literal, unescape_literal};
pub use lex::{tokenize, Token, TokenKind};
pub use validate::{parse_stats, validate, DocumentStats, ValidationResult};
