//! Turtle lexer built on winnow.
//!
//! Tokenizes the Turtle subset the pipeline emits and merges, with source
//! spans. Fails fast on the first lexical error with line/column context.

use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, peek, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::stream::{AsChar, Location, Stream};
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::chars::*;
use super::token::{Token, TokenKind};
use crate::error::{Result, TurtleError};

/// Input type for the lexer - tracks position for spans.
pub type Input<'a> = LocatingSlice<&'a str>;

/// Lexer for Turtle documents.
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Tokenize the entire input.
    ///
    /// Returns an error immediately on the first invalid token.
    pub fn tokenize(self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut input = LocatingSlice::new(self.input);

        loop {
            skip_ws_and_comments(&mut input);

            if input.is_empty() {
                let pos = input.current_token_start();
                tokens.push(Token::new(TokenKind::Eof, pos, pos));
                break;
            }

            let start = input.current_token_start();

            match next_token(&mut input) {
                Ok(kind) => {
                    let end = input.current_token_start();
                    tokens.push(Token::new(kind, start, end));
                }
                Err(_) => {
                    return Err(self.make_error(start, &input));
                }
            }
        }

        Ok(tokens)
    }

    /// Describe the first invalid token with line/column context.
    fn make_error(&self, position: usize, input: &Input<'_>) -> TurtleError {
        let bad_char = input.as_ref().chars().next().unwrap_or('?');
        let (line, col) = self.line_col(position);
        let line_content = self.input.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let what = match bad_char {
            '"' | '\'' => "unterminated string literal",
            '<' => "invalid or unterminated IRI",
            _ => "unexpected character",
        };
        let message = format!(
            "{} '{}' at line {}, column {}: {}",
            what,
            bad_char.escape_default(),
            line,
            col,
            line_content.trim_end()
        );

        TurtleError::Lexer { position, message }
    }

    /// Convert a byte position to (line, column), 1-indexed.
    fn line_col(&self, position: usize) -> (usize, usize) {
        let mut line = 1;
        let mut col = 1;
        for (i, c) in self.input.char_indices() {
            if i >= position {
                break;
            }
            if c == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

/// Skip whitespace and `#` comments.
fn skip_ws_and_comments(input: &mut Input<'_>) {
    loop {
        let _: ModalResult<&str, ContextError> = take_while(0.., is_ws).parse_next(input);

        if input.starts_with('#') {
            let _: ModalResult<&str, ContextError> =
                take_till(0.., |c| c == '\n' || c == '\r').parse_next(input);
            let _: ModalResult<Option<char>, ContextError> =
                opt(one_of(['\n', '\r'])).parse_next(input);
        } else {
            break;
        }
    }
}

/// Parse the next token.
fn next_token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        parse_double_caret,
        parse_iri_ref,
        parse_blank_node_label,
        parse_anon,
        parse_nil,
        parse_at_directive,
        parse_default_prefix,
        parse_prefixed_name_or_keyword,
        parse_string_literal,
        parse_number,
        parse_punctuation,
    ))
    .parse_next(input)
}

fn backtrack() -> ErrMode<ContextError> {
    ErrMode::Backtrack(ContextError::new())
}

// ---------------------------------------------------------------------------
// IRIs
// ---------------------------------------------------------------------------

/// Parse an IRI reference: `<...>` (with \u escapes).
fn parse_iri_ref(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '<'.parse_next(input)?;
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., is_iri_char).parse_next(input)?;
        result.push_str(chunk);

        if input.starts_with('>') {
            '>'.parse_next(input)?;
            return Ok(TokenKind::Iri(result));
        }
        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            match parse_unicode_escape(input)? {
                Some(c) => result.push(c),
                None => return Err(backtrack()),
            }
        } else {
            return Err(backtrack());
        }
    }
}

/// Parse `\uXXXX` or `\UXXXXXXXX` (after the backslash).
fn parse_unicode_escape(input: &mut Input<'_>) -> ModalResult<Option<char>> {
    let width = if input.starts_with('u') {
        4
    } else if input.starts_with('U') {
        8
    } else {
        return Ok(None);
    };
    let _: char = any.parse_next(input)?;
    let hex: &str = take_while(width..=width, AsChar::is_hex_digit).parse_next(input)?;
    let code = u32::from_str_radix(hex, 16).unwrap_or(0xFFFD);
    Ok(char::from_u32(code))
}

// ---------------------------------------------------------------------------
// Directives and language tags
// ---------------------------------------------------------------------------

fn parse_at_directive(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '@'.parse_next(input)?;
    let word: &str =
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-').parse_next(input)?;

    match word.to_lowercase().as_str() {
        "prefix" => Ok(TokenKind::KwPrefix),
        "base" => Ok(TokenKind::KwBase),
        _ => Ok(TokenKind::LangTag(word.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Prefixed names and keywords
// ---------------------------------------------------------------------------

/// Parse `:local` or a bare `:` (default prefix).
fn parse_default_prefix(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ':'.parse_next(input)?;
    match opt(parse_pn_local).parse_next(input)? {
        Some(local) => Ok(TokenKind::PrefixedName {
            prefix: String::new(),
            local,
        }),
        None => Ok(TokenKind::PrefixedNameNs(String::new())),
    }
}

/// Parse a prefixed name or a bare keyword (`a`, `true`, `false`,
/// `PREFIX`, `BASE`).
fn parse_prefixed_name_or_keyword(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let start = input.checkpoint();

    let first_char = input.chars().next().ok_or_else(backtrack)?;
    let is_valid_prefix_start = is_pn_prefix_start(first_char);

    let mut word = String::new();
    let c: char = any.parse_next(input)?;
    word.push(c);

    // PN_PREFIX allows interior dots but cannot end with one.
    loop {
        let chunk: &str = take_while(0.., is_pn_chars).parse_next(input)?;
        word.push_str(chunk);

        if input.starts_with('.') {
            let rest = &input.as_ref()[1..];
            if rest.chars().next().is_some_and(is_pn_chars) {
                '.'.parse_next(input)?;
                word.push('.');
                continue;
            }
        }
        break;
    }

    if peek(opt(':')).parse_next(input)?.is_some() {
        if !is_valid_prefix_start {
            input.reset(&start);
            return Err(backtrack());
        }
        ':'.parse_next(input)?;
        match opt(parse_pn_local).parse_next(input)? {
            Some(local) => Ok(TokenKind::PrefixedName {
                prefix: word,
                local,
            }),
            None => Ok(TokenKind::PrefixedNameNs(word)),
        }
    } else {
        match word.as_str() {
            "a" => Ok(TokenKind::KwA),
            "true" => Ok(TokenKind::KwTrue),
            "false" => Ok(TokenKind::KwFalse),
            "PREFIX" => Ok(TokenKind::KwSparqlPrefix),
            "BASE" => Ok(TokenKind::KwSparqlBase),
            _ => {
                input.reset(&start);
                Err(backtrack())
            }
        }
    }
}

/// Parse the local part after the colon of a prefixed name.
fn parse_pn_local(input: &mut Input<'_>) -> ModalResult<String> {
    let first_char = input.chars().next().ok_or_else(backtrack)?;
    if !is_pn_local_start(first_char) && first_char != '%' && first_char != '\\' {
        return Err(backtrack());
    }

    let mut result = String::new();

    loop {
        let chunk: &str =
            take_while(0.., |c: char| is_pn_chars(c) || c == ':').parse_next(input)?;
        result.push_str(chunk);

        if input.starts_with('.') {
            // Interior dot only: a trailing dot ends the statement instead.
            let rest = &input.as_ref()[1..];
            let continues = rest
                .chars()
                .next()
                .is_some_and(|c| is_pn_chars(c) || c == ':' || c == '%' || c == '\\');
            if continues {
                '.'.parse_next(input)?;
                result.push('.');
                continue;
            }
            break;
        }

        if input.starts_with('%') {
            '%'.parse_next(input)?;
            let hex: &str = take_while(2..=2, AsChar::is_hex_digit).parse_next(input)?;
            result.push('%');
            result.push_str(hex);
        } else if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            let escaped: char = any.parse_next(input)?;
            if "_~.-!$&'()*+,;=/?#@%".contains(escaped) {
                result.push(escaped);
            } else {
                return Err(backtrack());
            }
        } else {
            break;
        }
    }

    if result.is_empty() {
        return Err(backtrack());
    }
    Ok(result)
}

// ---------------------------------------------------------------------------
// Blank nodes and collections
// ---------------------------------------------------------------------------

/// Parse a labeled blank node: `_:name`
fn parse_blank_node_label(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let name: &str = preceded(
        "_:",
        (
            take_while(1, |c: char| is_pn_chars_u(c) || c.is_ascii_digit()),
            take_while(0.., |c: char| is_pn_chars(c) || c == '.'),
        )
            .take(),
    )
    .parse_next(input)?;

    if name.ends_with('.') {
        return Err(backtrack());
    }
    Ok(TokenKind::BlankNodeLabel(name.to_string()))
}

/// Parse `[ ]` (whitespace allowed inside).
fn parse_anon(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('[', take_while(0.., is_ws), ']')
        .map(|_| TokenKind::Anon)
        .parse_next(input)
}

/// Parse `( )` (empty collection).
fn parse_nil(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('(', take_while(0.., is_ws), ')')
        .map(|_| TokenKind::Nil)
        .parse_next(input)
}

// ---------------------------------------------------------------------------
// String literals
// ---------------------------------------------------------------------------

fn parse_string_literal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        |i: &mut Input<'_>| parse_long_string(i, '"'),
        |i: &mut Input<'_>| parse_long_string(i, '\''),
        |i: &mut Input<'_>| parse_short_string(i, '"'),
        |i: &mut Input<'_>| parse_short_string(i, '\''),
    ))
    .parse_next(input)
}

/// Parse a triple-quoted string (either quote character).
fn parse_long_string(input: &mut Input<'_>, quote: char) -> ModalResult<TokenKind> {
    let mut delim = if quote == '"' { "\"\"\"" } else { "'''" };
    delim.parse_next(input)?;

    let mut result = String::new();
    loop {
        let chunk: &str = take_while(0.., |c| c != quote && c != '\\').parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() {
            return Err(backtrack());
        }
        if input.starts_with(delim) {
            delim.parse_next(input)?;
            return Ok(TokenKind::String(result));
        }
        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            result.push(parse_escape_char(input)?);
        } else {
            // lone quote char, not the closing delimiter
            let c: char = any.parse_next(input)?;
            result.push(c);
        }
    }
}

/// Parse a single-quoted short string (either quote character).
fn parse_short_string(input: &mut Input<'_>, mut quote: char) -> ModalResult<TokenKind> {
    quote.parse_next(input)?;

    let mut result = String::new();
    loop {
        let chunk: &str =
            take_while(0.., move |c| c != quote && c != '\\' && c != '\n' && c != '\r')
                .parse_next(input)?;
        result.push_str(chunk);

        if input.starts_with(quote) {
            quote.parse_next(input)?;
            return Ok(TokenKind::String(result));
        }
        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            result.push(parse_escape_char(input)?);
        } else {
            return Err(backtrack());
        }
    }
}

/// Parse the character after a backslash in a string literal.
fn parse_escape_char(input: &mut Input<'_>) -> ModalResult<char> {
    let c: char = any.parse_next(input)?;
    match c {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        'u' => {
            let hex: &str = take_while(4..=4, AsChar::is_hex_digit).parse_next(input)?;
            let code = u32::from_str_radix(hex, 16).map_err(|_| backtrack())?;
            char::from_u32(code).ok_or_else(backtrack)
        }
        'U' => {
            let hex: &str = take_while(8..=8, AsChar::is_hex_digit).parse_next(input)?;
            let code = u32::from_str_radix(hex, 16).map_err(|_| backtrack())?;
            char::from_u32(code).ok_or_else(backtrack)
        }
        _ => Err(backtrack()),
    }
}

// ---------------------------------------------------------------------------
// Numbers and punctuation
// ---------------------------------------------------------------------------

/// Parse an integer, decimal, or double literal as source text.
///
/// The validator never computes with numeric values, so one token kind
/// covers all three grammatical forms.
fn parse_number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let text: &str = (
        opt(one_of(['+', '-'])),
        alt((
            (digit1, '.', digit1).take(),
            ('.', digit1).take(),
            digit1,
        )),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1).take()),
    )
        .take()
        .parse_next(input)?;

    Ok(TokenKind::Number(text.to_string()))
}

fn parse_double_caret(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "^^".map(|_| TokenKind::DoubleCaret).parse_next(input)
}

fn parse_punctuation(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    any.verify_map(|c| match c {
        '.' => Some(TokenKind::Dot),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        '[' => Some(TokenKind::LBracket),
        ']' => Some(TokenKind::RBracket),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        _ => None,
    })
    .parse_next(input)
}

/// Tokenize a Turtle document string.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}
