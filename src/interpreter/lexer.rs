use logos::Logos;

use crate::error::ParseError;

/// Lex-time failure reasons carried through the `logos` error channel.
///
/// `tokenize` translates these into [`ParseError`] values with the offending
/// position or literal text attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token rule matched the input.
    #[default]
    UnexpectedCharacter,
    /// A digit run followed by `.` with no fractional digits.
    InvalidNumberLiteral,
    /// An integer literal that does not fit `i64`.
    IntegerOverflow,
    /// A real literal that does not parse to a finite `f64`.
    FloatOverflow,
}

/// The kind of a lexical token.
///
/// This is the closed set of token categories the language recognizes.
/// Two-character operators win over their one-character prefixes by longest
/// match (`++` before `+`, `+=` before `+`, and so on).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Identifier: a letter or underscore followed by letters, digits, or
    /// underscores.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    /// Numeric literal, integer (`42`) or real (`3.14`), validated at lex
    /// time. A trailing dot with no fractional digits is an error.
    #[regex(r"[0-9]+", validate_integer)]
    #[regex(r"[0-9]+\.[0-9]+", validate_real)]
    #[regex(r"[0-9]+\.", malformed_number)]
    Number,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+=`
    #[token("+=")]
    PlusEqual,
    /// `-=`
    #[token("-=")]
    MinusEqual,
    /// `*=`
    #[token("*=")]
    StarEqual,
    /// `/=`
    #[token("/=")]
    SlashEqual,
    /// `%=`
    #[token("%=")]
    PercentEqual,
    /// `^=`
    #[token("^=")]
    CaretEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equal,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never produced by a pattern; `tokenize` appends it at
    /// the line's length.
    Eof,
}

/// A lexical token: its kind, the original text, and the zero-based offset
/// of its first character in the source line.
///
/// The position is used for error reporting only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token category.
    pub kind: TokenKind,
    /// The token text as written. Empty for `Eof`.
    pub lexeme: String,
    /// Zero-based offset of the token's first character.
    pub position: usize,
}

/// Converts one source line into its token sequence, terminated by an
/// [`TokenKind::Eof`] token positioned at the line's length.
///
/// The scan is a single left-to-right pass with no backtracking. The first
/// invalid character or malformed numeric literal aborts tokenization; no
/// partial token list is returned.
///
/// # Errors
/// Returns a [`ParseError`] with code `LEXER_001` for an unexpected
/// character, `LEXER_002` for a digit run ending in a bare dot, or
/// `LEXER_003` for a literal that overflows its numeric type.
///
/// # Example
/// ```
/// use calcscript::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x += 2").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds, vec![
///     TokenKind::Ident,
///     TokenKind::PlusEqual,
///     TokenKind::Number,
///     TokenKind::Eof,
/// ]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(line);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                lexeme: lexer.slice().to_string(),
                position: span.start,
            }),
            Err(LexError::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or(' ');
                return Err(ParseError::UnexpectedCharacter {
                    character,
                    position: span.start,
                });
            }
            Err(LexError::InvalidNumberLiteral) => {
                // The match covers the digits and the dot; the dot is the
                // last character of the span.
                return Err(ParseError::InvalidNumberLiteral {
                    position: span.end - 1,
                });
            }
            Err(LexError::IntegerOverflow) => {
                return Err(ParseError::IntegerOverflow {
                    literal: lexer.slice().to_string(),
                });
            }
            Err(LexError::FloatOverflow) => {
                return Err(ParseError::FloatOverflow {
                    literal: lexer.slice().to_string(),
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        lexeme: String::new(),
        position: line.len(),
    });
    Ok(tokens)
}

fn validate_integer(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexError> {
    lex.slice()
        .parse::<i64>()
        .map(|_| ())
        .map_err(|_| LexError::IntegerOverflow)
}

fn validate_real(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexError> {
    match lex.slice().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(()),
        _ => Err(LexError::FloatOverflow),
    }
}

fn malformed_number(_lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexError> {
    Err(LexError::InvalidNumberLiteral)
}
