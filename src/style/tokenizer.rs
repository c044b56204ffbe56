//! logos-based tokenizer for CSS-like shorthand values.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `12px` as Dimension beats `12` as Number)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `#ff00aa` matches [`Token::HexColor`]
//! - `rgba(0, 0, 0, 0.5)` matches a single [`Token::FunctionColor`], so the
//!   spaces inside it never split a shorthand value
//! - `1.5em` matches [`Token::Dimension`], not `Number` + `Ident`

use logos::Logos;

/// CSS named colors accepted wherever a color token is expected.
const NAMED_COLORS: [&str; 19] = [
    "transparent",
    "black",
    "white",
    "red",
    "green",
    "blue",
    "yellow",
    "orange",
    "purple",
    "gray",
    "grey",
    "silver",
    "maroon",
    "olive",
    "lime",
    "aqua",
    "teal",
    "navy",
    "fuchsia",
];

/// Shorthand value token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens ──────────────────────────────────────────────

    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Functional color: `rgb(...)`, `rgba(...)`, `hsl(...)`, `hsla(...)`.
    #[regex(r"(rgba?|hsla?)\([^)]*\)")]
    FunctionColor,

    /// Number with a unit suffix: `12px`, `1.5em`, `50%`, `90deg`. Units
    /// match in any case (`8PX`).
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)([pP][xX]|[pP][tT]|[dD][pP]|[rR][eE][mM]|[eE][mM]|%|[dD][eE][gG]|[vV][wW]|[vV][hH])")]
    Dimension,

    /// Bare number, possibly negative or fractional.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)")]
    Number,

    /// Identifier: keywords (`solid`, `inset`), named colors, function names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Punctuation ──────────────────────────────────────────────────

    /// `,`
    #[token(",")]
    Comma,

    /// `/`
    #[token("/")]
    Slash,

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,
}

/// Tokenize a shorthand value into `(Token, text)` pairs.
///
/// Characters that fail to lex are skipped.
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}

/// Returns `true` if the token text denotes a color.
pub fn is_color(token: Token, text: &str) -> bool {
    match token {
        Token::HexColor | Token::FunctionColor => true,
        Token::Ident => NAMED_COLORS.contains(&text.to_ascii_lowercase().as_str()),
        _ => false,
    }
}

/// The first color literal in `input`, if any.
pub fn first_color(input: &str) -> Option<String> {
    tokenize(input)
        .into_iter()
        .find(|(token, text)| is_color(*token, text))
        .map(|(_, text)| text)
}
