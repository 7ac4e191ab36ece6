//! Utility macros for the front end.
//!
//! This module defines helper macros used by the tokenizer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_RULE!` - Creates a lexical rule that always yields one token kind
//! - `MK_SKIP_RULE!` - Creates a silent lexical rule that yields no token
//!
//! These macros reduce boilerplate in the lexical rule table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexical rule whose handler always yields `$kind`.
///
/// # Example
///
/// ```ignore
/// MK_DEFAULT_RULE!(r"^;", TokenKind::Semicolon)
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_RULE {
    ($pattern:literal, $kind:expr) => {
        LexRule {
            regex: Regex::new($pattern).expect("lexical rule pattern"),
            handler: |_tokenizer: &mut Tokenizer, _matched: &str| Some($kind),
        }
    };
}

/// Creates a silent lexical rule: the text is consumed, no token is emitted.
#[macro_export]
macro_rules! MK_SKIP_RULE {
    ($pattern:literal) => {
        LexRule {
            regex: Regex::new($pattern).expect("lexical rule pattern"),
            handler: |_tokenizer: &mut Tokenizer, _matched: &str| None,
        }
    };
}
