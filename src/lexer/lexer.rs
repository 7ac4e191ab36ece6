use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_RULE, MK_SKIP_RULE, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Lexeme of the synthetic end-of-input token.
pub const EOF_LEXEME: &str = "$";

/// Returns the kind of the matched text, or `None` for silent rules.
pub type LexHandler = fn(&mut Tokenizer, &str) -> Option<TokenKind>;

pub struct LexRule {
    regex: Regex,
    handler: LexHandler,
}

/// Scanning context selecting which lexical rules are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexMode {
    Initial,
}

lazy_static! {
    /// Every lexical rule, in priority order. The first rule matching at
    /// the cursor wins.
    static ref LEX_RULES: Vec<LexRule> = vec![
        MK_DEFAULT_RULE!(r"^\.", TokenKind::Dot),
        MK_DEFAULT_RULE!(r"^,", TokenKind::Comma),
        MK_SKIP_RULE!(r"^\s+"),
        MK_SKIP_RULE!(r"^\{[^}]*\}"),
        MK_SKIP_RULE!(r"^//[^\n]*(?:\n|$)"),
        MK_DEFAULT_RULE!(r"^[0-9]+\.[0-9]+", TokenKind::Float),
        MK_DEFAULT_RULE!(r"^[0-9]+", TokenKind::Int),
        MK_DEFAULT_RULE!(r#"^(?:"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*')"#, TokenKind::String),
        LexRule { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").expect("lexical rule pattern"), handler: symbol_handler },
        MK_DEFAULT_RULE!(r"^;", TokenKind::Semicolon),
        MK_DEFAULT_RULE!(r"^\\", TokenKind::Backslash),
    ];

    /// Rule indices active in each lexical mode.
    static ref RULES_BY_MODE: HashMap<LexMode, Vec<usize>> = {
        let mut map = HashMap::new();
        map.insert(LexMode::Initial, (0..LEX_RULES.len()).collect());
        map
    };
}

fn symbol_handler(_tokenizer: &mut Tokenizer, matched: &str) -> Option<TokenKind> {
    Some(
        RESERVED_LOOKUP
            .get(matched)
            .copied()
            .unwrap_or(TokenKind::Identifier),
    )
}

/// Pull-based scanner over one source string.
///
/// The cursor may sit one past the end of the source: that synthetic
/// position is where the end-of-input token is produced.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    source: String,
    /// Byte offset of the next unscanned character
    cursor: usize,
    modes: Vec<LexMode>,
    current_line: usize,
    /// Byte offset where `current_line` begins
    line_begin_offset: usize,
    failed: bool,
}

impl Tokenizer {
    pub fn new(source: &str) -> Tokenizer {
        let mut tokenizer = Tokenizer {
            source: String::new(),
            cursor: 0,
            modes: vec![],
            current_line: 1,
            line_begin_offset: 0,
            failed: false,
        };
        tokenizer.init_string(source);
        tokenizer
    }

    /// Resets the cursor, the line counters and the mode stack for `source`.
    pub fn init_string(&mut self, source: &str) {
        self.source = source.to_string();
        self.cursor = 0;
        self.modes.clear();
        self.modes.push(LexMode::Initial);
        self.current_line = 1;
        self.line_begin_offset = 0;
        self.failed = false;
    }

    /// Whether the end-of-input token has not been produced yet.
    pub fn has_more_tokens(&self) -> bool {
        self.cursor <= self.source.len()
    }

    pub fn at_eof(&self) -> bool {
        self.cursor == self.source.len()
    }

    pub fn current_mode(&self) -> LexMode {
        self.modes.last().copied().unwrap_or(LexMode::Initial)
    }

    pub fn push_mode(&mut self, mode: LexMode) {
        self.modes.push(mode);
    }

    /// Alias for `push_mode`.
    pub fn begin(&mut self, mode: LexMode) {
        self.push_mode(mode);
    }

    /// Leaves the current mode. The outermost mode is never popped.
    pub fn pop_mode(&mut self) -> Option<LexMode> {
        if self.modes.len() <= 1 {
            return None;
        }
        self.modes.pop()
    }

    pub fn current_position(&self) -> Position {
        let offset = self.cursor.min(self.source.len());
        Position::new(offset, self.current_line, offset - self.line_begin_offset)
    }

    /// Scans the next token, skipping the spans of silent rules.
    ///
    /// Once the end-of-input token has been returned, further calls keep
    /// returning it; callers should check `has_more_tokens` first.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if !self.has_more_tokens() {
                return Ok(self.eof_token());
            }

            let Some((handler, length)) = self.match_rule() else {
                if self.at_eof() {
                    self.cursor += 1;
                    return Ok(self.eof_token());
                }

                return Err(self.unrecognised_token());
            };

            let matched = self.source[self.cursor..self.cursor + length].to_string();
            let span = self.capture_locations(&matched);

            self.cursor += length;
            if length == 0 {
                self.cursor += self.source[self.cursor..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
            }

            match handler(self, &matched) {
                Some(kind) => {
                    trace!(%kind, value = %matched, line = span.start.line, column = span.start.column, "token");
                    return Ok(MK_TOKEN!(kind, matched, span));
                }
                None => continue,
            }
        }
    }

    fn match_rule(&self) -> Option<(LexHandler, usize)> {
        let remaining = &self.source[self.cursor..];
        let rules = RULES_BY_MODE.get(&self.current_mode())?;

        rules.iter().find_map(|&index| {
            let rule = &LEX_RULES[index];
            rule.regex
                .find(remaining)
                .filter(|found| found.start() == 0)
                .map(|found| (rule.handler, found.end()))
        })
    }

    /// Computes the span of `matched` starting at the cursor and advances
    /// the line counters over any newlines inside it.
    fn capture_locations(&mut self, matched: &str) -> Span {
        let start_offset = self.cursor;
        let start = Position::new(
            start_offset,
            self.current_line,
            start_offset - self.line_begin_offset,
        );

        for (index, _) in matched.match_indices('\n') {
            self.current_line += 1;
            self.line_begin_offset = start_offset + index + 1;
        }

        let end_offset = start_offset + matched.len();
        let end = Position::new(
            end_offset,
            self.current_line,
            end_offset - self.line_begin_offset,
        );

        Span { start, end }
    }

    fn eof_token(&self) -> Token {
        let position = self.current_position();
        MK_TOKEN!(
            TokenKind::EOF,
            String::from(EOF_LEXEME),
            Span {
                start: position,
                end: position
            }
        )
    }

    fn unrecognised_token(&mut self) -> Error {
        self.failed = true;
        let token = self.source[self.cursor..]
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();

        Error::new(
            ErrorImpl::UnrecognisedToken { token },
            self.current_position(),
        )
    }
}

/// Yields every token up to and including end-of-input, stopping early
/// after the first lexical error.
impl Iterator for Tokenizer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.has_more_tokens() {
            return None;
        }

        Some(self.next_token())
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Tokenizer::new(source).collect()
}
