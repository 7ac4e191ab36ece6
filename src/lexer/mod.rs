//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that turns source text into a
//! pull-based stream of tokens for the parser. It handles:
//!
//! - Tokenization using a priority-ordered table of regex rules
//! - Recognition of keywords, identifiers, literals, and punctuation
//! - Line and column tracking for error reporting
//! - Silent rules for whitespace, `//` comments and `{ ... }` annotations
//! - A lexical mode stack selecting the active rules

pub mod lexer;
pub mod tokens;
