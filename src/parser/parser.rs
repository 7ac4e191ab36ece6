//! Shift-reduce driver for the unit grammar.
//!
//! The parser pulls tokens from the tokenizer one at a time, keeping a
//! single lookahead, and consults the tables in `lookups` to decide each
//! step:
//! - Shift pushes the lookahead's lexeme with the target state
//! - Reduce pops the production's symbols, runs its semantic action and
//!   follows the goto entry for the production's left-hand side
//! - Accept pops the finished tree and checks nothing is left over
//!
//! The first error ends the parse; there is no recovery.

use tracing::{debug, trace};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Tokenizer, tokens::Token},
};

use super::{
    actions::Rhs,
    lookups::{lookup, production, Symbol, TableEntry},
    stack::{ParseStack, StackValue},
};

/// The main parser structure that maintains parsing state.
///
/// A parser can be reused for any number of sources, one at a time. Each
/// call to [`Parser::parse`] starts from a clean tokenizer and stack.
#[derive(Debug, Clone)]
pub struct Parser {
    /// Token source for the current parse
    tokenizer: Tokenizer,
    /// States and symbols shifted or reduced so far
    stack: ParseStack,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            tokenizer: Tokenizer::new(""),
            stack: ParseStack::new(),
        }
    }

    /// Parses `source` into its root node: a `List` of clause nodes.
    pub fn parse(&mut self, source: &str) -> Result<Node, Error> {
        self.tokenizer.init_string(source);
        self.stack.reset();

        let mut lookahead = self.tokenizer.next_token()?;

        loop {
            let state = self.current_state(&lookahead)?;

            let entry = match lookup(state, Symbol::Terminal(lookahead.kind)) {
                Some(entry) => entry,
                None => return Err(self.unexpected_token(&lookahead)),
            };

            match entry {
                TableEntry::Shift(next_state) => {
                    trace!(state, next_state, token = %lookahead.kind, "shift");
                    let next_token = self.tokenizer.next_token()?;
                    let shifted = std::mem::replace(&mut lookahead, next_token);
                    self.stack.shift(next_state, shifted.into());
                }
                TableEntry::Reduce(production_id) => {
                    self.reduce(production_id, &lookahead)?;
                }
                TableEntry::Accept => {
                    return self.accept(&lookahead);
                }
                TableEntry::Transit(_) => {
                    return Err(Error::new(
                        ErrorImpl::InvalidTransition {
                            state,
                            symbol: lookahead.kind.to_string(),
                        },
                        lookahead.span.start,
                    ));
                }
            }
        }
    }

    fn current_state(&self, lookahead: &Token) -> Result<usize, Error> {
        self.stack.top_state().ok_or_else(|| {
            Error::new(
                ErrorImpl::MalformedReduction {
                    production: 0,
                    message: String::from("state stack is empty"),
                },
                lookahead.span.start,
            )
        })
    }

    fn reduce(&mut self, production_id: usize, lookahead: &Token) -> Result<(), Error> {
        let internal = |error_impl: ErrorImpl| Error::new(error_impl, lookahead.span.start);
        let malformed = |message: &str| {
            internal(ErrorImpl::MalformedReduction {
                production: production_id,
                message: String::from(message),
            })
        };

        let production =
            production(production_id).ok_or_else(|| malformed("unknown production"))?;

        let values = self
            .stack
            .pop_symbols(production.rhs_length)
            .ok_or_else(|| malformed("not enough symbols on the stack"))?;

        let mut rhs = Rhs::new(production_id, values);
        let node = (production.action)(&mut rhs).map_err(internal)?;
        if !rhs.is_exhausted() {
            return Err(malformed("symbols left over after the action"));
        }

        let previous_state = self.current_state(lookahead)?;
        let symbol = Symbol::NonTerminal(production.lhs);

        let next_state = match lookup(previous_state, symbol) {
            Some(TableEntry::Transit(next_state)) => next_state,
            _ => {
                return Err(internal(ErrorImpl::InvalidTransition {
                    state: previous_state,
                    symbol: symbol.to_string(),
                }))
            }
        };

        trace!(
            production = production_id,
            lhs = %production.lhs,
            previous_state,
            next_state,
            "reduce"
        );
        self.stack.push_node(next_state, node);

        Ok(())
    }

    fn accept(&mut self, lookahead: &Token) -> Result<Node, Error> {
        let result = match self.stack.pop().and_then(|cell| cell.value) {
            Some(StackValue::Node(node)) => node,
            _ => {
                return Err(Error::new(
                    ErrorImpl::MalformedReduction {
                        production: 0,
                        message: String::from("no tree to accept"),
                    },
                    lookahead.span.start,
                ))
            }
        };

        if !self.stack.is_bottom() || self.tokenizer.has_more_tokens() {
            return Err(Error::new(
                ErrorImpl::TrailingInput {
                    token: lookahead.value.clone(),
                },
                lookahead.span.start,
            ));
        }

        debug!(node = ?result.get_node_type(), "accepted");
        Ok(result)
    }

    fn unexpected_token(&self, token: &Token) -> Error {
        if token.is_eof() && !self.tokenizer.has_more_tokens() {
            return Error::new(ErrorImpl::UnexpectedEndOfInput, token.span.start);
        }

        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start,
        )
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

/// Parses a source string into its syntax tree.
///
/// This is the main entry point for parsing. The root is a `List` holding
/// one `Unit` or `Uses` node per clause, in source order.
pub fn parse(source: &str) -> Result<Node, Error> {
    Parser::new().parse(source)
}
