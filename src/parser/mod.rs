//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains a table-driven LALR(1) shift-reduce parser that
//! turns the tokenizer's stream into an Abstract Syntax Tree. It handles:
//!
//! - The static action and production tables
//! - A single parse stack pairing each automaton state with its symbol
//! - One semantic action per production building the tree bottom-up
//! - Unexpected-token and structural errors with source positions
//!
//! Parsing is deterministic and linear in the number of tokens: every
//! step is one table lookup and a constant amount of stack work.

pub mod actions;
pub mod lookups;
pub mod parser;
pub mod stack;

#[cfg(test)]
mod tests;
