//! Execution stage of the front end.
//!
//! This module holds the `Compiler` facade the driver talks to. It parses
//! a source string and hands the finished tree to the execution hook,
//! which currently performs no work and returns the tree unchanged.

pub mod compiler;
