//! Error types and error handling for the front end.
//!
//! This module defines the errors a parse can fail with. It includes:
//!
//! - Error structures with source position information
//! - Lexical, syntax and internal error variants
//! - Error names and tips used by the driver's report

pub mod errors;
