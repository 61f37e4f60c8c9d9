//! Error types and error handling for the tokenizer.
//!
//! This module defines the error types used throughout the crate. It
//! includes:
//!
//! - Error structures carrying the offset where a problem was detected
//! - Usage errors raised by malformed rules (bad patterns, group mismatches)
//! - Internal invariant violations raised by the scan loop
//! - Configuration and suggestion-data failures

pub mod errors;
