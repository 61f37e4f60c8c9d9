//! Completion suggestions driven by trigger tokens.
//!
//! This module turns the token under an editor caret into completion items:
//!
//! - Built-in trigger rule sets for `#reference`, `@mention` and `:smiley:`
//! - Serde models of the suggestion data sources
//! - Completion item construction with the editor range to replace
//! - An explicit cache for fetched suggestion data

pub mod cache;
pub mod completion;
pub mod suggestions;
pub mod triggers;
