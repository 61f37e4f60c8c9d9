//! Lexical analysis module.
//!
//! This module contains a small rule-based tokenizer for single lines of
//! text. It handles:
//!
//! - Pattern rules built from regular expressions, emitting tokens per
//!   capture group
//! - Conditional rule groups that only apply in certain scan states
//! - Composed rule trees evaluated in priority order
//! - A scan loop that skips ahead to the next offset any rule could match
//! - Point lookup of the token under an editor caret

pub mod builder;
pub mod lexer;
pub mod rules;
pub mod tokens;
