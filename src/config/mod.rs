//! Rule sets loaded from TOML.
//!
//! A rule set lists pattern rules in priority order. Each rule may name the
//! token kind of its whole match or of each capture group, may be limited to
//! one scan state, and may switch the scan into another state.

pub mod config;

#[cfg(test)]
mod tests;
