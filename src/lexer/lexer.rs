use tracing::trace;

use crate::errors::errors::{Error, ErrorImpl};

use super::{
    rules::{MatchResult, Rule},
    tokens::Token,
};

/// An immutable rule tree plus the state every scan starts in.
///
/// Scanning keeps all progress in locals, so one tokenizer can serve any
/// number of callers.
#[derive(Debug)]
pub struct Tokenizer<K, S> {
    rule: Rule<K, S>,
    starting_state: S,
}

impl<K: Clone, S: Clone + PartialEq> Tokenizer<K, S> {
    pub(crate) fn new(rule: Rule<K, S>, starting_state: S) -> Self {
        Tokenizer {
            rule,
            starting_state,
        }
    }

    pub fn starting_state(&self) -> &S {
        &self.starting_state
    }

    /// Splits `line` into the tokens emitted by the rules, left to right.
    ///
    /// Every iteration must move the offset forward, either by consuming at
    /// least one character or by jumping to the next place a rule could
    /// match. Anything else means a rule is malformed and is reported as
    /// [`ErrorImpl::OffsetNotIncreasing`].
    pub fn tokenize(&self, line: &str) -> Result<Vec<Token<K, S>>, Error> {
        let mut state = self.starting_state.clone();
        let mut offset = 0;
        let mut tokens = vec![];

        while offset < line.len() {
            match self.rule.match_at(&state, line, offset)? {
                MatchResult::Matched {
                    new_offset,
                    next_state,
                    tokens: matched,
                } => {
                    ensure_progress(offset, new_offset)?;
                    offset = new_offset;
                    state = next_state;
                    tokens.extend(matched);
                }
                MatchResult::NoMatch {
                    next_possible_match,
                } => {
                    ensure_progress(offset, next_possible_match)?;
                    trace!(from = offset, to = next_possible_match, "skipping");
                    offset = next_possible_match;
                }
            }
        }

        Ok(tokens)
    }

    /// Returns the first token containing `offset`.
    pub fn find_token_at(
        &self,
        line: &str,
        offset: usize,
        end_inclusive: bool,
    ) -> Result<Option<Token<K, S>>, Error> {
        let tokens = self.tokenize(line)?;

        Ok(tokens
            .into_iter()
            .find(|token| token.contains(offset, end_inclusive)))
    }
}

fn ensure_progress(offset: usize, next: usize) -> Result<(), Error> {
    if next <= offset {
        return Err(Error::new(
            ErrorImpl::OffsetNotIncreasing { offset, next },
            offset,
        ));
    }

    Ok(())
}
