use std::fmt::Debug;

use regex::{Captures, Regex};

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::tokens::Token;

/// How the text consumed by a pattern rule is turned into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKinds<K> {
    /// One token spanning the whole match.
    Whole(K),
    /// One slot per capture group, in group order. `None` consumes the
    /// group's text without emitting a token.
    Groups(Vec<Option<K>>),
    /// Consume the match, emit nothing.
    Skip,
}

impl<K> GroupKinds<K> {
    pub fn groups<I: IntoIterator<Item = Option<K>>>(slots: I) -> Self {
        GroupKinds::Groups(slots.into_iter().collect())
    }
}

pub enum StatePredicate<S> {
    Equals(S),
    Matches(Box<dyn Fn(&S) -> bool + Send + Sync>),
}

impl<S: PartialEq> StatePredicate<S> {
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        StatePredicate::Matches(Box::new(predicate))
    }

    pub fn holds(&self, state: &S) -> bool {
        match self {
            StatePredicate::Equals(expected) => expected == state,
            StatePredicate::Matches(predicate) => predicate(state),
        }
    }
}

impl<S: Debug> Debug for StatePredicate<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatePredicate::Equals(state) => f.debug_tuple("Equals").field(state).finish(),
            StatePredicate::Matches(_) => f.write_str("Matches(<fn>)"),
        }
    }
}

/// Outcome of trying a rule at one offset.
#[derive(Debug)]
pub enum MatchResult<K, S> {
    Matched {
        new_offset: usize,
        next_state: S,
        tokens: Vec<Token<K, S>>,
    },
    NoMatch {
        /// Always greater than the offset that was tried.
        next_possible_match: usize,
    },
}

#[derive(Debug)]
pub struct PatternRule<K, S> {
    regex: Regex,
    kinds: GroupKinds<K>,
    next_state: Option<S>,
}

impl<K: Clone, S: Clone> PatternRule<K, S> {
    pub fn new(pattern: &str, kinds: GroupKinds<K>) -> Result<Self, Error> {
        let regex = Regex::new(pattern).map_err(|err| {
            Error::at_construction(ErrorImpl::InvalidPattern {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })
        })?;

        Ok(PatternRule {
            regex,
            kinds,
            next_state: None,
        })
    }

    pub fn with_next_state(mut self, next_state: S) -> Self {
        self.next_state = Some(next_state);
        self
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Number of capture groups, not counting the implicit whole-match group.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    pub fn kinds(&self) -> &GroupKinds<K> {
        &self.kinds
    }

    fn match_at(&self, state: &S, text: &str, offset: usize) -> Result<MatchResult<K, S>, Error> {
        let Some(captures) = self.regex.captures_at(text, offset) else {
            return Ok(MatchResult::NoMatch {
                next_possible_match: text.len(),
            });
        };

        let whole = captures.get_match();
        if whole.start() != offset {
            return Ok(MatchResult::NoMatch {
                next_possible_match: whole.start(),
            });
        }

        Ok(MatchResult::Matched {
            new_offset: whole.end(),
            next_state: self.next_state.clone().unwrap_or_else(|| state.clone()),
            tokens: self.tokens(&captures, state)?,
        })
    }

    fn tokens(&self, captures: &Captures, state: &S) -> Result<Vec<Token<K, S>>, Error> {
        let whole = captures.get_match();

        let slots = match &self.kinds {
            GroupKinds::Skip => return Ok(vec![]),
            GroupKinds::Whole(kind) => {
                return Ok(vec![MK_TOKEN!(
                    kind.clone(),
                    whole.as_str().to_string(),
                    whole.start(),
                    state.clone()
                )]);
            }
            GroupKinds::Groups(slots) => slots,
        };

        if self.group_count() != slots.len() {
            return Err(Error::new(
                ErrorImpl::GroupCountMismatch {
                    pattern: self.pattern().to_string(),
                    expected: self.group_count(),
                    received: slots.len(),
                },
                whole.start(),
            ));
        }

        let mut tokens = vec![];
        let mut covered = 0;

        for (index, slot) in slots.iter().enumerate() {
            // Groups that did not take part in the match consume nothing.
            let Some(group) = captures.get(index + 1) else {
                continue;
            };

            // Each group has to start where the previous one ended.
            if group.start() != whole.start() + covered {
                return Err(Error::new(
                    ErrorImpl::GroupsDoNotPartition {
                        pattern: self.pattern().to_string(),
                        matched: whole.len(),
                        covered,
                    },
                    group.start(),
                ));
            }

            if let Some(kind) = slot {
                tokens.push(MK_TOKEN!(
                    kind.clone(),
                    group.as_str().to_string(),
                    group.start(),
                    state.clone()
                ));
            }

            covered += group.len();
        }

        if covered != whole.len() {
            return Err(Error::new(
                ErrorImpl::GroupsDoNotPartition {
                    pattern: self.pattern().to_string(),
                    matched: whole.len(),
                    covered,
                },
                whole.start(),
            ));
        }

        Ok(tokens)
    }
}

/// A node of the rule tree a tokenizer evaluates at every offset.
#[derive(Debug)]
pub enum Rule<K, S> {
    Pattern(PatternRule<K, S>),
    Conditional {
        predicate: StatePredicate<S>,
        rule: Box<Rule<K, S>>,
    },
    Composed(Vec<Rule<K, S>>),
}

impl<K: Clone, S: Clone + PartialEq> Rule<K, S> {
    /// Compiles a pattern rule without checking `kinds` against the pattern's
    /// groups. A mismatch is reported the first time the rule matches.
    pub fn pattern(pattern: &str, kinds: GroupKinds<K>) -> Result<Self, Error> {
        Ok(Rule::Pattern(PatternRule::new(pattern, kinds)?))
    }

    pub fn conditional(predicate: StatePredicate<S>, rule: Rule<K, S>) -> Self {
        Rule::Conditional {
            predicate,
            rule: Box::new(rule),
        }
    }

    pub fn composed(rules: Vec<Rule<K, S>>) -> Self {
        Rule::Composed(rules)
    }

    /// Tries the rule at exactly `offset`.
    ///
    /// A composed rule returns the first child that matches. When none do it
    /// reports the smallest offset at which any child could match next, so
    /// the scan loop can skip the text in between.
    pub(crate) fn match_at(
        &self,
        state: &S,
        text: &str,
        offset: usize,
    ) -> Result<MatchResult<K, S>, Error> {
        match self {
            Rule::Pattern(rule) => rule.match_at(state, text, offset),
            Rule::Conditional { predicate, rule } => {
                if predicate.holds(state) {
                    return rule.match_at(state, text, offset);
                }

                // No knowledge of when the state might change, so only
                // promise the smallest step forward.
                let step = text
                    .get(offset..)
                    .and_then(|rest| rest.chars().next())
                    .map_or(1, char::len_utf8);
                Ok(MatchResult::NoMatch {
                    next_possible_match: offset + step,
                })
            }
            Rule::Composed(rules) => {
                let mut smallest = text.len();

                for rule in rules {
                    match rule.match_at(state, text, offset)? {
                        matched @ MatchResult::Matched { .. } => return Ok(matched),
                        MatchResult::NoMatch { next_possible_match } => {
                            smallest = smallest.min(next_possible_match);
                        }
                    }
                }

                Ok(MatchResult::NoMatch {
                    next_possible_match: smallest,
                })
            }
        }
    }

    /// Number of pattern rules in this subtree.
    pub fn pattern_count(&self) -> usize {
        match self {
            Rule::Pattern(_) => 1,
            Rule::Conditional { rule, .. } => rule.pattern_count(),
            Rule::Composed(rules) => rules.iter().map(Rule::pattern_count).sum(),
        }
    }
}
