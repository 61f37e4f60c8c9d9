use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::errors::errors::{Error, ErrorImpl};

use super::{
    lexer::Tokenizer,
    rules::{GroupKinds, PatternRule, Rule, StatePredicate},
};

/// Accumulates rules in priority order.
///
/// Nested builders handed out by [`RuleBuilder::conditional`] only live for
/// the duration of the configuring closure, so a group cannot be extended
/// after it has been attached to its parent.
#[derive(Debug)]
pub struct RuleBuilder<K, S> {
    rules: Vec<Rule<K, S>>,
}

impl<K: Clone, S: Clone + PartialEq> RuleBuilder<K, S> {
    fn new() -> Self {
        RuleBuilder { rules: vec![] }
    }

    /// Registers a pattern rule. With [`GroupKinds::Groups`] the number of
    /// slots has to equal the number of capture groups in `pattern`.
    pub fn add_rule(&mut self, pattern: &str, kinds: GroupKinds<K>) -> Result<(), Error> {
        let rule = checked_pattern(pattern, kinds)?;
        self.rules.push(Rule::Pattern(rule));
        Ok(())
    }

    /// Like [`RuleBuilder::add_rule`], but a match moves the scan into
    /// `next_state`.
    pub fn add_transition_rule(
        &mut self,
        pattern: &str,
        kinds: GroupKinds<K>,
        next_state: S,
    ) -> Result<(), Error> {
        let rule = checked_pattern(pattern, kinds)?.with_next_state(next_state);
        self.rules.push(Rule::Pattern(rule));
        Ok(())
    }

    /// Registers a prebuilt rule as is.
    pub fn add(&mut self, rule: Rule<K, S>) {
        self.rules.push(rule);
    }

    /// Registers a group of rules that only apply while `predicate` holds.
    pub fn conditional<F>(&mut self, predicate: StatePredicate<S>, configure: F) -> Result<(), Error>
    where
        F: FnOnce(&mut RuleBuilder<K, S>) -> Result<(), Error>,
    {
        let mut nested = RuleBuilder::new();
        configure(&mut nested)?;

        self.rules
            .push(Rule::conditional(predicate, Rule::composed(nested.rules)));
        Ok(())
    }

    pub fn when_state<F>(&mut self, state: S, configure: F) -> Result<(), Error>
    where
        F: FnOnce(&mut RuleBuilder<K, S>) -> Result<(), Error>,
    {
        self.conditional(StatePredicate::Equals(state), configure)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn checked_pattern<K: Clone, S: Clone>(
    pattern: &str,
    kinds: GroupKinds<K>,
) -> Result<PatternRule<K, S>, Error> {
    let rule = PatternRule::new(pattern, kinds)?;

    if let GroupKinds::Groups(slots) = rule.kinds() {
        if slots.len() != rule.group_count() {
            return Err(Error::at_construction(ErrorImpl::GroupCountMismatch {
                pattern: pattern.to_string(),
                expected: rule.group_count(),
                received: slots.len(),
            }));
        }
    }

    Ok(rule)
}

/// Top-level builder. Consumed by [`TokenizerBuilder::build`].
#[derive(Debug)]
pub struct TokenizerBuilder<K, S> {
    rules: RuleBuilder<K, S>,
    starting_state: S,
}

impl<K: Clone, S: Clone + PartialEq> TokenizerBuilder<K, S> {
    pub fn new(starting_state: S) -> Self {
        TokenizerBuilder {
            rules: RuleBuilder::new(),
            starting_state,
        }
    }

    pub fn build(self) -> Tokenizer<K, S> {
        let top_level = self.rules.len();
        let rule = Rule::composed(self.rules.rules);
        debug!(top_level, patterns = rule.pattern_count(), "built tokenizer");

        Tokenizer::new(rule, self.starting_state)
    }
}

impl<K, S> Deref for TokenizerBuilder<K, S> {
    type Target = RuleBuilder<K, S>;

    fn deref(&self) -> &Self::Target {
        &self.rules
    }
}

impl<K, S> DerefMut for TokenizerBuilder<K, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.rules
    }
}

impl<K: Clone, S: Clone + PartialEq> Default for TokenizerBuilder<K, S>
where
    S: Default,
{
    fn default() -> Self {
        TokenizerBuilder::new(S::default())
    }
}
