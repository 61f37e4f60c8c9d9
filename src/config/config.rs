use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        builder::{RuleBuilder, TokenizerBuilder},
        lexer::Tokenizer,
        rules::GroupKinds,
    },
};

/// A tokenizer described in TOML. Kinds and states are plain strings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    #[serde(default)]
    pub starting_state: String,

    /// Rules in priority order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub pattern: String,

    /// Token kind for the whole match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// One kind per capture group, `""` skips the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,

    /// Only apply the rule while the scan is in this state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,

    /// State to continue in after the rule matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_state: Option<String>,
}

impl RuleConfig {
    fn group_kinds(&self) -> Result<GroupKinds<String>, Error> {
        match (&self.kind, &self.groups) {
            (Some(_), Some(_)) => Err(Error::at_construction(ErrorImpl::ConfigValidation {
                message: format!(
                    "rule `{}` sets both `kind` and `groups`, pick one",
                    self.pattern
                ),
            })),
            (Some(kind), None) => Ok(GroupKinds::Whole(kind.clone())),
            (None, Some(groups)) => Ok(GroupKinds::groups(
                groups
                    .iter()
                    .map(|kind| (!kind.is_empty()).then(|| kind.clone())),
            )),
            (None, None) => Ok(GroupKinds::Skip),
        }
    }

    fn register(&self, builder: &mut RuleBuilder<String, String>) -> Result<(), Error> {
        let kinds = self.group_kinds()?;

        match &self.next_state {
            Some(next_state) => builder.add_transition_rule(&self.pattern, kinds, next_state.clone()),
            None => builder.add_rule(&self.pattern, kinds),
        }
    }
}

impl RuleSetConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        toml::from_str(source).map_err(|err| {
            let position = err.span().map_or(0, |span| span.start);
            Error::new(
                ErrorImpl::ConfigParse {
                    message: err.message().to_string(),
                },
                position,
            )
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| {
            Error::at_construction(ErrorImpl::ConfigRead {
                path: path.display().to_string(),
                message: err.to_string(),
            })
        })?;

        let config = RuleSetConfig::from_toml_str(&source)?;
        debug!(path = %path.display(), rules = config.rules.len(), "loaded rule set");
        Ok(config)
    }

    pub fn build(&self) -> Result<Tokenizer<String, String>, Error> {
        let mut builder = TokenizerBuilder::new(self.starting_state.clone());

        for rule in &self.rules {
            match &rule.when {
                Some(state) => builder.when_state(state.clone(), |nested| rule.register(nested))?,
                None => rule.register(&mut builder)?,
            }
        }

        Ok(builder.build())
    }
}
