use std::fmt::Display;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{
    lexer::{builder::TokenizerBuilder, lexer::Tokenizer, rules::GroupKinds},
    MK_RULES,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    Reference,
    Mention,
    Smiley,
}

impl Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerKind::Reference => write!(f, "reference"),
            TriggerKind::Mention => write!(f, "mention"),
            TriggerKind::Smiley => write!(f, "smiley"),
        }
    }
}

pub type TriggerTokenizer = Tokenizer<TriggerKind, ()>;

lazy_static! {
    /// `#reference`, `@mention` and `:smiley:` triggers in one rule set.
    pub static ref TRIGGER_TOKENIZER: TriggerTokenizer = {
        let mut builder = TokenizerBuilder::new(());
        MK_RULES!(builder, {
            "#[a-zA-Z0-9]*" => TriggerKind::Reference,
            "@[a-zA-Z0-9]*" => TriggerKind::Mention,
            r":(?-u:\w)*:?" => TriggerKind::Smiley,
        })
        .expect("built-in trigger rules are valid");
        builder.build()
    };

    /// Issue references and user mentions only.
    pub static ref GITHUB_TOKENIZER: TriggerTokenizer = {
        let mut builder = TokenizerBuilder::new(());
        builder
            .add_rule("(#[a-zA-Z0-9]*)", GroupKinds::groups([Some(TriggerKind::Reference)]))
            .expect("built-in reference rule is valid");
        builder
            .add_rule("(@[a-zA-Z0-9]*)", GroupKinds::groups([Some(TriggerKind::Mention)]))
            .expect("built-in mention rule is valid");
        builder.build()
    };

    /// Emoji shortcodes, allowing `+` and `-` as in `:+1:`. Names are ASCII only.
    pub static ref EMOJI_TOKENIZER: TriggerTokenizer = {
        let mut builder = TokenizerBuilder::new(());
        builder
            .add_rule(r"(:[a-zA-Z0-9_+\-]*:?)", GroupKinds::groups([Some(TriggerKind::Smiley)]))
            .expect("built-in emoji rules are valid");
        builder.build()
    };
}
