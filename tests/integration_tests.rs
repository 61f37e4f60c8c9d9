//! Integration tests for end-to-end tokenization.
//!
//! These tests drive the public API the way completion code does: build a
//! rule set, scan single lines, and look up the token under a caret.

use std::thread;

use pretty_assertions::assert_eq;
use trigger_lexer::{
    completion::triggers::{TriggerKind, TRIGGER_TOKENIZER},
    config::config::RuleSetConfig,
    GroupKinds, Rule, Tokenizer, TokenizerBuilder,
};

fn scenario_tokenizer() -> Tokenizer<&'static str, ()> {
    let mut builder = TokenizerBuilder::new(());
    builder
        .add_rule("#[a-zA-Z0-9]*", GroupKinds::Whole("reference"))
        .unwrap();
    builder
        .add_rule("@[a-zA-Z0-9]*", GroupKinds::Whole("mention"))
        .unwrap();
    builder
        .add_rule(r":[\w]*:?", GroupKinds::Whole("smiley"))
        .unwrap();
    builder.build()
}

#[test]
fn test_reference_in_sentence() {
    let tokens = scenario_tokenizer().tokenize("see #42 please").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, "reference");
    assert_eq!(tokens[0].offset, 4);
    assert_eq!(tokens[0].length, 3);
    assert_eq!(tokens[0].text, "#42");
}

#[test]
fn test_mention_follows_declared_pattern() {
    let tokens = scenario_tokenizer().tokenize("hi @bob2!").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, "mention");
    assert_eq!(tokens[0].offset, 3);
    assert_eq!(tokens[0].text, "@bob2");
    assert_eq!(tokens[0].length, 5);
}

#[test]
fn test_plain_text_has_no_tokens() {
    assert!(scenario_tokenizer().tokenize("plain text").unwrap().is_empty());
}

#[test]
fn test_caret_after_mention() {
    let tokenizer = scenario_tokenizer();

    let token = tokenizer.find_token_at("@bob test", 4, true).unwrap().unwrap();
    assert_eq!(token.kind, "mention");
    assert_eq!((token.offset, token.length), (0, 4));

    assert!(tokenizer.find_token_at("@bob test", 4, false).unwrap().is_none());
}

#[test]
fn test_group_mismatch_fails_on_first_match() {
    let mut builder = TokenizerBuilder::new(());
    builder.add(Rule::pattern("(@)([a-z]*)", GroupKinds::groups([Some("mention")])).unwrap());
    let tokenizer = builder.build();

    let error = tokenizer.tokenize("@bob").unwrap_err();

    assert_eq!(error.get_error_name(), "GroupCountMismatch");
    assert!(error.is_usage_error());
}

#[test]
fn test_boundary_resolves_only_when_end_inclusive() {
    let tokenizer = scenario_tokenizer();
    let line = "ping @ann about #12 and :tada:";

    for token in tokenizer.tokenize(line).unwrap() {
        let end = token.offset + token.length;

        let exclusive = tokenizer.find_token_at(line, end, false).unwrap();
        assert_ne!(exclusive.as_ref(), Some(&token));

        let inclusive = tokenizer.find_token_at(line, end, true).unwrap();
        assert_eq!(inclusive, Some(token));
    }
}

#[test]
fn test_shared_tokenizer_across_threads() {
    let handles = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let line = format!("thread {} pings @ann about #{}", i, i);
                TRIGGER_TOKENIZER.tokenize(&line).unwrap()
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let tokens = handle.join().unwrap();
        let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![TriggerKind::Mention, TriggerKind::Reference]);
    }
}

#[test]
fn test_config_and_builder_agree() {
    let config = RuleSetConfig::from_toml_str(
        r##"
        [[rules]]
        pattern = "#[a-zA-Z0-9]*"
        kind = "reference"

        [[rules]]
        pattern = "@[a-zA-Z0-9]*"
        kind = "mention"

        [[rules]]
        pattern = ':[\w]*:?'
        kind = "smiley"
        "##,
    )
    .unwrap();
    let configured = config.build().unwrap();
    let built = scenario_tokenizer();

    let line = "@ann: see #42 :+1:";
    let from_config = configured
        .tokenize(line)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind, t.offset, t.text))
        .collect::<Vec<_>>();
    let from_builder = built
        .tokenize(line)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind.to_string(), t.offset, t.text))
        .collect::<Vec<_>>();

    assert_eq!(from_config, from_builder);
}
