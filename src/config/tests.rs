//! Unit tests for TOML rule sets.

use std::io::Write;

use pretty_assertions::assert_eq;

use super::config::{RuleConfig, RuleSetConfig};

const MARKDOWN_RULES: &str = r##"
starting_state = "text"

[[rules]]
pattern = "`"
when = "text"
next_state = "code"

[[rules]]
pattern = "(@)([a-zA-Z0-9]*)"
groups = ["", "mention"]
when = "text"

[[rules]]
pattern = "`"
when = "code"
next_state = "text"

[[rules]]
pattern = "#[0-9]+"
kind = "reference"
"##;

#[test]
fn test_parse_rule_set() {
    let config = RuleSetConfig::from_toml_str(MARKDOWN_RULES).unwrap();

    assert_eq!(config.starting_state, "text");
    assert_eq!(config.rules.len(), 4);
    assert_eq!(
        config.rules[1],
        RuleConfig {
            pattern: "(@)([a-zA-Z0-9]*)".to_string(),
            kind: None,
            groups: Some(vec!["".to_string(), "mention".to_string()]),
            when: Some("text".to_string()),
            next_state: None,
        }
    );
}

#[test]
fn test_build_rule_set() {
    let tokenizer = RuleSetConfig::from_toml_str(MARKDOWN_RULES)
        .unwrap()
        .build()
        .unwrap();

    let tokens = tokenizer.tokenize("`@code #1` @ann #2").unwrap();
    let summary = tokens
        .iter()
        .map(|t| (t.kind.as_str(), t.offset, t.text.as_str(), t.state.as_str()))
        .collect::<Vec<_>>();

    assert_eq!(
        summary,
        vec![
            ("reference", 7, "#1", "code"),
            ("mention", 12, "ann", "text"),
            ("reference", 16, "#2", "text"),
        ]
    );
}

#[test]
fn test_rule_without_kinds_consumes_silently() {
    let config = RuleSetConfig::from_toml_str(
        r#"
        [[rules]]
        pattern = "@@"

        [[rules]]
        pattern = "@[a-z]+"
        kind = "mention"
        "#,
    )
    .unwrap();
    let tokenizer = config.build().unwrap();

    let tokens = tokenizer.tokenize("@@x @y").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "@y");
    assert_eq!(tokenizer.starting_state(), "");
}

#[test]
fn test_kind_and_groups_conflict() {
    let config = RuleSetConfig::from_toml_str(
        r#"
        [[rules]]
        pattern = "(@)(x)"
        kind = "mention"
        groups = ["", "mention"]
        "#,
    )
    .unwrap();

    let error = config.build().unwrap_err();
    assert_eq!(error.get_error_name(), "ConfigValidation");
}

#[test]
fn test_group_count_mismatch_in_config() {
    let config = RuleSetConfig::from_toml_str(
        r#"
        [[rules]]
        pattern = "(@)(x)"
        groups = ["mention"]
        when = "text"
        "#,
    )
    .unwrap();

    let error = config.build().unwrap_err();
    assert_eq!(error.get_error_name(), "GroupCountMismatch");
}

#[test]
fn test_parse_error() {
    let error = RuleSetConfig::from_toml_str("[[rules]]\npattern = ").unwrap_err();

    assert_eq!(error.get_error_name(), "ConfigParse");
}

#[test]
fn test_missing_pattern_is_parse_error() {
    let error = RuleSetConfig::from_toml_str("[[rules]]\nkind = \"mention\"\n").unwrap_err();

    assert_eq!(error.get_error_name(), "ConfigParse");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MARKDOWN_RULES.as_bytes()).unwrap();

    let config = RuleSetConfig::load(file.path()).unwrap();

    assert_eq!(config.rules.len(), 4);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let error = RuleSetConfig::load(dir.path().join("missing.toml")).unwrap_err();

    assert_eq!(error.get_error_name(), "ConfigRead");
}
