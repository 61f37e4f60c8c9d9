use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::errors::{Error, ErrorImpl};

/// An entry of the mention suggestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSuggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Issue,
    Pr,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Issue => "issue",
            IssueKind::Pr => "pr",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSuggestion {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub id: u64,
    pub number: u64,
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct IssueSuggestions {
    suggestions: Vec<IssueSuggestion>,
}

/// A row of the emoji table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub emoji: String,
    pub names: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

impl Emoji {
    pub fn primary_name(&self) -> &str {
        self.names.first().map_or("", String::as_str)
    }
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<T, Error> {
    serde_json::from_str(json).map_err(|err| {
        Error::new(
            ErrorImpl::SuggestionData {
                message: err.to_string(),
            },
            err.column().saturating_sub(1),
        )
    })
}

/// Decodes the JSON array served by the mention endpoint.
pub fn parse_mentions(json: &str) -> Result<Vec<UserSuggestion>, Error> {
    parse(json)
}

/// Decodes the issue endpoint, which wraps its entries in `{"suggestions": [...]}`.
pub fn parse_issues(json: &str) -> Result<Vec<IssueSuggestion>, Error> {
    parse::<IssueSuggestions>(json).map(|issues| issues.suggestions)
}

pub fn parse_emoji(json: &str) -> Result<Vec<Emoji>, Error> {
    parse(json)
}
