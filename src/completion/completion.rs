use serde::Serialize;

use crate::{errors::errors::Error, lexer::tokens::Token};

use super::{
    suggestions::{Emoji, IssueSuggestion, UserSuggestion},
    triggers::{TriggerKind, TriggerTokenizer, TRIGGER_TOKENIZER},
};

/// Columns are 1-based character columns, `end_column` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionRange {
    pub line_number: usize,
    pub start_column: usize,
    pub end_column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    pub label: String,
    pub insert_text: String,
    pub filter_text: String,
    pub detail: Option<String>,
    pub documentation: Option<String>,
    pub range: CompletionRange,
}

/// Suggestion data available for the current document. A trigger without a
/// source produces no completions.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuggestionSources<'a> {
    pub mentions: Option<&'a [UserSuggestion]>,
    pub issues: Option<&'a [IssueSuggestion]>,
    pub emoji: Option<&'a [Emoji]>,
}

pub fn mention_items(users: &[UserSuggestion], range: CompletionRange) -> Vec<CompletionItem> {
    users
        .iter()
        .map(|user| CompletionItem {
            label: format!("@{} ({})", user.login, user.name),
            insert_text: format!("@{}", user.login),
            filter_text: format!("@{} {}", user.name, user.login),
            detail: Some(format!("@{}", user.login)),
            documentation: Some(user.kind.clone()),
            range,
        })
        .collect()
}

pub fn issue_items(issues: &[IssueSuggestion], range: CompletionRange) -> Vec<CompletionItem> {
    issues
        .iter()
        .map(|issue| CompletionItem {
            label: format!("#{} ({})", issue.number, issue.title),
            insert_text: format!("#{}", issue.number),
            filter_text: format!("#{} {}", issue.title, issue.number),
            detail: Some(format!("#{}", issue.number)),
            documentation: Some(issue.kind.as_str().to_string()),
            range,
        })
        .collect()
}

pub fn emoji_items(emoji: &[Emoji], range: CompletionRange) -> Vec<CompletionItem> {
    emoji
        .iter()
        .map(|e| CompletionItem {
            label: format!("{} :{}:", e.emoji, e.primary_name()),
            insert_text: e.emoji.clone(),
            filter_text: format!(":{} {}:", e.names.join(" "), e.tags.join(" ")),
            detail: None,
            documentation: None,
            range,
        })
        .collect()
}

/// Completions for the caret at `column` (1-based) of `line`, using the
/// combined trigger rules.
pub fn complete(
    line: &str,
    line_number: usize,
    column: usize,
    sources: SuggestionSources,
) -> Result<Vec<CompletionItem>, Error> {
    complete_with(&TRIGGER_TOKENIZER, line, line_number, column, sources)
}

pub fn complete_with(
    tokenizer: &TriggerTokenizer,
    line: &str,
    line_number: usize,
    column: usize,
    sources: SuggestionSources,
) -> Result<Vec<CompletionItem>, Error> {
    let caret = byte_offset(line, column.saturating_sub(1));

    let Some(token) = tokenizer.find_token_at(line, caret, true)? else {
        return Ok(vec![]);
    };

    let range = token_range(line, line_number, &token);

    let items = match token.kind {
        TriggerKind::Mention => sources
            .mentions
            .map(|users| mention_items(users, range)),
        TriggerKind::Reference => sources.issues.map(|issues| issue_items(issues, range)),
        TriggerKind::Smiley => sources.emoji.map(|emoji| emoji_items(emoji, range)),
    };

    Ok(items.unwrap_or_default())
}

/// Editor range covering `token`.
pub fn token_range<K, S>(line: &str, line_number: usize, token: &Token<K, S>) -> CompletionRange {
    let start_column = char_column(line, token.offset) + 1;

    CompletionRange {
        line_number,
        start_column,
        end_column: start_column + token.text.chars().count(),
    }
}

/// Byte offset of the `index`-th character, or the line length past the end.
pub fn byte_offset(line: &str, index: usize) -> usize {
    line.char_indices()
        .nth(index)
        .map_or(line.len(), |(offset, _)| offset)
}

/// Number of characters before byte `offset`.
pub fn char_column(line: &str, offset: usize) -> usize {
    line.char_indices()
        .take_while(|(position, _)| *position < offset)
        .count()
}
