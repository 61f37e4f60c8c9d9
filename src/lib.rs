#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod completion;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::{
    builder::{RuleBuilder, TokenizerBuilder},
    lexer::Tokenizer,
    rules::{GroupKinds, Rule, StatePredicate},
    tokens::Token,
};

/// Renders an error raised while scanning `line` with a marker under the
/// offending column:
///
/// ```text
/// Error: GroupsDoNotPartition (Capture groups of `(a)b` must cover ...)
/// -> notes.md
///    |
/// 12 | see #42 now
///    | ----^
/// ```
pub fn format_error(error: &Error, file: &str, line_number: usize, line: &str) -> String {
    let mut out = String::new();

    let line_string = line_number.to_string();
    let padding = line_string.len() + 2;

    // Writing into a String cannot fail.
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);
    let _ = writeln!(out, "{:>padding$}", "|");

    let line = line.trim_end();
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed);

    let position = error.get_position().min(line.len());
    let column = line
        .get(..position)
        .map_or(position, |prefix| prefix.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_format_error() {
        let error = Error::new(ErrorImpl::OffsetNotIncreasing { offset: 6, next: 6 }, 6);
        let rendered = super::format_error(&error, "notes.md", 12, "  see #42 now\n");
        let lines = rendered.lines().collect::<Vec<_>>();

        assert!(lines[0].starts_with("Error: OffsetNotIncreasing ("));
        assert_eq!(lines[1], "-> notes.md");
        assert_eq!(lines[2], "   |");
        assert_eq!(lines[3], "12 | see #42 now");
        assert_eq!(lines[4], "   | ----^");
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = Error::new(
            ErrorImpl::ConfigParse {
                message: "expected `=`".to_string(),
            },
            0,
        );
        let rendered = super::format_error(&error, "rules.toml", 1, "starting_state");

        assert!(rendered.starts_with("Error: ConfigParse\n"));
        assert!(rendered.ends_with("  | ^"));
    }

    #[test]
    fn test_remove_starting_whitespace() {
        assert_eq!(super::remove_starting_whitespace("   @bob"), ("@bob", 3));
        assert_eq!(super::remove_starting_whitespace("@bob"), ("@bob", 0));
    }
}
