use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: usize) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Errors raised while registering rules or loading configuration carry
    /// no meaningful line offset.
    pub fn at_construction(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, 0)
    }

    /// Byte offset in the scanned line where the error was detected.
    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::GroupCountMismatch { .. } => "GroupCountMismatch",
            ErrorImpl::GroupsDoNotPartition { .. } => "GroupsDoNotPartition",
            ErrorImpl::OffsetNotIncreasing { .. } => "OffsetNotIncreasing",
            ErrorImpl::ConfigRead { .. } => "ConfigRead",
            ErrorImpl::ConfigParse { .. } => "ConfigParse",
            ErrorImpl::ConfigValidation { .. } => "ConfigValidation",
            ErrorImpl::SuggestionData { .. } => "SuggestionData",
        }
    }

    /// Usage errors are defects in how rules were authored, as opposed to
    /// problems with the environment (files, fetched data).
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::InvalidPattern { .. }
                | ErrorImpl::GroupCountMismatch { .. }
                | ErrorImpl::GroupsDoNotPartition { .. }
                | ErrorImpl::OffsetNotIncreasing { .. }
        )
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { pattern, .. } => ErrorTip::Suggestion(format!(
                "Pattern `{}` is not a valid regular expression",
                pattern
            )),
            ErrorImpl::GroupCountMismatch { pattern, expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Pattern `{}` has {} capture groups but {} token kinds were given",
                    pattern, expected, received
                ))
            }
            ErrorImpl::GroupsDoNotPartition { pattern, .. } => ErrorTip::Suggestion(format!(
                "Capture groups of `{}` must cover the whole match without gaps",
                pattern
            )),
            ErrorImpl::OffsetNotIncreasing { .. } => ErrorTip::Suggestion(String::from(
                "A rule matched the empty string, make sure every pattern consumes at least one character",
            )),
            ErrorImpl::ConfigRead { .. } => ErrorTip::None,
            ErrorImpl::ConfigParse { .. } => ErrorTip::None,
            ErrorImpl::ConfigValidation { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::SuggestionData { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("number of groups does not match number of provided token kinds: expected {expected:?}, received {received:?}")]
    GroupCountMismatch {
        pattern: String,
        expected: usize,
        received: usize,
    },
    #[error("groups must partition the matched string: matched {matched:?} bytes, groups cover {covered:?}")]
    GroupsDoNotPartition {
        pattern: String,
        matched: usize,
        covered: usize,
    },
    #[error("offsets must increase: scan at {offset:?} moved to {next:?}")]
    OffsetNotIncreasing { offset: usize, next: usize },
    #[error("failed to read rules file {path:?}: {message}")]
    ConfigRead { path: String, message: String },
    #[error("failed to parse rules: {message}")]
    ConfigParse { message: String },
    #[error("invalid rule set: {message}")]
    ConfigValidation { message: String },
    #[error("malformed suggestion data: {message}")]
    SuggestionData { message: String },
}
