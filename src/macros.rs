//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULES!` - Registers a list of whole-match rules on a builder
//!
//! These macros reduce boilerplate when emitting tokens and when declaring
//! the built-in trigger rule sets.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The token kind
/// * `$text` - The matched text
/// * `$offset` - Byte offset of the token in the line
/// * `$state` - Scan state active when the token was produced
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TriggerKind::Mention, "@bob".to_string(), 3, ());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $offset:expr, $state:expr) => {{
        let text: String = $text;
        $crate::lexer::tokens::Token {
            kind: $kind,
            offset: $offset,
            length: text.len(),
            text,
            state: $state,
        }
    }};
}

/// Registers whole-match rules on a builder in priority order, propagating
/// the first registration error.
///
/// # Example
///
/// ```ignore
/// MK_RULES!(builder, {
///     "#[a-zA-Z0-9]*" => TriggerKind::Reference,
///     "@[a-zA-Z0-9]*" => TriggerKind::Mention,
/// });
/// ```
#[macro_export]
macro_rules! MK_RULES {
    ($builder:expr, { $($pattern:literal => $kind:expr),* $(,)? }) => {{
        let mut result: Result<(), $crate::errors::errors::Error> = Ok(());
        $(
            if result.is_ok() {
                result = $builder.add_rule($pattern, $crate::lexer::rules::GroupKinds::Whole($kind));
            }
        )*
        result
    }};
}
