//! Display helpers for article metadata

use crate::message::FieldContext;
use crate::Result;

/// Turns a stored title into the title shown to readers
///
/// Underscores become spaces and the first char is upper-cased (checkpoint
/// titles start lowercase).
///
/// ```
/// use article_grammar::title_to_display_title;
///
/// assert_eq!(
///     title_to_display_title("Discussion:_Crypto_Messaging_Apps"),
///     "Discussion: Crypto Messaging Apps"
/// );
/// assert_eq!(title_to_display_title("checkpoint_0"), "Checkpoint 0");
/// ```
pub fn title_to_display_title(title: &str) -> String {
    let spaced = title.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parses digit strings separated by hyphens, e.g. `"2017-06-28"`
///
/// ```
/// use article_grammar::parse_hyphenated_integers;
///
/// assert_eq!(parse_hyphenated_integers("2017-06-28").unwrap(), vec![2017, 6, 28]);
/// assert!(parse_hyphenated_integers("2017--28").is_err());
/// ```
pub fn parse_hyphenated_integers(s: &str) -> Result<Vec<u64>> {
    let ctx = FieldContext::new().kind("hyphenated_integers");
    s.split('-')
        .map(|item| {
            if item.is_empty() || !item.chars().all(|c| c.is_ascii_digit()) {
                return ctx.format_error(
                    "which does not consist of digit strings separated by hyphens.",
                    s,
                    None,
                );
            }
            item.parse::<u64>().or_else(|e| {
                ctx.format_error(
                    &format!("where item '{}' is out of range ({}).", item, e),
                    s,
                    None,
                )
            })
        })
        .collect()
}
