//! Article field validators
//!
//! Assertions for the restricted alphabets and literal values that make up
//! article metadata. The literal tokens shared with file name producers live
//! here as named allow-lists so that adding a value is a one-line change.

use crate::article::ArticleType;
use crate::message::FieldContext;
use crate::Result;

/// Extension every article file name carries
pub const FILE_EXTENSION: &str = ".txt";

/// Datafeeds whose articles are accepted
pub const DATAFEED_NAMES: &[&str] = &["edgecase_datafeed"];

/// Blockchains that checkpoints may be anchored to
pub const BLOCKCHAIN_NAMES: &[&str] = &["bitcoin"];

/// Values permitted for the `signed_by_author` flag
pub const SIGNED_BY_AUTHOR_VALUES: &[&str] = &["no", "yes"];

/// Literal prefix of checkpoint article titles
pub const CHECKPOINT_TITLE_PREFIX: &str = "checkpoint";

/// Punctuation permitted in article titles, besides ASCII letters and digits
pub const TITLE_SYMBOLS: &str = "#&'(),-./:_\"";

/// Validates the structure of a `YYYY-MM-DD` date
///
/// The length must be 10 chars, chars 4 and 7 must be hyphens, and every
/// other char must be a digit. Month and day ranges are not checked; see
/// [`ValidationConfig::check_date`](crate::ValidationConfig::check_date) for
/// a calendar check.
///
/// # Examples
///
/// ```
/// use article_grammar::{validate_date, FieldContext};
///
/// let ctx = FieldContext::new();
/// assert!(validate_date("2017-06-28", &ctx).is_ok());
/// assert!(validate_date("2017-13-45", &ctx).is_ok());
/// assert!(validate_date("2017_06_28", &ctx).is_err());
/// assert!(validate_date("17-06-28", &ctx).is_err());
/// ```
pub fn validate_date(d: &str, ctx: &FieldContext<'_>) -> Result<()> {
    let kind = Some("date");
    let chars: Vec<char> = d.chars().collect();

    if chars.len() != 10 {
        return ctx.format_error(
            &format!("which is {} chars, but must be 10 chars.", chars.len()),
            d,
            kind,
        );
    }

    for i in [4, 7] {
        if chars[i] != '-' {
            return ctx.format_error(
                &format!(
                    "where char {} ('{}') in '{}' must be a hyphen ('-'), but isn't.",
                    i, chars[i], d
                ),
                d,
                kind,
            );
        }
    }

    let all_digits = chars
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, c)| c.is_ascii_digit());
    if !all_digits {
        return ctx.format_error(
            "where, once hyphens are removed, the date must contain only digits, but doesn't.",
            d,
            kind,
        );
    }

    Ok(())
}

/// Validates an author name: lowercase ASCII letters, digits and `_`
pub fn validate_author_name(name: &str) -> Result<()> {
    check_slug(name, &FieldContext::named("author_name"), "author_name")
}

/// Validates a URI title: the same slug alphabet as author names
pub fn validate_uri_title(uri_title: &str) -> Result<()> {
    check_slug(uri_title, &FieldContext::named("uri_title"), "uri_title")
}

fn check_slug(s: &str, ctx: &FieldContext<'_>, kind: &str) -> Result<()> {
    let permitted = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_';
    if let Some((i, c)) = s.chars().enumerate().find(|(_, c)| !permitted(*c)) {
        return ctx.format_error(
            &format!(
                "where char {} ({:?}) is not permitted (only lowercase letters, digits and '_').",
                i, c
            ),
            s,
            Some(kind),
        );
    }
    Ok(())
}

/// Validates an article title against the alphabet of its article type
///
/// Checkpoint titles are `checkpoint_` followed by one or more digits. All
/// other titles start with an uppercase ASCII letter and use only ASCII
/// letters, digits and [`TITLE_SYMBOLS`].
///
/// # Examples
///
/// ```
/// use article_grammar::{validate_title, ArticleType};
///
/// assert!(validate_title("Discussion:_Crypto_Messaging_Apps", ArticleType::Article).is_ok());
/// assert!(validate_title("discussion", ArticleType::Article).is_err());
/// assert!(validate_title("checkpoint_0", ArticleType::CheckpointArticle).is_ok());
/// assert!(validate_title("checkpoint_x", ArticleType::CheckpointArticle).is_err());
/// ```
pub fn validate_title(title: &str, article_type: ArticleType) -> Result<()> {
    let ctx = FieldContext::named("title");
    match article_type {
        ArticleType::CheckpointArticle => {
            let kind = Some("checkpoint_title");
            let Some(rest) = title.strip_prefix(CHECKPOINT_TITLE_PREFIX) else {
                return ctx.format_error(
                    &format!("which does not start with '{}'.", CHECKPOINT_TITLE_PREFIX),
                    title,
                    kind,
                );
            };
            let Some(number) = rest.strip_prefix('_') else {
                return ctx.format_error(
                    &format!(
                        "where '{}' must be followed by an underscore ('_').",
                        CHECKPOINT_TITLE_PREFIX
                    ),
                    title,
                    kind,
                );
            };
            if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
                return ctx.format_error(
                    &format!(
                        "where the part after '{}_' ('{}') must be one or more digits.",
                        CHECKPOINT_TITLE_PREFIX, number
                    ),
                    title,
                    kind,
                );
            }
            Ok(())
        }
        ArticleType::Article
        | ArticleType::SignedArticle
        | ArticleType::DatafeedArticle
        | ArticleType::SignedDatafeedArticle => {
            let kind = Some("title");
            match title.chars().next() {
                None => return ctx.format_error("which is empty.", title, kind),
                Some(first) if !first.is_ascii_uppercase() => {
                    return ctx.format_error(
                        &format!("where the first char ({:?}) must be uppercase.", first),
                        title,
                        kind,
                    );
                }
                Some(_) => {}
            }
            let permitted = |c: char| c.is_ascii_alphanumeric() || TITLE_SYMBOLS.contains(c);
            if let Some((i, c)) = title.chars().enumerate().find(|(_, c)| !permitted(*c)) {
                return ctx.format_error(
                    &format!("where char {} ({:?}) is not permitted in an article title.", i, c),
                    title,
                    kind,
                );
            }
            Ok(())
        }
    }
}

/// Validates an article type literal, returning the parsed type
///
/// ```
/// use article_grammar::{validate_article_type, ArticleType, FieldContext};
///
/// let ctx = FieldContext::new();
/// assert_eq!(validate_article_type("signed_article", &ctx).unwrap(), ArticleType::SignedArticle);
/// assert!(validate_article_type("page", &ctx).is_err());
/// ```
pub fn validate_article_type(article_type: &str, ctx: &FieldContext<'_>) -> Result<ArticleType> {
    match ArticleType::from_literal(article_type) {
        Some(parsed) => Ok(parsed),
        None => {
            let permitted: Vec<&str> = ArticleType::ALL.iter().map(|t| t.as_str()).collect();
            ctx.format_error(
                &format!("which is not one of {:?}.", permitted),
                article_type,
                Some("article_type"),
            )
        }
    }
}

/// Validates a datafeed name against [`DATAFEED_NAMES`]
pub fn validate_datafeed_name(name: &str) -> Result<()> {
    check_allowed(name, DATAFEED_NAMES, "datafeed_name")
}

/// Validates a blockchain name against [`BLOCKCHAIN_NAMES`]
pub fn validate_blockchain_name(name: &str) -> Result<()> {
    check_allowed(name, BLOCKCHAIN_NAMES, "blockchain_name")
}

/// Validates a `signed_by_author` flag: exactly `"yes"` or `"no"`
pub fn validate_signed_by_author(value: &str) -> Result<()> {
    check_allowed(value, SIGNED_BY_AUTHOR_VALUES, "signed_by_author")
}

fn check_allowed(value: &str, allowed: &[&str], field: &str) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    FieldContext::named(field).format_error(
        &format!("which is not in the permitted list {:?}.", allowed),
        value,
        None,
    )
}
