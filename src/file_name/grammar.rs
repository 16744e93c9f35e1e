//! File name grammar validation
//!
//! Three grammars are recognized:
//!
//! ```text
//! article     <date>_<author_name>_<uri_title>.txt
//! checkpoint  <uri_title>.txt
//! datafeed    <date>_<datafeed_name>_article_<article_id>_<child file name>
//! ```
//!
//! The datafeed grammar embeds the file name of another article and
//! validates it with the grammar of that article's kind. Every check is a
//! hard stop: the first violation is returned and nothing after it runs.

use tracing::{debug, trace};

use super::segments::{DatafeedSection, DatedSegments, SplitFileName};
use crate::article::{ArticleRecord, ArticleType};
use crate::config::ValidationConfig;
use crate::fields::{
    validate_author_name, validate_datafeed_name, validate_uri_title, DATAFEED_NAMES,
    FILE_EXTENSION,
};
use crate::message::FieldContext;
use crate::primitives::validate_string_is_whole_number;
use crate::Result;

/// Literal between the datafeed name and the embedded article section
pub const DATAFEED_ARTICLE_MARKER: &str = "_article_";

const ARTICLE_LOCATION: &str = "file_name::validate_article_file_name";
const CHECKPOINT_LOCATION: &str = "file_name::validate_checkpoint_article_file_name";
const DATAFEED_LOCATION: &str = "file_name::validate_datafeed_article_file_name";

/// Validates file names against the grammars with a given configuration
///
/// The free functions [`validate_article_file_name`],
/// [`validate_checkpoint_article_file_name`] and
/// [`validate_datafeed_article_file_name`] use the default configuration.
///
/// # Examples
///
/// ```
/// use article_grammar::{FileNameValidator, ValidationConfig};
///
/// let validator = FileNameValidator::new(ValidationConfig::calendar());
/// let author = "stjohn_piano";
/// let name = "2021-04-12_stjohn_piano_discussion.txt";
/// assert!(validator.validate_article(name, "2021-04-12", author, "discussion").is_ok());
///
/// let name = "2021-04-31_stjohn_piano_discussion.txt";
/// assert!(validator.validate_article(name, "2021-04-31", author, "discussion").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileNameValidator {
    config: ValidationConfig,
}

impl FileNameValidator {
    /// Create a validator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates `<date>_<author_name>_<uri_title>.txt`
    ///
    /// The expected fields are validated first, independently of the file
    /// name. Signed articles use this grammar too.
    pub fn validate_article(
        &self,
        file_name: &str,
        date: &str,
        author_name: &str,
        uri_title: &str,
    ) -> Result<()> {
        debug!("Validating article file name {}", file_name);

        self.config.check_date(date, &FieldContext::named("date"))?;
        validate_author_name(author_name)?;
        validate_uri_title(uri_title)?;

        let ctx = file_name_context(ARTICLE_LOCATION, "article_file_name");
        let split = SplitFileName::split(file_name);
        check_extension(&split, file_name, &ctx)?;

        let author_width = author_name.chars().count();
        let segments = DatedSegments::split(split.stem, author_width, 1);
        trace!(
            "Article file name segments: date={:?} author={:?} remainder={:?}",
            segments.date,
            segments.middle,
            segments.remainder
        );

        self.check_date_segment(&segments, date, file_name, ARTICLE_LOCATION, &ctx)?;
        check_separator(&segments, file_name, &ctx)?;

        if segments.middle != author_name {
            return ctx.format_error(
                &format!(
                    "where the author name ('{}') is not the author name found within the article ('{}').",
                    segments.middle, author_name
                ),
                file_name,
                None,
            );
        }

        if segments.joiner != "_" {
            let found = match segments.joiner.chars().next() {
                Some(c) => format!("it is {:?}", c),
                None => "the file name ends there".to_string(),
            };
            return ctx.format_error(
                &format!(
                    "where the char between author_name and uri_title (index {}) must be an underscore ('_'), but {}.",
                    segments.joiner_offset, found
                ),
                file_name,
                None,
            );
        }

        if segments.remainder != uri_title {
            return ctx.format_error(
                &format!(
                    "where the remaining portion of the file name ('{}') is not the uri_title ('{}').",
                    segments.remainder, uri_title
                ),
                file_name,
                None,
            );
        }

        Ok(())
    }

    /// Validates `<uri_title>.txt`
    ///
    /// Checkpoints are keyed by their slug alone, so the file name must be
    /// exactly the URI title plus the extension. The URI title itself is not
    /// checked against the slug alphabet here.
    pub fn validate_checkpoint(&self, file_name: &str, uri_title: &str) -> Result<()> {
        debug!("Validating checkpoint article file name {}", file_name);

        let expected = join_checkpoint(uri_title);
        if file_name != expected {
            return file_name_context(CHECKPOINT_LOCATION, "checkpoint_article_file_name")
                .format_error(
                    &format!(
                        "where the checkpoint uri_title is '{}', so the file name must be '{}'.",
                        uri_title, expected
                    ),
                    file_name,
                    None,
                );
        }
        Ok(())
    }

    /// Validates `<date>_<datafeed_name>_article_<article_id>_<child>.txt`
    ///
    /// `date` is the datafeed article's own date. `article` is the embedded
    /// article: the child file name is validated against its fields with the
    /// grammar of its declared kind.
    pub fn validate_datafeed(
        &self,
        file_name: &str,
        date: &str,
        article: &ArticleRecord,
    ) -> Result<()> {
        debug!("Validating datafeed article file name {}", file_name);

        self.config.check_date(date, &FieldContext::named("date"))?;

        let ctx = file_name_context(DATAFEED_LOCATION, "datafeed_article_file_name");
        let split = SplitFileName::split(file_name);
        check_extension(&split, file_name, &ctx)?;

        let segments = split_datafeed(split.stem);
        trace!(
            "Datafeed file name segments: date={:?} datafeed={:?} section={:?}",
            segments.date,
            segments.middle,
            segments.remainder
        );

        self.check_date_segment(&segments, date, file_name, DATAFEED_LOCATION, &ctx)?;
        check_separator(&segments, file_name, &ctx)?;

        if validate_datafeed_name(segments.middle).is_err() {
            return ctx.format_error(
                &format!(
                    "where the datafeed name ('{}') is not one of {:?}.",
                    segments.middle, DATAFEED_NAMES
                ),
                file_name,
                None,
            );
        }

        if segments.joiner != DATAFEED_ARTICLE_MARKER {
            let start = segments.joiner_offset + 1;
            return ctx.format_error(
                &format!(
                    "where chars {}-{} must be '{}', not '{}'.",
                    start,
                    start + DATAFEED_ARTICLE_MARKER.len() - 1,
                    DATAFEED_ARTICLE_MARKER,
                    segments.joiner
                ),
                file_name,
                None,
            );
        }

        let Some(section) = DatafeedSection::split(segments.remainder) else {
            return ctx.format_error(
                &format!(
                    "where the article section ('{}') does not contain an underscore ('_').",
                    segments.remainder
                ),
                file_name,
                None,
            );
        };

        validate_string_is_whole_number(
            section.article_id,
            &FieldContext::named("article_id (in datafeed file name)").location(DATAFEED_LOCATION),
        )?;

        let child_file_name = format!("{}{}", section.child_stem, FILE_EXTENSION);
        self.validate_embedded(&child_file_name, article)
    }

    /// Validates an embedded article's file name with the grammar of its kind
    fn validate_embedded(&self, child_file_name: &str, article: &ArticleRecord) -> Result<()> {
        debug!(
            "Embedded {} file name {}",
            article.article_type, child_file_name
        );

        match article.article_type {
            ArticleType::Article | ArticleType::SignedArticle => self.validate_article(
                child_file_name,
                &article.date,
                &article.author_name,
                &article.uri_title,
            ),
            ArticleType::CheckpointArticle => {
                self.validate_checkpoint(child_file_name, &article.uri_title)
            }
            ArticleType::DatafeedArticle | ArticleType::SignedDatafeedArticle => {
                FieldContext::named("article_type (of the embedded article)")
                    .location(DATAFEED_LOCATION)
                    .format_error(
                        "which is an unrecognised article type for an article embedded in a datafeed.",
                        article.article_type.as_str(),
                        None,
                    )
            }
        }
    }

    fn check_date_segment(
        &self,
        segments: &DatedSegments<'_>,
        date: &str,
        file_name: &str,
        location: &str,
        ctx: &FieldContext<'_>,
    ) -> Result<()> {
        self.config.check_date(
            segments.date,
            &FieldContext::named("date (in file name)").location(location),
        )?;
        if segments.date != date {
            return ctx.format_error(
                &format!(
                    "where the date ('{}') differs from the date in the article ('{}').",
                    segments.date, date
                ),
                file_name,
                None,
            );
        }
        Ok(())
    }
}

/// Validates an article or signed article file name
///
/// # Examples
///
/// ```
/// use article_grammar::validate_article_file_name;
///
/// assert!(validate_article_file_name(
///     "2019-04-14_stjohn_piano_a_simple_api__json_input_output.txt",
///     "2019-04-14",
///     "stjohn_piano",
///     "a_simple_api__json_input_output",
/// )
/// .is_ok());
///
/// let err = validate_article_file_name(
///     "2019-04-15_stjohn_piano_a_simple_api.txt",
///     "2019-04-14",
///     "stjohn_piano",
///     "a_simple_api",
/// )
/// .unwrap_err();
/// assert!(err.message().contains("'2019-04-15'"));
/// ```
pub fn validate_article_file_name(
    file_name: &str,
    date: &str,
    author_name: &str,
    uri_title: &str,
) -> Result<()> {
    FileNameValidator::default().validate_article(file_name, date, author_name, uri_title)
}

/// Validates a checkpoint article file name
///
/// ```
/// use article_grammar::validate_checkpoint_article_file_name;
///
/// assert!(validate_checkpoint_article_file_name("checkpoint_0.txt", "checkpoint_0").is_ok());
/// assert!(validate_checkpoint_article_file_name("checkpoint_0.md", "checkpoint_0").is_err());
/// ```
pub fn validate_checkpoint_article_file_name(file_name: &str, uri_title: &str) -> Result<()> {
    FileNameValidator::default().validate_checkpoint(file_name, uri_title)
}

/// Validates a datafeed article file name and the file name it embeds
///
/// ```
/// use article_grammar::{validate_datafeed_article_file_name, ArticleRecord, ArticleType};
///
/// let embedded = ArticleRecord::new(
///     ArticleType::SignedArticle,
///     "2021-04-12",
///     "stjohn_piano",
///     "discussion",
///     "Discussion",
/// );
/// assert!(validate_datafeed_article_file_name(
///     "2021-04-12_edgecase_datafeed_article_216_2021-04-12_stjohn_piano_discussion.txt",
///     "2021-04-12",
///     &embedded,
/// )
/// .is_ok());
/// ```
pub fn validate_datafeed_article_file_name(
    file_name: &str,
    date: &str,
    article: &ArticleRecord,
) -> Result<()> {
    FileNameValidator::default().validate_datafeed(file_name, date, article)
}

/// Builds `<date>_<author_name>_<uri_title>.txt` from validated fields
pub fn article_file_name(date: &str, author_name: &str, uri_title: &str) -> Result<String> {
    ValidationConfig::default().check_date(date, &FieldContext::named("date"))?;
    validate_author_name(author_name)?;
    validate_uri_title(uri_title)?;
    Ok(format!(
        "{}_{}_{}{}",
        date, author_name, uri_title, FILE_EXTENSION
    ))
}

/// Builds `<uri_title>.txt` from a validated URI title
pub fn checkpoint_file_name(uri_title: &str) -> Result<String> {
    validate_uri_title(uri_title)?;
    Ok(join_checkpoint(uri_title))
}

/// Builds the file name under which a datafeed publishes `article`
///
/// ```
/// use article_grammar::{datafeed_article_file_name, ArticleRecord, ArticleType};
///
/// let checkpoint = ArticleRecord::new(
///     ArticleType::CheckpointArticle,
///     "2021-04-12",
///     "stjohn_piano",
///     "checkpoint_0",
///     "checkpoint_0",
/// );
/// let name =
///     datafeed_article_file_name("2021-04-12", "edgecase_datafeed", 3, &checkpoint).unwrap();
/// assert_eq!(name, "2021-04-12_edgecase_datafeed_article_3_checkpoint_0.txt");
/// ```
pub fn datafeed_article_file_name(
    date: &str,
    datafeed_name: &str,
    article_id: u64,
    article: &ArticleRecord,
) -> Result<String> {
    ValidationConfig::default().check_date(date, &FieldContext::named("date"))?;
    validate_datafeed_name(datafeed_name)?;
    let child = article.file_name()?;
    let child_stem = SplitFileName::split(&child).stem;
    Ok(format!(
        "{}_{}{}{}_{}{}",
        date, datafeed_name, DATAFEED_ARTICLE_MARKER, article_id, child_stem, FILE_EXTENSION
    ))
}

fn join_checkpoint(uri_title: &str) -> String {
    format!("{}{}", uri_title, FILE_EXTENSION)
}

fn file_name_context<'a>(location: &'a str, kind: &'a str) -> FieldContext<'a> {
    FieldContext::named("file_name").location(location).kind(kind)
}

/// Splits a datafeed stem, trying each accepted datafeed name in turn
///
/// Falls back to the width of the first accepted name so that a mismatch
/// reports a segment of the expected size.
fn split_datafeed(stem: &str) -> DatedSegments<'_> {
    let marker_width = DATAFEED_ARTICLE_MARKER.len();
    let mut fallback = None;
    for name in DATAFEED_NAMES {
        let segments = DatedSegments::split(stem, name.chars().count(), marker_width);
        if segments.middle == *name {
            return segments;
        }
        if fallback.is_none() {
            fallback = Some(segments);
        }
    }
    fallback.unwrap_or_else(|| DatedSegments::split(stem, 0, marker_width))
}

fn check_extension(
    split: &SplitFileName<'_>,
    file_name: &str,
    ctx: &FieldContext<'_>,
) -> Result<()> {
    if split.extension != FILE_EXTENSION {
        return ctx.format_error(
            &format!("which does not have the extension '{}'.", FILE_EXTENSION),
            file_name,
            None,
        );
    }
    Ok(())
}

fn check_separator(
    segments: &DatedSegments<'_>,
    file_name: &str,
    ctx: &FieldContext<'_>,
) -> Result<()> {
    if segments.separator != Some('_') {
        return ctx.format_error(
            "where char 11 (directly after the date) must be an underscore ('_').",
            file_name,
            None,
        );
    }
    Ok(())
}
