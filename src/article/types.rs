//! Article type definitions
//!
//! This module contains the article kinds and the metadata record the file
//! name grammar is checked against.

use std::fmt;
use std::str::FromStr;

use crate::config::ValidationConfig;
use crate::fields::{
    validate_article_type, validate_author_name, validate_title, validate_uri_title,
};
use crate::file_name::{article_file_name, checkpoint_file_name};
use crate::message::FieldContext;
use crate::{Result, ValidationError};

/// The recognized article kinds
///
/// Matches on this enum are exhaustive throughout the crate, so adding a
/// kind shows up at every place that dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArticleType {
    /// Plain article
    Article,
    /// Article accompanied by an author signature
    SignedArticle,
    /// Checkpoint, keyed by its slug alone
    CheckpointArticle,
    /// Datafeed wrapper embedding one child article
    DatafeedArticle,
    /// Signed datafeed wrapper
    SignedDatafeedArticle,
}

impl ArticleType {
    /// Every recognized kind, in declaration order
    pub const ALL: [ArticleType; 5] = [
        ArticleType::Article,
        ArticleType::SignedArticle,
        ArticleType::CheckpointArticle,
        ArticleType::DatafeedArticle,
        ArticleType::SignedDatafeedArticle,
    ];

    /// The literal used in article bodies and feeds
    pub const fn as_str(&self) -> &'static str {
        match self {
            ArticleType::Article => "article",
            ArticleType::SignedArticle => "signed_article",
            ArticleType::CheckpointArticle => "checkpoint_article",
            ArticleType::DatafeedArticle => "datafeed_article",
            ArticleType::SignedDatafeedArticle => "signed_datafeed_article",
        }
    }

    /// Returns true for the two datafeed wrapper kinds
    pub const fn is_datafeed(&self) -> bool {
        matches!(
            self,
            ArticleType::DatafeedArticle | ArticleType::SignedDatafeedArticle
        )
    }

    /// Returns true for kinds carrying a signature
    pub const fn is_signed(&self) -> bool {
        matches!(
            self,
            ArticleType::SignedArticle | ArticleType::SignedDatafeedArticle
        )
    }

    pub(crate) fn from_literal(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        validate_article_type(s, &FieldContext::named("article_type"))
    }
}

/// Article metadata as parsed from an article body
///
/// Records are produced upstream and read here; none of the field
/// constraints are assumed; [`ArticleRecord::validate_fields`] enforces them.
///
/// # Examples
///
/// ```
/// use article_grammar::{ArticleRecord, ArticleType};
///
/// let record = ArticleRecord::new(
///     ArticleType::SignedArticle,
///     "2021-04-12",
///     "stjohn_piano",
///     "discussion",
///     "Discussion",
/// );
/// assert_eq!(record.file_name().unwrap(), "2021-04-12_stjohn_piano_discussion.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArticleRecord {
    /// Declared article kind
    pub article_type: ArticleType,
    /// Publication date, `YYYY-MM-DD`
    pub date: String,
    /// Author slug
    pub author_name: String,
    /// URI-safe title slug
    pub uri_title: String,
    /// Display title
    pub title: String,
    /// Opaque article payload
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: String,
}

impl ArticleRecord {
    /// Create a record with an empty payload
    pub fn new(
        article_type: ArticleType,
        date: impl Into<String>,
        author_name: impl Into<String>,
        uri_title: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            article_type,
            date: date.into(),
            author_name: author_name.into(),
            uri_title: uri_title.into(),
            title: title.into(),
            data: String::new(),
        }
    }

    /// Attach a payload
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// Validates every metadata field of the record
    ///
    /// Checks, in order: date (per `config`), author name, URI title, and the
    /// title against the alphabet of the record's article type.
    pub fn validate_fields(&self, config: &ValidationConfig) -> Result<()> {
        config.check_date(&self.date, &FieldContext::named("date"))?;
        validate_author_name(&self.author_name)?;
        validate_uri_title(&self.uri_title)?;
        validate_title(&self.title, self.article_type)
    }

    /// The canonical file name of the record
    ///
    /// Datafeed articles have no canonical name of their own without a
    /// sequence id and child; build those with
    /// [`datafeed_article_file_name`](crate::datafeed_article_file_name).
    pub fn file_name(&self) -> Result<String> {
        match self.article_type {
            ArticleType::Article | ArticleType::SignedArticle => {
                article_file_name(&self.date, &self.author_name, &self.uri_title)
            }
            ArticleType::CheckpointArticle => checkpoint_file_name(&self.uri_title),
            ArticleType::DatafeedArticle | ArticleType::SignedDatafeedArticle => {
                FieldContext::named("article_type").format_error(
                    "which has no file name without a sequence id and embedded article.",
                    self.article_type.as_str(),
                    None,
                )
            }
        }
    }
}
