//! Record builder for constructing validated article records

use chrono::Utc;

use super::types::{ArticleRecord, ArticleType};
use crate::config::ValidationConfig;
use crate::message::FieldContext;
use crate::Result;

/// Builder for [`ArticleRecord`]
///
/// `build` checks that the required fields are present and runs
/// [`ArticleRecord::validate_fields`] with the builder's configuration. The
/// date defaults to today (UTC).
///
/// # Examples
///
/// ```
/// use article_grammar::{ArticleRecordBuilder, ArticleType};
///
/// let record = ArticleRecordBuilder::new(ArticleType::Article)
///     .date("2019-04-14")
///     .author_name("stjohn_piano")
///     .uri_title("a_simple_api")
///     .title("A_Simple_API")
///     .build()
///     .unwrap();
///
/// assert_eq!(record.file_name().unwrap(), "2019-04-14_stjohn_piano_a_simple_api.txt");
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct ArticleRecordBuilder {
    article_type: ArticleType,
    date: Option<String>,
    author_name: Option<String>,
    uri_title: Option<String>,
    title: Option<String>,
    data: String,
    config: ValidationConfig,
}

impl ArticleRecordBuilder {
    /// Create a builder for an article of the given kind
    pub fn new(article_type: ArticleType) -> Self {
        Self {
            article_type,
            date: None,
            author_name: None,
            uri_title: None,
            title: None,
            data: String::new(),
            config: ValidationConfig::default(),
        }
    }

    /// Set the publication date (`YYYY-MM-DD`)
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the author slug
    pub fn author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = Some(author_name.into());
        self
    }

    /// Set the URI title slug
    pub fn uri_title(mut self, uri_title: impl Into<String>) -> Self {
        self.uri_title = Some(uri_title.into());
        self
    }

    /// Set the display title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the payload
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// Set the validation configuration used by `build`
    pub fn config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Build and validate the record
    pub fn build(self) -> Result<ArticleRecord> {
        let author_name = required(self.author_name, "author_name")?;
        let uri_title = required(self.uri_title, "uri_title")?;
        let title = required(self.title, "title")?;

        let date = self
            .date
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());

        let record = ArticleRecord {
            article_type: self.article_type,
            date,
            author_name,
            uri_title,
            title,
            data: self.data,
        };
        record.validate_fields(&self.config)?;
        Ok(record)
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => FieldContext::named(field).format_error("which is required.", None::<&str>, None),
    }
}
