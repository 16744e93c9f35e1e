#![doc = include_str!("../README.md")]

/// Article records and kinds
pub mod article;
mod config;
/// Display helpers for article metadata
pub mod display;
mod error;
/// Article field validators and the literal allow-lists
pub mod fields;
/// Article file name grammar
pub mod file_name;
mod message;
/// Primitive type and format validators
pub mod primitives;
mod value;

pub use article::{ArticleRecord, ArticleRecordBuilder, ArticleType};
pub use config::{DateCheck, ValidationConfig};
pub use display::{parse_hyphenated_integers, title_to_display_title};
pub use error::{ErrorKind, Result, ValidationError};
pub use fields::{
    validate_article_type, validate_author_name, validate_blockchain_name, validate_date,
    validate_datafeed_name, validate_signed_by_author, validate_title, validate_uri_title,
    BLOCKCHAIN_NAMES, DATAFEED_NAMES, FILE_EXTENSION, SIGNED_BY_AUTHOR_VALUES,
};
pub use file_name::{
    article_file_name, checkpoint_file_name, datafeed_article_file_name,
    validate_article_file_name, validate_checkpoint_article_file_name,
    validate_datafeed_article_file_name, DatafeedSection, DatedSegments, FileNameValidator,
    SplitFileName, DATAFEED_ARTICLE_MARKER,
};
pub use message::{build_error_msg, FieldContext};
pub use primitives::{
    validate_boolean, validate_hex, validate_hex_length, validate_integer,
    validate_positive_integer, validate_string, validate_string_is_date,
    validate_string_is_decimal, validate_string_is_positive_integer,
    validate_string_is_whole_number, validate_whole_number,
};
pub use value::Value;
