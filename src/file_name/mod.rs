//! Article file name grammar
//!
//! This module is organized into:
//! - `segments`: positional splitting of file names into segments
//! - `grammar`: validation of each grammar, and construction of canonical names

mod grammar;
mod segments;

pub use self::grammar::{
    article_file_name, checkpoint_file_name, datafeed_article_file_name,
    validate_article_file_name, validate_checkpoint_article_file_name,
    validate_datafeed_article_file_name, FileNameValidator, DATAFEED_ARTICLE_MARKER,
};
pub use self::segments::{DatafeedSection, DatedSegments, SplitFileName, DATE_WIDTH};
