//! Article records
//!
//! This module is organized into:
//! - `types`: Article kinds and the metadata record (ArticleType, ArticleRecord)
//! - `builder`: ArticleRecordBuilder for constructing validated records

mod builder;
mod types;

pub use self::builder::ArticleRecordBuilder;
pub use self::types::{ArticleRecord, ArticleType};
