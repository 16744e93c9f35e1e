//! Basic file name validation example
//!
//! Run with: cargo run --example basic -- <file name> [date author_name uri_title]
//!
//! Set `RUST_LOG=article_grammar=trace` to see the grammar decompose the name.

use article_grammar::{
    validate_article_file_name, validate_datafeed_article_file_name, ArticleRecord, ArticleType,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let file_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "2021-04-12_stjohn_piano_discussion.txt".to_string());
    let date = args.get(1).map_or("2021-04-12", String::as_str);
    let author_name = args.get(2).map_or("stjohn_piano", String::as_str);
    let uri_title = args.get(3).map_or("discussion", String::as_str);

    println!("Validating article file name {}", file_name);
    match validate_article_file_name(&file_name, date, author_name, uri_title) {
        Ok(()) => println!("  valid"),
        Err(e) => println!("  invalid: {}", e),
    }

    // The same article as published by the datafeed
    let embedded = ArticleRecord::new(
        ArticleType::SignedArticle,
        date,
        author_name,
        uri_title,
        "Discussion",
    );
    let feed_name = format!(
        "2021-04-12_edgecase_datafeed_article_216_{}",
        file_name
    );
    println!("Validating datafeed file name {}", feed_name);
    match validate_datafeed_article_file_name(&feed_name, "2021-04-12", &embedded) {
        Ok(()) => println!("  valid"),
        Err(e) => println!("  invalid: {}", e),
    }

    Ok(())
}
