//! Datafeed article file names
//!
//! `<date>_edgecase_datafeed_article_<id>_<embedded file name>`
//!
//! The embedded file name is validated against the embedded article's own
//! fields with the grammar of its declared kind.

use article_grammar::{
    datafeed_article_file_name, validate_datafeed_article_file_name, ArticleRecord, ArticleType,
    DateCheck, FileNameValidator, ValidationConfig,
};

const FEED_NAME: &str =
    "2021-04-12_edgecase_datafeed_article_216_2021-04-12_stjohn_piano_discussion.txt";

fn signed_article(date: &str) -> ArticleRecord {
    ArticleRecord::new(
        ArticleType::SignedArticle,
        date,
        "stjohn_piano",
        "discussion",
        "Discussion",
    )
}

fn checkpoint(uri_title: &str) -> ArticleRecord {
    ArticleRecord::new(
        ArticleType::CheckpointArticle,
        "2021-04-12",
        "stjohn_piano",
        uri_title,
        uri_title,
    )
}

#[test]
fn test_embedded_signed_article() {
    validate_datafeed_article_file_name(FEED_NAME, "2021-04-12", &signed_article("2021-04-12"))
        .unwrap();
}

#[test]
fn test_long_real_world_name() {
    let article = ArticleRecord::new(
        ArticleType::SignedArticle,
        "2021-04-12",
        "stjohn_piano",
        "discussion_crypto_messaging_apps",
        "Discussion:_Crypto_Messaging_Apps",
    );
    validate_datafeed_article_file_name(
        "2021-04-12_edgecase_datafeed_article_216_2021-04-12_stjohn_piano_discussion_crypto_messaging_apps.txt",
        "2021-04-12",
        &article,
    )
    .unwrap();
}

#[test]
fn test_inner_date_must_match_embedded_article() {
    let name = "2021-04-12_edgecase_datafeed_article_216_2021-04-13_stjohn_piano_discussion.txt";
    let err = validate_datafeed_article_file_name(name, "2021-04-12", &signed_article("2021-04-12"))
        .unwrap_err();
    assert!(err.is_format());
    // Rejected by the embedded article grammar, against the embedded file name
    assert!(err.message().starts_with("In location 'file_name::validate_article_file_name'"));
    assert!(err.message().contains("'2021-04-13_stjohn_piano_discussion.txt'"));
}

#[test]
fn test_outer_and_inner_dates_may_differ() {
    let name = "2021-05-01_edgecase_datafeed_article_216_2021-04-12_stjohn_piano_discussion.txt";
    validate_datafeed_article_file_name(name, "2021-05-01", &signed_article("2021-04-12")).unwrap();
}

#[test]
fn test_outer_date_must_match() {
    let article = signed_article("2021-04-12");
    let err = validate_datafeed_article_file_name(FEED_NAME, "2021-04-11", &article).unwrap_err();
    assert!(
        err.message()
            .starts_with("In location 'file_name::validate_datafeed_article_file_name'")
    );
    assert!(err.message().contains(
        "where the date ('2021-04-12') differs from the date in the article ('2021-04-11')"
    ));
}

#[test]
fn test_embedded_checkpoint() {
    let name = "2021-04-12_edgecase_datafeed_article_0_checkpoint_0.txt";
    validate_datafeed_article_file_name(name, "2021-04-12", &checkpoint("checkpoint_0")).unwrap();

    let err = validate_datafeed_article_file_name(name, "2021-04-12", &checkpoint("checkpoint_1"))
        .unwrap_err();
    assert!(err.message().contains("so the file name must be 'checkpoint_1.txt'"));
}

#[test]
fn test_embedded_kind_selects_grammar() {
    // A checkpoint record cannot vouch for a dated file name
    let record = checkpoint("discussion");
    assert!(validate_datafeed_article_file_name(FEED_NAME, "2021-04-12", &record).is_err());

    // An article record cannot vouch for a checkpoint file name
    let article = ArticleRecord::new(
        ArticleType::Article,
        "2021-04-12",
        "stjohn_piano",
        "checkpoint_0",
        "Checkpoint",
    );
    assert!(validate_datafeed_article_file_name(
        "2021-04-12_edgecase_datafeed_article_0_checkpoint_0.txt",
        "2021-04-12",
        &article,
    )
    .is_err());
}

#[test]
fn test_embedded_datafeed_kinds_rejected() {
    for article_type in [ArticleType::DatafeedArticle, ArticleType::SignedDatafeedArticle] {
        let mut article = signed_article("2021-04-12");
        article.article_type = article_type;
        let err =
            validate_datafeed_article_file_name(FEED_NAME, "2021-04-12", &article).unwrap_err();
        assert!(err.message().contains("unrecognised article type"), "{}", err);
        assert!(err.message().contains(article_type.as_str()));
    }
}

#[test]
fn test_article_id() {
    let article = signed_article("2021-04-12");
    for id in ["0", "1", "216", "000"] {
        let name = format!(
            "2021-04-12_edgecase_datafeed_article_{}_2021-04-12_stjohn_piano_discussion.txt",
            id
        );
        validate_datafeed_article_file_name(&name, "2021-04-12", &article).unwrap();
    }
    for id in ["", "x", "-1", "2a"] {
        let name = format!(
            "2021-04-12_edgecase_datafeed_article_{}_2021-04-12_stjohn_piano_discussion.txt",
            id
        );
        let err = validate_datafeed_article_file_name(&name, "2021-04-12", &article).unwrap_err();
        assert!(err.message().contains("for variable 'article_id'"), "{}", err);
    }
}

#[test]
fn test_literal_segments() {
    let article = signed_article("2021-04-12");
    let cases = [
        (
            "2021-04-12_edgecase_datafeeX_article_216_2021-04-12_stjohn_piano_discussion.txt",
            "datafeed name",
        ),
        (
            "2021-04-12_edgecase_datafeed_Article_216_2021-04-12_stjohn_piano_discussion.txt",
            "must be '_article_'",
        ),
        (
            "2021-04-12_edgecase_datafeed_article_216.txt",
            "does not contain an underscore",
        ),
        (
            "2021-04-12-edgecase_datafeed_article_216_2021-04-12_stjohn_piano_discussion.txt",
            "char 11",
        ),
        (
            "2021-04-12_edgecase_datafeed_article_216_2021-04-12_stjohn_piano_discussion.gpg",
            "extension",
        ),
    ];
    for (name, expected) in cases {
        let err = validate_datafeed_article_file_name(name, "2021-04-12", &article).unwrap_err();
        assert!(err.message().contains(expected), "{} -> {}", name, err);
    }
}

#[test]
fn test_constructed_name_roundtrip() {
    let article = signed_article("2021-04-12");
    let name =
        datafeed_article_file_name("2021-04-12", "edgecase_datafeed", 216, &article).unwrap();
    assert_eq!(name, FEED_NAME);

    let checkpoint = checkpoint("checkpoint_8");
    let name =
        datafeed_article_file_name("2021-04-12", "edgecase_datafeed", 9, &checkpoint).unwrap();
    validate_datafeed_article_file_name(&name, "2021-04-12", &checkpoint).unwrap();
}

#[test]
fn test_calendar_config_reaches_embedded_article() {
    let article = signed_article("2021-02-30");
    let name = "2021-04-12_edgecase_datafeed_article_1_2021-02-30_stjohn_piano_discussion.txt";

    FileNameValidator::default()
        .validate_datafeed(name, "2021-04-12", &article)
        .unwrap();

    let strict = FileNameValidator::new(ValidationConfig {
        date_check: DateCheck::Calendar,
    });
    let err = strict.validate_datafeed(name, "2021-04-12", &article).unwrap_err();
    assert!(err.message().contains("which is not a calendar date"));
}
