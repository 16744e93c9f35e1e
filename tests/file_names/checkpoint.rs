//! Checkpoint article file names
//!
//! `<uri_title>.txt`

use article_grammar::{checkpoint_file_name, validate_checkpoint_article_file_name};

#[test]
fn test_checkpoint_names_validate() {
    for uri_title in ["checkpoint_0", "checkpoint_17", "checkpoint_123456"] {
        let name = checkpoint_file_name(uri_title).unwrap();
        assert_eq!(name, format!("{}.txt", uri_title));
        validate_checkpoint_article_file_name(&name, uri_title).unwrap();
    }
}

#[test]
fn test_other_suffixes_fail() {
    for name in [
        "checkpoint_0",
        "checkpoint_0.md",
        "checkpoint_0.txt.txt",
        "checkpoint_0_.txt",
        "checkpoint_00.txt",
        "2021-04-12_checkpoint_0.txt",
    ] {
        assert!(
            validate_checkpoint_article_file_name(name, "checkpoint_0").is_err(),
            "accepted {}",
            name
        );
    }
}

#[test]
fn test_message_names_expected_file_name() {
    let err =
        validate_checkpoint_article_file_name("checkpoint_1.txt", "checkpoint_2").unwrap_err();
    assert!(err.is_format());
    assert!(err.message().contains("received value 'checkpoint_1.txt'"));
    assert!(err.message().contains("so the file name must be 'checkpoint_2.txt'"));
}
