//! Article and signed article file names
//!
//! `<date>_<author_name>_<uri_title>.txt`

use article_grammar::{article_file_name, validate_article_file_name, ValidationError};

const DATE: &str = "2019-04-14";
const AUTHOR: &str = "stjohn_piano";
const URI_TITLE: &str = "a_simple_api__json_input_output";

fn validate(file_name: &str) -> Result<(), ValidationError> {
    validate_article_file_name(file_name, DATE, AUTHOR, URI_TITLE)
}

fn canonical() -> String {
    format!("{}_{}_{}.txt", DATE, AUTHOR, URI_TITLE)
}

/// Replaces the char at `index` with `replacement`
fn mutate(s: &str, index: usize, replacement: char) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| if i == index { replacement } else { c })
        .collect()
}

#[test]
fn test_canonical_name_validates() {
    assert!(validate(&canonical()).is_ok());
}

#[test]
fn test_constructed_names_validate() {
    let triples = [
        ("2017-06-28", "stjohn_piano", "viewpoint"),
        ("2020-12-31", "a", "b"),
        (
            "1999-01-01",
            "author_2",
            "recipe_for_installing_kafka_2_5_0_as_a_systemd_service_on_ubuntu_16_04",
        ),
        ("2021-04-12", "x_y_z", "stalky__co__by_rudyard_kipling_in_ambush"),
    ];
    for (date, author, uri_title) in triples {
        let name = article_file_name(date, author, uri_title).unwrap();
        assert_eq!(name, format!("{}_{}_{}.txt", date, author, uri_title));
        validate_article_file_name(&name, date, author, uri_title).unwrap();
    }
}

#[test]
fn test_mutating_date_fails() {
    let name = canonical();
    for index in 0..10 {
        let replacement = if index == 4 || index == 7 { '_' } else { '9' };
        let mutated = mutate(&name, index, replacement);
        if mutated == name {
            continue;
        }
        assert!(validate(&mutated).is_err(), "accepted {}", mutated);
    }
}

#[test]
fn test_mutating_separator_fails() {
    for replacement in ['-', 'x', '.', ' '] {
        let mutated = mutate(&canonical(), 10, replacement);
        let err = validate(&mutated).unwrap_err();
        assert!(err.is_format());
    }
}

#[test]
fn test_mutating_author_fails() {
    let name = canonical();
    for index in 11..11 + AUTHOR.len() {
        let mutated = mutate(&name, index, 'q');
        if mutated == name {
            continue;
        }
        assert!(validate(&mutated).is_err(), "accepted {}", mutated);
    }
}

#[test]
fn test_mutating_uri_title_fails() {
    let name = canonical();
    let start = 11 + AUTHOR.len() + 1;
    for index in start..start + URI_TITLE.len() {
        let mutated = mutate(&name, index, 'q');
        if mutated == name {
            continue;
        }
        assert!(validate(&mutated).is_err(), "accepted {}", mutated);
    }
}

#[test]
fn test_wrong_extension() {
    for name in [
        "2019-04-14_stjohn_piano_a_simple_api__json_input_output",
        "2019-04-14_stjohn_piano_a_simple_api__json_input_output.TXT",
        "2019-04-14_stjohn_piano_a_simple_api__json_input_output.txt.gpg",
    ] {
        let err = validate(name).unwrap_err();
        assert!(err.message().contains("does not have the extension '.txt'"), "{}", err);
    }
}

#[test]
fn test_trailing_and_truncated_uri_title() {
    assert!(validate("2019-04-14_stjohn_piano_a_simple_api__json_input_output_v2.txt").is_err());
    assert!(validate("2019-04-14_stjohn_piano_a_simple_api.txt").is_err());
}

#[test]
fn test_date_mismatch_message_names_segment() {
    let err = validate("2019-04-13_stjohn_piano_a_simple_api__json_input_output.txt").unwrap_err();
    assert_eq!(
        err.to_string(),
        "In location 'file_name::validate_article_file_name', for variable 'file_name', \
         expected a 'article_file_name', but received value \
         '2019-04-13_stjohn_piano_a_simple_api__json_input_output.txt', \
         where the date ('2019-04-13') differs from the date in the article ('2019-04-14')."
    );
}

#[test]
fn test_malformed_inputs_fail_before_file_name() {
    // The file name is fine; the expected uri_title is not
    let err = validate_article_file_name(&canonical(), DATE, AUTHOR, "A_Simple_API").unwrap_err();
    assert!(err.message().starts_with("For variable 'uri_title'"));
}

#[test]
fn test_short_file_names() {
    for name in ["", ".txt", "2019.txt", "2019-04-14.txt", "2019-04-14_stjohn.txt"] {
        assert!(validate(name).is_err(), "accepted {:?}", name);
    }
}

#[test]
fn test_non_ascii_file_name() {
    assert!(validate("2019-04-14_stjohn_piano_a_simple_api__json_input_outpüt.txt").is_err());
    assert!(validate("２019-04-14_stjohn_piano_a_simple_api__json_input_output.txt").is_err());
}
