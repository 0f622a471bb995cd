//! Property tests over generated buffers.

use crate::parse;
use proptest::prelude::*;

const FILE: &str = "meow.meow";

/// A word, a quoted chunk, or a run of whitespace.
fn piece() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("meow".to_owned()),
        "[a-z]{1,6}",
        "\"[a-z \n]{0,8}\"",
        "[ \t\n]{1,3}",
    ]
}

/// Keywords outside quotes, counted on whole words.
fn expected_keywords(pieces: &[String]) -> usize {
    let mut source = String::new();
    for piece in pieces {
        source.push_str(piece);
    }
    let mut count = 0;
    let mut in_string = false;
    let mut word = String::new();
    for c in source.chars().chain(std::iter::once(' ')) {
        if in_string {
            in_string = c != '"';
            continue;
        }
        if c.is_ascii_alphabetic() {
            word.push(c);
            continue;
        }
        if word == "meow" {
            count += 1;
        }
        word.clear();
        in_string = c == '"';
    }
    count
}

proptest! {
    #[test]
    fn whitespace_only_is_empty(input in "[ \t\n\r]{0,32}") {
        let module = parse(&input, FILE);
        prop_assert!(module.is_ok_and(|m| m.is_empty()));
    }

    #[test]
    fn expression_count_matches_keywords(pieces in prop::collection::vec(piece(), 0..24)) {
        let source: String = pieces.concat();
        let module = parse(&source, FILE);
        prop_assert!(module.is_ok());
        prop_assert_eq!(module.map(|m| m.len()).unwrap_or_default(), expected_keywords(&pieces));
    }

    #[test]
    fn reparse_is_structurally_equal(pieces in prop::collection::vec(piece(), 0..24)) {
        let source: String = pieces.concat();
        let first = parse(&source, FILE);
        let second = parse(&source, FILE);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn single_line_columns_strictly_increase(words in prop::collection::vec("meow|\"[a-z ]{0,4}\"|[a-z]{1,4}", 0..16)) {
        let source = words.join(" ");
        let module = parse(&source, FILE);
        prop_assert!(module.is_ok());
        let columns: Vec<u32> = module
            .map(|m| m.iter().map(|e| e.location().column()).collect())
            .unwrap_or_default();
        for pair in columns.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn every_expression_is_the_keyword(pieces in prop::collection::vec(piece(), 0..24)) {
        let source: String = pieces.concat();
        let module = parse(&source, FILE);
        prop_assert!(module.is_ok_and(|m| m.iter().all(|e| e.text() == "meow")));
    }
}
