use std::borrow::Cow;
use std::path::PathBuf;

use burin_json::{parse, Encoding, JsonValue, Parser};

#[test]
fn should_parse_each_singleton_literal() {
    assert_eq!(Some(JsonValue::Null), parse("null"));
    assert_eq!(Some(JsonValue::Boolean(true)), parse("true"));
    assert_eq!(Some(JsonValue::Boolean(false)), parse("false"));
}

#[test]
fn should_produce_absence_rather_than_an_error() {
    for input in ["", "djdjiod", "\"abc", "[1,]", "{", "nul", "123abc"] {
        assert_eq!(None, parse(input), "input {:?} should not parse", input);
    }
}

#[test]
fn should_parse_numbers_as_non_negative_integers() {
    assert_eq!(Some(JsonValue::Number(5546456)), parse("5546456"));
    assert_eq!(Some(JsonValue::Number(0)), parse("0"));
    assert_eq!(None, parse("-1"));
    assert_eq!(None, parse("2.5"));
}

#[test]
fn should_compose_arrays_recursively() {
    let parsed = parse("[1, 2, [1, 2, 3, []]]").unwrap();
    match parsed {
        JsonValue::Array(ref values) => {
            assert_eq!(3, values.len());
            assert_eq!(JsonValue::Number(1), values[0]);
            assert_eq!(JsonValue::Number(2), values[1]);
            match values[2] {
                JsonValue::Array(ref inner) => {
                    assert_eq!(4, inner.len());
                    assert_eq!(JsonValue::Array(vec![]), inner[3]);
                }
                ref other => panic!("expected a nested array, got {:?}", other),
            }
        }
        other => panic!("expected an array, got {:?}", other),
    }
}

#[test]
fn should_ignore_whitespace_around_items_and_delimiters() {
    assert_eq!(parse("[1,2]"), parse("[ 1 , 2 ]"));
    assert_eq!(parse("{\"a\":[true]}"), parse("{ \"a\" : [ true ] }"));
}

#[test]
fn should_retain_duplicate_object_entries_in_source_order() {
    let parsed = parse("{\"a\":1,\"a\":2}").unwrap();
    let expected = JsonValue::Object(vec![
        (Cow::Borrowed("a"), JsonValue::Number(1)),
        (Cow::Borrowed("a"), JsonValue::Number(2)),
    ]);
    assert_eq!(expected, parsed);
}

#[test]
fn should_round_trip_through_the_rendered_form() {
    let inputs = [
        "null",
        "true",
        "0",
        "\"abc\"",
        "[ 1, 2, [ 1, 2, 3, [] ] ]",
        "{\"a\":1,\"a\":2}",
        "{\"πλάσμα\": [\"日本語\", {\"k\": null}]}",
    ];
    for input in inputs {
        let value = parse(input).unwrap();
        let rendered = value.to_string();
        assert_eq!(
            Some(&value),
            parse(&rendered).as_ref(),
            "{:?} did not survive re-parsing",
            rendered
        );
    }
}

#[test]
fn should_not_accept_a_valid_prefix_with_trailing_garbage() {
    assert_eq!(None, parse("[1, 2] extra"));
    assert_eq!(None, parse("truex"));
    assert_eq!(Some(JsonValue::Number(7)), parse("7 \n\t"));
}

#[test]
fn should_parse_owned_values_from_byte_buffers() {
    let parser = Parser::default();
    let parsed = parser.parse_bytes("{\"край\": [1, 2]}".as_bytes());
    let expected = JsonValue::Object(vec![(
        Cow::Owned("край".to_string()),
        JsonValue::Array(vec![JsonValue::Number(1), JsonValue::Number(2)]),
    )]);
    assert_eq!(Some(expected), parsed);
}

#[test]
fn should_parse_ascii_input_under_the_ascii_encoding() {
    let parser = Parser::with_encoding(Encoding::Ascii);
    assert_eq!(
        Some(JsonValue::Array(vec![JsonValue::Number(1)])),
        parser.parse_bytes(b"[1]")
    );
}

#[test]
fn should_parse_files_from_the_fixture_corpus() {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/json/valid");
    let parser = Parser::default();
    for name in [
        "simple_structure.json",
        "nested_arrays.json",
        "duplicate_keys.json",
        "unicode_strings.json",
        "empty_collections.json",
        "tool_catalog.json",
    ] {
        let parsed = parser.parse_file(base.join(name));
        assert!(parsed.is_some(), "failed to parse fixture {}", name);
    }
}

#[test]
fn should_report_a_missing_file_as_a_no_match() {
    let parser = Parser::default();
    assert_eq!(None, parser.parse_file("fixtures/json/no_such_file.json"));
}
