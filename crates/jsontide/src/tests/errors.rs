//! Error kinds, rendered messages, source locations, and stickiness.

use alloc::string::ToString;

use crate::{ErrorKind, ParseError, ParseStatus, Parser, parse};

#[test]
fn invalid_root_for_scalars() {
    for json in [b"99".as_slice(), b"true", b"\"s\"", b"-1"] {
        let err = parse(json).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRoot, "json: {json:?}");
    }
}

#[test]
fn invalid_root_location_skips_whitespace() {
    let err = parse(b"  true").unwrap_err();
    assert_eq!(err.location(), Some((1, 3)));
}

#[test]
fn trailing_characters_after_root() {
    let err = parse(b"[] x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TrailingChars);
    assert_eq!(err.location(), Some((1, 4)));
    assert_eq!(
        err.to_string(),
        "Syntax Error [1:4]: Illegal characters outside of root object, starting with (x)."
    );
}

#[test]
fn unexpected_token_message() {
    let err = parse(b"[45,]").unwrap_err();
    assert_eq!(err, ParseError::UnexpectedToken {
        line: 1,
        column: 5,
        token: ",".to_string(),
    });
    assert_eq!(err.to_string(), "Syntax Error [1:5]: Unexpected token (,).");
}

#[test]
fn expected_token_message() {
    // A second member with no separator.
    let err = parse(b"[1 2]").unwrap_err();
    assert_eq!(err, ParseError::ExpectedToken {
        line: 1,
        column: 4,
        token: ",".to_string(),
    });
    assert_eq!(err.to_string(), "Syntax Error [1:4]: Missing token (,).");
}

#[test]
fn tab_advances_three_columns() {
    let err = parse(b"[\t1,]").unwrap_err();
    assert_eq!(err.location(), Some((1, 7)));
}

#[test]
fn newline_and_vertical_tab_reset_the_column() {
    let err = parse(b"[\n1,]").unwrap_err();
    assert_eq!(err.location(), Some((2, 3)));

    let err = parse(b"[\x0B1,]").unwrap_err();
    assert_eq!(err.location(), Some((2, 3)));
}

#[test]
fn line_counting_spans_chunks() {
    let mut parser = Parser::new();
    parser.parse_chunk(b"[ 1,\n").unwrap();
    parser.parse_chunk(b"  2,\n").unwrap();
    let err = parser.parse_chunk(b"  ,]").unwrap_err();
    assert_eq!(err.location(), Some((3, 3)));
}

#[test]
fn control_bytes_outside_strings() {
    let err = parse(b"[ \x06 ]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalToken);
    assert!(err.to_string().contains("control character"));
}

#[test]
fn number_longer_than_25_bytes() {
    let err = parse(b"[11111111111111111111111111]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalToken);
    assert!(err.to_string().contains("number too large"));

    // 25 bytes exactly still parses.
    let root = parse(b"[1111111111111111111111111]").unwrap();
    assert_eq!(root.as_array().unwrap().len(), 1);
}

#[test]
fn incomplete_document_on_take() {
    let mut parser = Parser::new();
    assert_eq!(parser.parse_chunk(b"{ \"\" : ").unwrap(), ParseStatus::Incomplete);
    let err = parser.take_result().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompleteObject);
    assert!(err.to_string().contains("Incomplete JSON object"));
}

#[test]
fn empty_input_is_incomplete() {
    let mut parser = Parser::new();
    let err = parser.take_result().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompleteObject);
}

#[test]
fn first_error_is_sticky() {
    let mut parser = Parser::new();
    let first = parser.parse_chunk(b"[,]").unwrap_err();
    assert_eq!(first.kind(), ErrorKind::UnexpectedToken);

    // Later calls replay the stored error, valid input or not.
    assert_eq!(parser.parse_chunk(b"[]").unwrap_err(), first);
    assert_eq!(parser.take_result().unwrap_err(), first);
    assert_eq!(parser.error(), Some(&first));
}

#[test]
fn root_can_be_taken_exactly_once() {
    let mut parser = Parser::new();
    parser.parse_chunk(b"[]").unwrap();
    assert!(parser.take_result().is_ok());
    assert_eq!(parser.take_result().unwrap_err(), ParseError::InvalidContext);
}

#[test]
fn keyword_errors_cite_the_accumulated_text() {
    let err = parse(b"[ tru ]").unwrap_err();
    assert_eq!(err.to_string(), "Syntax Error [1:6]: Illegal token (tru).");

    let err = parse(b"[ abcde ]").unwrap_err();
    assert!(err.to_string().contains("(abcde)"));
}

#[test]
fn number_errors_name_the_violation() {
    let err = parse(b"[ 1.e ]").unwrap_err();
    assert!(err.to_string().contains("number"), "{err}");

    let err = parse(b"[ 1e+-1 ]").unwrap_err();
    assert!(
        err.to_string().contains("illegal position for sign character in number"),
        "{err}"
    );

    let err = parse(b"[ 1.2.3 ]").unwrap_err();
    assert!(
        err.to_string()
            .contains("illegal position for decimal point in number"),
        "{err}"
    );
}
