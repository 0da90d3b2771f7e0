//! String lexing: escapes, unicode escapes, surrogate pairs, literal UTF-8.

use alloc::string::ToString;

use crate::{ErrorKind, ParseError, Value, parse};

fn first_string(json: &[u8]) -> Value {
    let root = parse(json).unwrap();
    root.as_array().unwrap()[0].clone()
}

fn parse_err(json: &[u8]) -> ParseError {
    parse(json).unwrap_err()
}

fn assert_illegal(json: &[u8], message_part: &str) {
    let err = parse_err(json);
    assert_eq!(err.kind(), ErrorKind::IllegalToken, "{err}");
    assert!(
        err.to_string().contains(message_part),
        "expected {message_part:?} in {err}"
    );
}

#[test]
fn simple_escapes() {
    let v = first_string(b"[\"a\\/b\\\\c\\\"d\\b\\f\\n\\r\\t\"]");
    assert_eq!(v.as_str(), Some("a/b\\c\"d\u{8}\u{c}\n\r\t"));
}

#[test]
fn unknown_escape_is_rejected() {
    assert_illegal(b"[\"\\q\"]", "unrecognized escape sequence");
}

#[test]
fn bmp_unicode_escape() {
    let v = first_string(b"[\"\\u0041\\u03c0\"]");
    assert_eq!(v.as_str(), Some("Aπ"));
}

#[test]
fn surrogate_pairs_decode_to_supplementary_characters() {
    // Mixed-case hex and a BMP escape between two pairs.
    let v = first_string(b"[ \"\\uD801\\uDC37\\u03c0\\ud801\\udc37\" ]");
    assert_eq!(v.as_str(), Some("\u{10437}\u{3C0}\u{10437}"));
}

#[test]
fn lone_low_surrogate_is_rejected() {
    assert_illegal(b"[ \"\\uDC37\" ]", "invalid unicode character in string");
}

#[test]
fn low_before_high_is_rejected() {
    assert_illegal(
        b"[ \"\\uDC37\\uD801\" ]",
        "invalid unicode character in string",
    );
}

#[test]
fn high_surrogate_must_be_followed_by_low() {
    assert_illegal(
        b"[ \"\\uD801\\u0041\" ]",
        "invalid unicode character in string",
    );
    assert_illegal(b"[ \"\\uD801x\" ]", "invalid unicode character in string");
    assert_illegal(b"[ \"\\uD801\" ]", "invalid unicode character in string");
    assert_illegal(b"[ \"\\uD801\\n\" ]", "invalid unicode character in string");
}

#[test]
fn escaped_control_code_points_are_rejected() {
    assert_illegal(b"[ \"\\u0000\" ]", "control character in string");
    assert_illegal(b"[ \"\\u001F\" ]", "control character in string");
    assert_illegal(b"[ \"\\u007f\" ]", "control character in string");
}

#[test]
fn escape_producible_controls_are_fine() {
    let v = first_string(b"[\"\\t\\n\"]");
    assert_eq!(v.as_str(), Some("\t\n"));
}

#[test]
fn bad_hex_digit_in_unicode_escape() {
    assert_illegal(b"[\"\\u00g0\"]", "illegal unicode escape sequence");
}

#[test]
fn literal_multibyte_characters() {
    // 2-, 3-, and 4-byte sequences.
    let v = first_string("[\"π€𐐷\"]".as_bytes());
    assert_eq!(v.as_str(), Some("π€𐐷"));
}

#[test]
fn raw_control_bytes_are_rejected() {
    assert_illegal(b"[\"a\nb\"]", "control character in string");
    assert_illegal(b"[\"\x01\"]", "control character in string");
    assert_illegal(b"[\"\x7f\"]", "control character in string");
}

#[test]
fn stray_continuation_byte_is_rejected() {
    assert_illegal(b"[\"\x80\"]", "control character in string");
}

#[test]
fn truncated_multibyte_sequence_is_rejected() {
    // Lead byte promises two bytes; an ASCII byte follows instead.
    assert_illegal(b"[\"\xCFx\"]", "illegal character in string");
}

#[test]
fn overlong_encoding_is_rejected() {
    // C0 80 would decode to an overlong NUL.
    assert_illegal(b"[\"\xC0\x80\"]", "illegal character in string");
}

#[test]
fn five_byte_lead_is_rejected() {
    assert_illegal(b"[\"\xF8\x80\x80\x80\x80\"]", "illegal character in string");
}

#[test]
fn strings_keep_structural_bytes_verbatim() {
    let v = first_string(b"[ \"]]]][[[,,\\\\,,\\\"\" ]");
    assert_eq!(v.as_str(), Some("]]]][[[,,\\,,\""));
}
