//! Exercises the public surface the way an embedding application would.

use jsontide::{ErrorKind, Extensions, ObjectMap, ParseStatus, Parser, Value, ValueKind};

#[test]
fn chunked_session_end_to_end() {
    let mut parser = Parser::new();
    assert_eq!(
        parser.parse_chunk(b"{ \"tags\": [\"a\", ").unwrap(),
        ParseStatus::Incomplete
    );
    assert_eq!(
        parser.parse_chunk(b"\"b\"], \"count\": 2 }").unwrap(),
        ParseStatus::Complete
    );

    let root = parser.take_result().unwrap();
    assert_eq!(root.kind(), ValueKind::Object);
    let map = root.as_object().unwrap();
    assert_eq!(map.get("count").unwrap().as_number(), Some(2.0));

    let tags = map.get("tags").unwrap().as_array().unwrap();
    let names: Vec<&str> = tags.iter().filter_map(Value::as_str).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn one_shot_helper() {
    let root = jsontide::parse(b"[null, true, -2.5]").unwrap();
    assert_eq!(
        root.as_array().unwrap().as_slice(),
        &[Value::Null, Value::Bool(true), Value::Number(-2.5)]
    );
}

#[test]
fn extension_opt_in() {
    let mut parser = Parser::new();
    parser.set_extensions(Extensions::UTF8_PI | Extensions::NONE);
    parser.parse_chunk("[π, π]".as_bytes()).unwrap();
    let root = parser.take_result().unwrap();
    assert_eq!(
        root.as_array().unwrap().as_slice(),
        &[Value::Number(3.14159), Value::Number(3.14159)]
    );

    assert!(jsontide::parse("[π]".as_bytes()).is_err());
}

#[test]
fn object_map_direct_use() {
    let mut map = ObjectMap::new();
    map.insert("alpha", Value::Number(1.0)).unwrap();
    map.insert("beta", Value::from("two")).unwrap();
    assert!(map.insert("bad\u{1}key", Value::Null).is_err());

    assert_eq!(map.len(), 2);
    assert!(map.contains_key("alpha"));
    assert_eq!(map.remove("alpha"), Some(Value::Number(1.0)));
    assert_eq!(map.remove("alpha"), None);

    let entries: Vec<(String, Value)> = map.iter().map(|(k, v)| (k, v.clone())).collect();
    assert_eq!(entries, [("beta".to_string(), Value::from("two"))]);
}

#[test]
fn errors_carry_kind_location_and_message() {
    let mut parser = Parser::new();
    let err = parser.parse_chunk(b"{ \"a\" 1 }").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExpectedToken);
    assert_eq!(err.location(), Some((1, 7)));
    assert!(err.to_string().starts_with("Syntax Error [1:7]"));
}
