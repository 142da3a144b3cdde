use super::*;

fn canon(text: &str) -> String {
    canonicalize_text(text).unwrap().into_string()
}

// ==================== Layout ====================

#[test]
fn test_two_space_layout() {
    let text = r#"{"b":1,"a":[1,2,{}],"c":{},"d":[]}"#;
    let expected = "{\n  \"b\": 1,\n  \"a\": [\n    1,\n    2,\n    {}\n  ],\n  \"c\": {},\n  \"d\": []\n}";
    assert_eq!(canon(text), expected);
}

#[test]
fn test_whitespace_does_not_matter() {
    let compact = r#"{"event":"push","ids":[1,2]}"#;
    let spaced = "{ \"event\" :\t\"push\",\r\n \"ids\" : [ 1 , 2 ] }\n";
    assert_eq!(canon(compact), canon(spaced));
}

#[test]
fn test_top_level_scalars() {
    assert_eq!(canon("\"text\""), "\"text\"");
    assert_eq!(canon(" null "), "null");
    assert_eq!(canon("true"), "true");
    assert_eq!(canon("42"), "42");
}

// ==================== Key order ====================

#[test]
fn test_keys_keep_parse_order() {
    assert_eq!(canon(r#"{"z":1,"a":2}"#), "{\n  \"z\": 1,\n  \"a\": 2\n}");
}

#[test]
fn test_array_index_keys_come_first() {
    let text = r#"{"b":1,"2":2,"a":3,"1":4,"01":5,"-1":6}"#;
    let expected =
        "{\n  \"1\": 4,\n  \"2\": 2,\n  \"b\": 1,\n  \"a\": 3,\n  \"01\": 5,\n  \"-1\": 6\n}";
    assert_eq!(canon(text), expected);
}

#[test]
fn test_index_limit_is_two_pow_32_minus_one() {
    let text = r#"{"x":0,"4294967295":1,"4294967294":2}"#;
    let expected = "{\n  \"4294967294\": 2,\n  \"x\": 0,\n  \"4294967295\": 1\n}";
    assert_eq!(canon(text), expected);
}

#[test]
fn test_duplicate_key_keeps_first_position_last_value() {
    let text = r#"{"a":1,"b":2,"a":3}"#;
    assert_eq!(canon(text), "{\n  \"a\": 3,\n  \"b\": 2\n}");
}

// ==================== Numbers ====================

#[test]
fn test_number_spelling() {
    let text = "[1.0, -0, 1e21, 1.5e-7, 0.000001, 1e2, 0.1, -1.5e300, 123e-20]";
    let expected = "[\n  1,\n  0,\n  1e+21,\n  1.5e-7,\n  0.000001,\n  100,\n  0.1,\n  -1.5e+300,\n  1.23e-18\n]";
    assert_eq!(canon(text), expected);
}

#[test]
fn test_large_integers_round_through_binary64() {
    assert_eq!(canon("12345678901234567890"), "12345678901234567000");
    assert_eq!(canon("9007199254740993"), "9007199254740992");
    assert_eq!(canon("-9007199254740993"), "-9007199254740992");
    assert_eq!(canon("9007199254740992"), "9007199254740992");
}

#[test]
fn test_floats_use_correctly_rounded_parse() {
    assert_eq!(canon("44.519721243312716"), "44.519721243312716");
    assert_eq!(canon("3.8111204078499652e-6"), "0.000003811120407849965");
    assert_eq!(canon("0.0823235843036829e-9"), "8.23235843036829e-11");
    assert_eq!(canon("1234.5678"), "1234.5678");
}

#[test]
fn test_out_of_range_numbers_become_null() {
    assert_eq!(canon("1e400"), "null");
    assert_eq!(canon("-1e400"), "null");
    assert_eq!(canon("[1e400, 2]"), "[\n  null,\n  2\n]");
    assert_eq!(canon("1e-400"), "0");
}

#[test]
fn test_excessive_nesting_is_rejected() {
    let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
    assert!(matches!(
        canonicalize_text(&deep),
        Err(CanonicalizeError::ParseError { .. })
    ));
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(0.0000009), "9e-7");
    assert_eq!(format_number(-2.5), "-2.5");
    assert_eq!(format_number(f64::NAN), "null");
}

// ==================== Strings ====================

#[test]
fn test_string_escapes() {
    assert_eq!(canon(r#""é\/\u001f""#), "\"\u{e9}/\\u001f\"");
    assert_eq!(canon(r#""a\"b\\c\n""#), r#""a\"b\\c\n""#);
    assert_eq!(canon("\"\u{2028}\""), "\"\u{2028}\"");
}

// ==================== Body decoding ====================

#[test]
fn test_decode_body_accepts_both_alphabets() {
    // {"k":"\u{ff}\u{ff}\u{fe}"} encodes with '+' and '/' in the standard alphabet
    let standard = "eyJrIjoiw7/Dv8O+In0=";
    let url_safe = "eyJrIjoiw7_Dv8O-In0";
    let expected = "{\"k\":\"\u{ff}\u{ff}\u{fe}\"}";
    assert_eq!(decode_body(standard, 1024).unwrap(), expected);
    assert_eq!(decode_body(url_safe, 1024).unwrap(), expected);
}

#[test]
fn test_decode_body_limit() {
    let body = base64url::encode(br#"{"a":"0123456789"}"#);
    assert!(matches!(
        decode_body(&body, 4),
        Err(CanonicalizeError::BodyTooLarge { size: 18, limit: 4 })
    ));
}

#[test]
fn test_decode_body_rejects_bad_input() {
    assert!(matches!(
        decode_body("***", 1024),
        Err(CanonicalizeError::InvalidEncoding { .. })
    ));
    assert!(matches!(
        decode_body(&base64url::encode([0xff, 0xfe]), 1024),
        Err(CanonicalizeError::InvalidUtf8 { .. })
    ));
}

#[test]
fn test_canonical_body_rejects_non_json() {
    for text in ["", "{", "not json", "{\"a\":1} trailing"] {
        let body = base64url::encode(text);
        assert!(
            matches!(
                canonical_body(&body, 1024),
                Err(CanonicalizeError::ParseError { .. })
            ),
            "{text:?}"
        );
    }
}

#[test]
fn test_error_maps_to_malformed_body() {
    let err: crate::VerifyError = CanonicalizeError::ParseError {
        message: "x".into(),
    }
    .into();
    assert_eq!(err.reason(), crate::Reason::MalformedBody);
}
