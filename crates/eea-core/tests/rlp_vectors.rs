//! # RLP Compatibility Vectors
//!
//! Encoder outputs that existing EEA client libraries produce for the same
//! inputs. If any of these change, hashes computed over RLP (including
//! privacy group ids) stop matching deployed identifiers.

use eea_core::{decode_hex, encode, RlpInput, RlpValue};

fn enc(input: impl Into<RlpInput>) -> String {
    encode(&input.into()).expect("input should normalize")
}

fn list(items: Vec<RlpInput>) -> RlpInput {
    RlpInput::List(items)
}

const ADDR_1: &str = "0xfe3b557e8fb62b89f4916b721be55ceb828dbd73";
const ADDR_2: &str = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf";
const ADDR_3: &str = "0x2B5AD5c4795c026514f8317c7a215E218DcCD6cF";

// ---------------------------------------------------------------------------
// Single bytes below 0x80 encode as themselves
// ---------------------------------------------------------------------------

#[test]
fn test_single_byte_values() {
    assert_eq!(enc("0x00"), "0x00");
    assert_eq!(enc("0x01"), "0x01");
    assert_eq!(enc("0x7f"), "0x7f");
    assert_eq!(enc("h"), "0x68");
    assert_eq!(enc("0"), "0x30");
    assert_eq!(enc("1"), "0x31");
    assert_eq!(enc(1u64), "0x01");
    assert_eq!(enc(10u64), "0x0a");
    assert_eq!(enc(55u64), "0x37");
    assert_eq!(enc(56u64), "0x38");
    assert_eq!(enc("0x0a"), "0x0a");
    assert_eq!(enc("0x0A"), "0x0a");
    assert_eq!(enc("0x7F"), "0x7f");
}

// ---------------------------------------------------------------------------
// Empty values
// ---------------------------------------------------------------------------

#[test]
fn test_empty_values() {
    assert_eq!(enc("0x"), "0x80");
    assert_eq!(enc(""), "0x80");
    assert_eq!(enc(0u64), "0x80");
    assert_eq!(enc(false), "0x80");
    assert_eq!(enc(list(vec![])), "0xc0");
}

// ---------------------------------------------------------------------------
// Single bytes from 0x80 take a length prefix
// ---------------------------------------------------------------------------

#[test]
fn test_high_single_bytes() {
    assert_eq!(enc("0x80"), "0x8180");
    assert_eq!(enc("0x81"), "0x8181");
    assert_eq!(enc("0x82"), "0x8182");
    assert_eq!(enc("0xfe"), "0x81fe");
    assert_eq!(enc("0xff"), "0x81ff");
    assert_eq!(enc(128u64), "0x8180");
    assert_eq!(enc(1025u64), "0x820401");
}

// ---------------------------------------------------------------------------
// Strings of 2 to 55 bytes
// ---------------------------------------------------------------------------

#[test]
fn test_short_strings() {
    assert_eq!(enc("he"), "0x826865");
    assert_eq!(enc("hello world"), "0x8b68656c6c6f20776f726c64");
}

#[test]
fn test_addresses() {
    assert_eq!(enc(ADDR_1), "0x94fe3b557e8fb62b89f4916b721be55ceb828dbd73");
    assert_eq!(enc(ADDR_2), "0x947e5f4552091a69125d5dfcb7b8c2659029395bdf");
}

#[test]
fn test_55_byte_string() {
    assert_eq!(
        enc("0123456789abcdef0123456789abcdef0123456789abcdef0123456"),
        concat!(
            "0xb7",
            "3031323334353637",
            "3839616263646566",
            "3031323334353637",
            "3839616263646566",
            "3031323334353637",
            "3839616263646566",
            "30313233343536",
        )
    );
}

// ---------------------------------------------------------------------------
// Strings longer than 55 bytes
// ---------------------------------------------------------------------------

#[test]
fn test_56_byte_string() {
    assert_eq!(
        enc("0123456789abcdef0123456789abcdef0123456789abcdef01234567"),
        concat!(
            "0xb838",
            "3031323334353637",
            "3839616263646566",
            "3031323334353637",
            "3839616263646566",
            "3031323334353637",
            "3839616263646566",
            "3031323334353637",
        )
    );
}

#[test]
fn test_256_byte_string() {
    let text = "x".repeat(256);
    let out = enc(text.as_str());
    assert!(out.starts_with("0xb90100"));
    assert_eq!(out.len(), 2 + 2 * (3 + 256));
}

// ---------------------------------------------------------------------------
// Lists with payloads of 0 to 55 bytes
// ---------------------------------------------------------------------------

#[test]
fn test_short_lists() {
    assert_eq!(
        enc(list(vec!["hello".into(), "world".into()])),
        "0xcc8568656c6c6f85776f726c64"
    );
    assert_eq!(
        enc(list(vec![ADDR_1.into()])),
        "0xd594fe3b557e8fb62b89f4916b721be55ceb828dbd73"
    );
    assert_eq!(
        enc(list(vec![ADDR_1.into(), "hello".into(), "world".into()])),
        concat!(
            "0xe1",
            "94fe3b557e8fb62b89f4916b721be55ceb828dbd73",
            "8568656c6c6f",
            "85776f726c64",
        )
    );
    assert_eq!(
        enc(list(vec![ADDR_1.into(), ADDR_2.into()])),
        concat!(
            "0xea",
            "94fe3b557e8fb62b89f4916b721be55ceb828dbd73",
            "947e5f4552091a69125d5dfcb7b8c2659029395bdf",
        )
    );
}

#[test]
fn test_nested_lists() {
    assert_eq!(enc(list(vec![list(vec!["hello".into()])])), "0xc7c68568656c6c6f");
    assert_eq!(
        enc(list(vec![list(vec![list(vec!["hello".into()])])])),
        "0xc8c7c68568656c6c6f"
    );
    assert_eq!(
        enc(list(vec!["0x01".into(), list(vec![ADDR_1.into()])])),
        "0xd701d594fe3b557e8fb62b89f4916b721be55ceb828dbd73"
    );
}

// ---------------------------------------------------------------------------
// Lists with payloads longer than 55 bytes
// ---------------------------------------------------------------------------

#[test]
fn test_long_list() {
    assert_eq!(
        enc(list(vec![ADDR_1.into(), ADDR_2.into(), ADDR_3.into()])),
        concat!(
            "0xf83f",
            "94fe3b557e8fb62b89f4916b721be55ceb828dbd73",
            "947e5f4552091a69125d5dfcb7b8c2659029395bdf",
            "942b5ad5c4795c026514f8317c7a215e218dccd6cf",
        )
    );
}

// ---------------------------------------------------------------------------
// Booleans
// ---------------------------------------------------------------------------

#[test]
fn test_booleans() {
    assert_eq!(enc(true), "0x01");
    assert_eq!(enc(false), "0x80");
}

// ---------------------------------------------------------------------------
// JSON input path
// ---------------------------------------------------------------------------

#[test]
fn test_json_input_matches_typed_input() {
    let value = serde_json::json!([ADDR_1, "hello", 1025, true, []]);
    let from_json = RlpInput::from_json(&value).unwrap();
    let typed = list(vec![
        ADDR_1.into(),
        "hello".into(),
        1025u64.into(),
        true.into(),
        list(vec![]),
    ]);
    assert_eq!(encode(&from_json).unwrap(), encode(&typed).unwrap());
}

// ---------------------------------------------------------------------------
// Decoding the vectors back
// ---------------------------------------------------------------------------

#[test]
fn test_vectors_decode_to_normalized_values() {
    let cases: Vec<RlpInput> = vec![
        "0x00".into(),
        "0x80".into(),
        "hello world".into(),
        "0123456789abcdef0123456789abcdef0123456789abcdef01234567".into(),
        list(vec![ADDR_1.into(), ADDR_2.into(), ADDR_3.into()]),
        list(vec![list(vec![list(vec!["hello".into()])])]),
        list(vec![]),
    ];
    for input in cases {
        let hex = encode(&input).unwrap();
        let expected: RlpValue = input.normalize().unwrap();
        assert_eq!(decode_hex(&hex).unwrap(), expected, "vector {hex}");
    }
}
