// tests/serde_tests.rs

// Only compile and run these tests if the "serde" feature is enabled.
#![cfg(feature = "serde")]

use hexcamp_h3::*;

#[test]
fn test_h3index_serde() {
  let h = H3Index(0x8928308280fffff);
  let serialized = serde_json::to_string(&h).unwrap();
  // H3Index is repr(transparent) over u64, so it serializes as its inner u64 value directly.
  assert_eq!(serialized, "617700169958293503");
  let deserialized: H3Index = serde_json::from_str(&serialized).unwrap();
  assert_eq!(h, deserialized);
}

#[test]
fn test_split_index_serde() {
  let split = SplitIndex::new(0x0892_8308, 0x280f_ffff);
  let serialized = serde_json::to_string(&split).unwrap();
  assert_eq!(serialized, r#"{"upper":143819528,"lower":672137215}"#);
  let deserialized: SplitIndex = serde_json::from_str(&serialized).unwrap();
  assert_eq!(split, deserialized);
}

#[test]
fn test_direction_serde() {
  let dir = Direction::KAxes; // This has repr(u8) and value 1
  let serialized = serde_json::to_string(&dir).unwrap();
  assert_eq!(serialized, "1"); // serde_repr serializes to the number
  let deserialized: Direction = serde_json::from_str(&serialized).unwrap();
  assert_eq!(dir, deserialized);

  // 7 is not a digit
  assert!(serde_json::from_str::<Direction>("7").is_err());
}

#[test]
fn test_digit_sequence_serde() {
  let digits = extract_digits(SplitIndex::from(H3Index(0x85283473fffffff)), 5).unwrap();
  assert_eq!(serde_json::to_string(&digits).unwrap(), "[0,6,4,3,4]");
}

#[test]
fn test_error_kind_serde() {
  assert_eq!(serde_json::to_string(&ErrorKind::Domain).unwrap(), "1");
  assert_eq!(serde_json::to_string(&ErrorKind::Format).unwrap(), "2");
  let kind: ErrorKind = serde_json::from_str("2").unwrap();
  assert_eq!(kind, ErrorKind::Format);
}
