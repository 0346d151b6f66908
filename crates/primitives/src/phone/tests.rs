use proptest::prelude::*;

use super::*;

#[test]
fn test_accepts_digits() {
	let n = PhoneNumber::new("48123456789").unwrap();
	assert_eq!(n.as_str(), "48123456789");
	assert_eq!(n.len(), 11);
	assert!(!n.is_empty());
	assert_eq!(n.to_string(), "48123456789");
}

#[test]
fn test_rejects_empty() {
	assert_eq!(PhoneNumber::new(""), Err(PhoneNumberError::Empty));
}

#[test]
fn test_rejects_non_digits() {
	assert_eq!(
		PhoneNumber::new("12a4"),
		Err(PhoneNumberError::InvalidChar { index: 2, ch: 'a' })
	);
	assert_eq!(
		PhoneNumber::new("+48"),
		Err(PhoneNumberError::InvalidChar { index: 0, ch: '+' })
	);
	assert_eq!(
		PhoneNumber::new("12 3"),
		Err(PhoneNumberError::InvalidChar { index: 2, ch: ' ' })
	);
}

#[test]
fn test_rejects_embedded_nul() {
	assert_eq!(
		PhoneNumber::new("12\03"),
		Err(PhoneNumberError::InvalidChar { index: 2, ch: '\0' })
	);
}

#[test]
fn test_rejects_unicode_digits() {
	// Arabic-Indic digit one.
	assert!(matches!(
		PhoneNumber::new("1\u{0661}"),
		Err(PhoneNumberError::InvalidChar { index: 1, .. })
	));
}

#[test]
fn test_length_bound() {
	let max = "9".repeat(TEL_NUM_MAX_LEN);
	assert!(PhoneNumber::new(max.as_str()).is_ok());

	let over = "9".repeat(TEL_NUM_MAX_LEN + 1);
	assert_eq!(
		PhoneNumber::new(over),
		Err(PhoneNumberError::TooLong {
			len: TEL_NUM_MAX_LEN + 1,
			max: TEL_NUM_MAX_LEN,
		})
	);
}

#[test]
fn test_serde_validates() {
	let n: PhoneNumber = serde_json::from_str("\"112\"").unwrap();
	assert_eq!(n, "112");
	assert_eq!(serde_json::to_string(&n).unwrap(), "\"112\"");
	assert!(serde_json::from_str::<PhoneNumber>("\"11x\"").is_err());
	assert!(serde_json::from_str::<PhoneNumber>("\"\"").is_err());
}

proptest! {
	#[test]
	fn prop_digit_strings_within_bound_are_valid(s in "[0-9]{1,22}") {
		let n = PhoneNumber::new(s.as_str()).unwrap();
		prop_assert_eq!(n.as_str(), s.as_str());
	}

	#[test]
	fn prop_any_non_digit_is_rejected(prefix in "[0-9]{0,10}", bad in "[^0-9]", suffix in "[0-9]{0,10}") {
		let input = format!("{prefix}{bad}{suffix}");
		let is_invalid_char = matches!(
			PhoneNumber::new(input),
			Err(PhoneNumberError::InvalidChar { .. })
		);
		prop_assert!(is_invalid_char);
	}
}
