//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{6,14}$").unwrap()
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Normalize a phone number and ensure it carries a leading `+`.
///
/// Idempotent: feeding the output back in yields the same value, so
/// `966500000000` and `+966500000000` both become `+966500000000`.
pub fn ensure_plus_prefix(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.starts_with('+') {
        normalized
    } else {
        format!("+{}", normalized)
    }
}

/// Check if a phone number is valid (international E.164 format)
pub fn is_valid_international_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    INTERNATIONAL_PHONE_REGEX.is_match(&normalized)
}

/// Mask a phone number for display and logs (e.g. +96****0000)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("050-123-4567"), "0501234567");
        assert_eq!(normalize_phone_number("+966 50 123 4567"), "+966501234567");
        assert_eq!(normalize_phone_number("(966) 5012-34567"), "966501234567");
    }

    #[test]
    fn test_ensure_plus_prefix() {
        assert_eq!(ensure_plus_prefix("966500000000"), "+966500000000");
        assert_eq!(ensure_plus_prefix("+966500000000"), "+966500000000");
        assert_eq!(ensure_plus_prefix("966 50 000 0000"), "+966500000000");
    }

    #[test]
    fn test_ensure_plus_prefix_idempotent() {
        let once = ensure_plus_prefix("966500000000");
        let twice = ensure_plus_prefix(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "+966500000000");
    }

    #[test]
    fn test_is_valid_international_phone() {
        assert!(is_valid_international_phone("+966500000000"));
        assert!(is_valid_international_phone("+14155552671"));
        assert!(is_valid_international_phone("+442071838750"));
        assert!(!is_valid_international_phone("966500000000")); // Missing +
        assert!(!is_valid_international_phone("+0123456789")); // Invalid country code
        assert!(!is_valid_international_phone("+1234")); // Too short
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+966500001234"), "+96****1234");
        assert_eq!(mask_phone_number("0501234567"), "050****4567");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
