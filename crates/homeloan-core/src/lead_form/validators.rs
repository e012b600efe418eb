//! Pure per-field validators. Each returns the error message, or an empty
//! string when the value is acceptable. Rules are checked in order and the
//! first failure wins.

use super::phone::{strip_whitespace, E164Pattern, PhoneValidator};

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const NAME_HAS_DIGITS: &str = "Name cannot contain numbers";
pub const NAME_BAD_CHARS: &str = "Name can only contain letters and spaces";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const TERMS_REQUIRED: &str = "You must accept the terms and conditions";

const NAME_MIN_CHARS: usize = 2;

pub fn validate_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return NAME_REQUIRED.into();
    }
    if trimmed.chars().count() < NAME_MIN_CHARS {
        return NAME_TOO_SHORT.into();
    }
    if name.chars().any(|c| c.is_ascii_digit()) {
        return NAME_HAS_DIGITS.into();
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return NAME_BAD_CHARS.into();
    }
    String::new()
}

/// Phone check with the default E.164 policy.
pub fn validate_phone(phone: &str) -> String {
    validate_phone_with(phone, &E164Pattern::default())
}

pub fn validate_phone_with(phone: &str, policy: &impl PhoneValidator) -> String {
    if phone.trim().is_empty() {
        return PHONE_REQUIRED.into();
    }
    if !policy.is_valid(&strip_whitespace(phone)) {
        return PHONE_INVALID.into();
    }
    String::new()
}

/// `label` is the human-readable field name used in the message.
pub fn validate_select(value: &str, label: &str) -> String {
    if value.is_empty() {
        return format!("{label} is required");
    }
    String::new()
}

pub fn validate_terms(accepted: bool) -> String {
    if !accepted {
        return TERMS_REQUIRED.into();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules_in_order() {
        assert_eq!(validate_name(""), "Name is required");
        assert_eq!(validate_name("   "), "Name is required");
        assert_eq!(validate_name("A"), "Name must be at least 2 characters");
        assert_eq!(validate_name(" A "), "Name must be at least 2 characters");
        assert_eq!(validate_name("John2"), "Name cannot contain numbers");
        assert_eq!(validate_name("John_Doe"), "Name can only contain letters and spaces");
        assert_eq!(validate_name("John Doe"), "");
    }

    #[test]
    fn test_name_digit_rule_beats_character_rule() {
        assert_eq!(validate_name("J0hn_"), NAME_HAS_DIGITS);
    }

    #[test]
    fn test_name_rejects_non_ascii_letters() {
        assert_eq!(validate_name("José"), NAME_BAD_CHARS);
    }

    #[test]
    fn test_phone_table() {
        assert_eq!(validate_phone(""), PHONE_REQUIRED);
        assert_eq!(validate_phone("  "), PHONE_REQUIRED);
        assert_eq!(validate_phone("12345"), PHONE_INVALID);
        assert_eq!(validate_phone("+919876543210"), "");
        assert_eq!(validate_phone("+91 98765 43210"), "");
    }

    #[test]
    fn test_phone_with_custom_policy() {
        struct AlwaysValid;
        impl PhoneValidator for AlwaysValid {
            fn is_valid(&self, _number: &str) -> bool {
                true
            }
        }
        assert_eq!(validate_phone_with("12345", &AlwaysValid), "");
        assert_eq!(validate_phone_with("", &AlwaysValid), PHONE_REQUIRED);
    }

    #[test]
    fn test_select_and_terms() {
        assert_eq!(validate_select("", "Property Location"), "Property Location is required");
        assert_eq!(validate_select("Mumbai", "Property Location"), "");
        assert_eq!(validate_terms(false), TERMS_REQUIRED);
        assert_eq!(validate_terms(true), "");
    }
}
