//! Password-pair rule.
//!
//! Conditions are checked in a fixed order and the first failure wins.

use intake_ingest::FormSnapshot;
use intake_model::{FieldName, ValidationOutcome};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 30;

/// Characters that satisfy the special-character requirement.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_+=\\/><.,`~";

pub const HAS_QUOTE: &str = "must not contain a double quote";
pub const BAD_LENGTH: &str = "must be 8 to 30 characters";
pub const MISSING_CLASSES: &str =
    "must include an uppercase letter, a lowercase letter, a digit, and a special character";
pub const MISMATCH: &str = "passwords do not match";

/// The password pair plus the identity fields it must not contain.
#[derive(Debug, Clone, Copy)]
pub struct PasswordInput<'a> {
    pub password: &'a str,
    pub confirmation: &'a str,
    pub user_id: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

impl<'a> PasswordInput<'a> {
    pub fn from_snapshot(snapshot: &'a FormSnapshot) -> Self {
        Self {
            password: &snapshot.password,
            confirmation: &snapshot.password_confirm,
            user_id: &snapshot.user_id,
            first_name: &snapshot.first_name,
            last_name: &snapshot.last_name,
        }
    }
}

pub fn check_password_pair(input: &PasswordInput<'_>) -> Result<(), String> {
    let password = input.password;
    if password.contains('"') {
        return Err(HAS_QUOTE.to_string());
    }

    let length = password.chars().count();
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(BAD_LENGTH.to_string());
    }

    let has_upper = password.chars().any(|ch| ch.is_ascii_uppercase());
    let has_lower = password.chars().any(|ch| ch.is_ascii_lowercase());
    let has_digit = password.chars().any(|ch| ch.is_ascii_digit());
    let has_special = password.chars().any(|ch| SPECIAL_CHARACTERS.contains(ch));
    if !(has_upper && has_lower && has_digit && has_special) {
        return Err(MISSING_CLASSES.to_string());
    }

    let lowered = password.to_lowercase();
    let identities = [
        ("user id", input.user_id),
        ("first name", input.first_name),
        ("last name", input.last_name),
    ];
    for (label, identity) in identities {
        let identity = identity.trim();
        if !identity.is_empty() && lowered.contains(&identity.to_lowercase()) {
            return Err(format!("must not contain your {label}"));
        }
    }

    if password != input.confirmation {
        return Err(MISMATCH.to_string());
    }
    Ok(())
}

pub fn validate_password_pair(input: &PasswordInput<'_>) -> ValidationOutcome {
    ValidationOutcome::from_check(FieldName::Password, check_password_pair(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(password: &'a str, confirmation: &'a str) -> PasswordInput<'a> {
        PasswordInput {
            password,
            confirmation,
            user_id: "jdoe77",
            first_name: "Jane",
            last_name: "Doe",
        }
    }

    fn check(password: &str) -> Result<(), String> {
        check_password_pair(&input(password, password))
    }

    #[test]
    fn accepts_a_strong_matching_pair() {
        assert_eq!(check("Abcd123!"), Ok(()));
        assert_eq!(check("Zebra~Crossing42"), Ok(()));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert_eq!(check("Abc123!"), Err(BAD_LENGTH.to_string()));
        assert_eq!(check("Abc1234!"), Ok(()));
        let thirty = format!("Ab1!{}", "x".repeat(26));
        assert_eq!(check(&thirty), Ok(()));
        let thirty_one = format!("Ab1!{}", "x".repeat(27));
        assert_eq!(check(&thirty_one), Err(BAD_LENGTH.to_string()));
    }

    #[test]
    fn double_quote_wins_over_everything() {
        assert_eq!(check("Abcd123!\""), Err(HAS_QUOTE.to_string()));
        assert_eq!(check("\""), Err(HAS_QUOTE.to_string()));
    }

    #[test]
    fn each_character_class_is_needed() {
        assert_eq!(check("abcd123!"), Err(MISSING_CLASSES.to_string()));
        assert_eq!(check("ABCD123!"), Err(MISSING_CLASSES.to_string()));
        assert_eq!(check("Abcdefg!"), Err(MISSING_CLASSES.to_string()));
        assert_eq!(check("Abcd1234"), Err(MISSING_CLASSES.to_string()));
        assert_eq!(check("Abcd123?"), Err(MISSING_CLASSES.to_string()));
    }

    #[test]
    fn identity_substrings_are_rejected_case_insensitively() {
        assert_eq!(
            check("xJANE12!"),
            Err("must not contain your first name".to_string())
        );
        assert_eq!(
            check("My#Doe123"),
            Err("must not contain your last name".to_string())
        );
        assert_eq!(
            check("JDOE77abc!"),
            Err("must not contain your user id".to_string())
        );
    }

    #[test]
    fn blank_identity_fields_are_skipped() {
        let pair = PasswordInput {
            password: "Abcd123!",
            confirmation: "Abcd123!",
            user_id: "",
            first_name: " ",
            last_name: "",
        };
        assert_eq!(check_password_pair(&pair), Ok(()));
    }

    #[test]
    fn confirmation_must_match() {
        assert_eq!(
            check_password_pair(&input("Abcd123!", "Abcd123?")),
            Err(MISMATCH.to_string())
        );
    }
}
