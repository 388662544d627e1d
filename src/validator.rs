//! Order form validation.
//!
//! Three checks run in a fixed order and stop at the first failure:
//! required fields, email shape, contact-number shape.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::catalog::GameType;
use crate::config::{DEFAULT_CONTACT_MAX_DIGITS, DEFAULT_CONTACT_MIN_DIGITS, DEFAULT_CONTACT_PREFIXES};
use crate::error::{ConfigError, OrderError};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Raw values of the order form, exactly as typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderInput {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub server_name: String,
    pub game_type: String,
    pub notes: String,
}

/// An order that passed validation; values are trimmed and optional fields resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOrder {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub server_name: Option<String>,
    pub game: Option<GameType>,
    pub notes: Option<String>,
}

/// Accepted shape of a contact number: one of `prefixes` followed by
/// `min_digits..=max_digits` digits, after whitespace is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRule {
    pub prefixes: Vec<String>,
    pub min_digits: usize,
    pub max_digits: usize,
}

impl Default for ContactRule {
    /// Indonesian mobile numbers: `+62`, `62` or `0`, then 9 to 13 digits.
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_CONTACT_PREFIXES.split(',').map(str::to_string).collect(),
            min_digits: DEFAULT_CONTACT_MIN_DIGITS,
            max_digits: DEFAULT_CONTACT_MAX_DIGITS,
        }
    }
}

impl ContactRule {
    pub fn compile(&self) -> Result<Regex, ConfigError> {
        let prefixes: Vec<String> = self
            .prefixes
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(regex::escape)
            .collect();
        if prefixes.is_empty() {
            return Err(ConfigError::NoContactPrefixes);
        }
        if self.min_digits == 0 || self.min_digits > self.max_digits {
            return Err(ConfigError::InvalidDigitRange {
                min: self.min_digits,
                max: self.max_digits,
            });
        }
        let pattern = format!(
            "^(?:{})[0-9]{{{},{}}}$",
            prefixes.join("|"),
            self.min_digits,
            self.max_digits
        );
        Ok(Regex::new(&pattern)?)
    }
}

pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

fn optional(value: &str) -> Option<String> {
    let t = value.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Validator {
    contact: Regex,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&ContactRule::default()).expect("default contact rule compiles")
    }
}

impl Validator {
    pub fn new(rule: &ContactRule) -> Result<Self, ConfigError> {
        Ok(Self {
            contact: rule.compile()?,
        })
    }

    pub fn is_valid_contact(&self, value: &str) -> bool {
        self.contact.is_match(&strip_whitespace(value))
    }

    pub fn validate(&self, input: &OrderInput) -> Result<ValidOrder, OrderError> {
        if !is_filled(&input.name) || !is_filled(&input.email) || !is_filled(&input.contact) {
            return Err(OrderError::MissingRequiredField);
        }
        if !is_valid_email(&input.email) {
            return Err(OrderError::InvalidEmailFormat);
        }
        if !self.is_valid_contact(&input.contact) {
            return Err(OrderError::InvalidPhoneFormat);
        }
        Ok(ValidOrder {
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            contact: input.contact.trim().to_string(),
            server_name: optional(&input.server_name),
            game: GameType::parse(&input.game_type),
            notes: optional(&input.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, contact: &str) -> OrderInput {
        OrderInput {
            name: name.into(),
            email: email.into(),
            contact: contact.into(),
            ..Default::default()
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("budi@mail.com"));
        assert!(!is_valid_email("notanemail"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn contact_shapes() {
        let v = Validator::default();
        assert!(v.is_valid_contact("081234567890"));
        assert!(v.is_valid_contact("+6281234567890"));
        assert!(v.is_valid_contact("6281234567890"));
        assert!(v.is_valid_contact("0812 3456 7890"));
        assert!(!v.is_valid_contact("12345"));
        assert!(!v.is_valid_contact("abcdefghijk"));
        assert!(!v.is_valid_contact("0812-3456-7890"));
        assert!(!v.is_valid_contact("0812345678901234"));
    }

    #[test]
    fn blank_required_fields_are_rejected_first() {
        let v = Validator::default();
        for case in [
            input("", "x@y.com", "081234567890"),
            input("Budi", "   ", "081234567890"),
            input("Budi", "x@y.com", "\t"),
            // an invalid email does not matter while a field is still missing
            input("   ", "nope", "1"),
        ] {
            assert_eq!(v.validate(&case), Err(OrderError::MissingRequiredField));
        }
    }

    #[test]
    fn email_is_checked_before_contact() {
        let v = Validator::default();
        assert_eq!(
            v.validate(&input("Budi", "budi", "12")),
            Err(OrderError::InvalidEmailFormat)
        );
        assert_eq!(
            v.validate(&input("Budi", "budi@mail.com", "12")),
            Err(OrderError::InvalidPhoneFormat)
        );
    }

    #[test]
    fn valid_order_is_trimmed_and_optionals_resolved() {
        let v = Validator::default();
        let mut raw = input("  Budi ", " budi@mail.com ", " 081234567890 ");
        raw.server_name = "   ".into();
        raw.game_type = "minecraft".into();
        raw.notes = " butuh cepat ".into();
        let order = v.validate(&raw).unwrap();
        assert_eq!(order.name, "Budi");
        assert_eq!(order.email, "budi@mail.com");
        assert_eq!(order.contact, "081234567890");
        assert_eq!(order.server_name, None);
        assert_eq!(order.game, Some(GameType::Minecraft));
        assert_eq!(order.notes.as_deref(), Some("butuh cepat"));
    }

    #[test]
    fn custom_contact_rule() {
        let rule = ContactRule {
            prefixes: vec!["+1".into()],
            min_digits: 10,
            max_digits: 10,
        };
        let v = Validator::new(&rule).unwrap();
        assert!(v.is_valid_contact("+1 555 123 4567"));
        assert!(!v.is_valid_contact("081234567890"));
    }

    #[test]
    fn broken_contact_rules_are_reported() {
        let empty = ContactRule {
            prefixes: vec![" ".into()],
            ..ContactRule::default()
        };
        assert!(matches!(empty.compile(), Err(ConfigError::NoContactPrefixes)));
        let inverted = ContactRule {
            min_digits: 10,
            max_digits: 3,
            ..ContactRule::default()
        };
        assert!(matches!(
            inverted.compile(),
            Err(ConfigError::InvalidDigitRange { min: 10, max: 3 })
        ));
    }
}
