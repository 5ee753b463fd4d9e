//! Contact-record format rules.

use crate::entity::Customer;
use relq_core::query::predicate::{does_not_match, is_blank, is_present};
use relq_core::{Predicate, Result};
use regex::Regex;

/// Format rules for customer contact fields.
///
/// A record is malformed when any of these holds:
/// - the postal code is present and does not match the postal pattern
/// - the region is blank
/// - the phone is present and does not start with the phone pattern
#[derive(Debug, Clone)]
pub struct ContactRules {
    postal: Regex,
    phone: Regex,
}

impl ContactRules {
    /// Digits, optionally followed by a dash and more digits.
    pub const DEFAULT_POSTAL_PATTERN: &'static str = r"^\d+(-\d+)?$";
    /// A parenthesized numeric area code at the start.
    pub const DEFAULT_PHONE_PATTERN: &'static str = r"^\(\d+\)";

    /// Compile both patterns. An invalid pattern is an `Error::Pattern`.
    pub fn new(postal_pattern: &str, phone_pattern: &str) -> Result<Self> {
        Ok(Self {
            postal: Regex::new(postal_pattern)?,
            phone: Regex::new(phone_pattern)?,
        })
    }

    /// Rules built from the default patterns.
    pub fn with_defaults() -> Result<Self> {
        Self::new(Self::DEFAULT_POSTAL_PATTERN, Self::DEFAULT_PHONE_PATTERN)
    }

    /// Postal code present but not in the expected format.
    pub fn malformed_postal_code(&self) -> Predicate<Customer> {
        is_present(Customer::postal_code)
            .and(does_not_match(Customer::postal_code, self.postal.clone()))
    }

    /// Region missing or empty.
    pub fn missing_region(&self) -> Predicate<Customer> {
        is_blank(Customer::region)
    }

    /// Phone present but without the expected prefix.
    pub fn malformed_phone(&self) -> Predicate<Customer> {
        is_present(Customer::phone).and(does_not_match(Customer::phone, self.phone.clone()))
    }

    /// Any of the three rules.
    pub fn malformed_contact(&self) -> Predicate<Customer> {
        Predicate::any_of([
            self.malformed_postal_code(),
            self.missing_region(),
            self.malformed_phone(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relq_core::{AsQuery, Error};

    fn customer(
        id: &str,
        region: Option<&str>,
        postal: Option<&str>,
        phone: Option<&str>,
    ) -> Customer {
        let mut c = Customer::new(id, id, "USA", "Eugene");
        c.region = region.map(String::from);
        c.postal_code = postal.map(String::from);
        c.phone = phone.map(String::from);
        c
    }

    fn flagged(rules: &Predicate<Customer>, customers: &[Customer]) -> Vec<String> {
        customers
            .query()
            .filter_by(rules)
            .map(|c| c.id.clone())
            .to_vec()
    }

    #[test]
    fn test_each_clause_flags_independently() {
        let rules = ContactRules::with_defaults().unwrap();
        let customers = vec![
            customer("ok", Some("OR"), Some("97403"), Some("(503) 555-7555")),
            customer("zip", Some("OR"), Some("OR 97827"), Some("(503) 555-6874")),
            customer("region", None, Some("12209"), None),
            customer("empty_region", Some(""), None, None),
            customer("phone", Some("WA"), Some("99362"), Some("509-555-7969")),
            customer("dash_zip", Some("WY"), Some("82520-1234"), Some("(307) 555-4680")),
        ];

        assert_eq!(flagged(&rules.malformed_postal_code(), &customers), ["zip"]);
        assert_eq!(
            flagged(&rules.missing_region(), &customers),
            ["region", "empty_region"]
        );
        assert_eq!(flagged(&rules.malformed_phone(), &customers), ["phone"]);
        assert_eq!(
            flagged(&rules.malformed_contact(), &customers),
            ["zip", "region", "empty_region", "phone"]
        );
    }

    #[test]
    fn test_absent_fields_are_not_malformed() {
        let rules = ContactRules::with_defaults().unwrap();
        let bare = customer("bare", Some("OR"), None, None);
        assert!(!rules.malformed_contact().test(&bare));
    }

    #[test]
    fn test_custom_patterns() {
        let rules = ContactRules::new(r"^[A-Z0-9 ]+$", r"^\+").unwrap();
        let uk = customer("uk", Some("Essex"), Some("WA1 1DP"), Some("+44 171 555"));
        assert!(!rules.malformed_contact().test(&uk));
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        assert!(matches!(
            ContactRules::new("(", ContactRules::DEFAULT_PHONE_PATTERN),
            Err(Error::Pattern(_))
        ));
    }
}
