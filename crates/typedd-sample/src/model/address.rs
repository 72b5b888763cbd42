//! Postal addresses: a compound value that is all-or-nothing.

use crate::error::{Field, UserError};
use std::fmt;
use typedd::Complete;

const MAX_POSTCODE_LEN: usize = 10;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct City(String);

impl City {
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(UserError::parse(Field::Address, "city is required"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Complete for City {
    fn is_complete(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Letters, digits, spaces and hyphens, at most ten characters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Postcode(String);

impl Postcode {
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(UserError::parse(Field::Address, "postcode is required"));
        }
        if raw.chars().count() > MAX_POSTCODE_LEN {
            return Err(UserError::parse(
                Field::Address,
                format!("postcode must be at most {MAX_POSTCODE_LEN} characters"),
            ));
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-') {
            return Err(UserError::parse(Field::Address, "postcode contains invalid characters"));
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Complete for Postcode {
    fn is_complete(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A city and a postcode. Complete only when both are; the zero address has
/// neither and means "no address".
#[derive(Debug, Default, Clone, PartialEq, Eq, Complete)]
pub struct PostalAddress {
    city: City,
    postcode: Postcode,
}

impl PostalAddress {
    /// Either half may be the zero value; completeness is checked where the
    /// address crosses a boundary, not here.
    pub fn new(city: City, postcode: Postcode) -> Self {
        Self { city, postcode }
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn postcode(&self) -> &Postcode {
        &self.postcode
    }
}

impl fmt::Display for PostalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.postcode, self.city)
    }
}
