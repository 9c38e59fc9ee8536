//! Validated personal names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithms::normalize::trimmed_name;

/// Errors raised when constructing a [`Name`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is empty or contains only whitespace")]
    Empty,
}

/// A personal name: non-empty after trimming surrounding whitespace.
///
/// The stored value is the trimmed input; casing is preserved for display,
/// encoding is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Parse a raw name.
    ///
    /// # Examples
    /// ```
    /// use namesake::Name;
    ///
    /// let name = Name::parse("  Ahmad ").unwrap();
    /// assert_eq!(name.as_str(), "Ahmad");
    /// assert!(Name::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        trimmed_name(raw)
            .map(|name| Self(name.to_string()))
            .ok_or(NameError::Empty)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Name {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        // Reuse the allocation when nothing needs trimming
        if !value.is_empty() && value.trim().len() == value.len() {
            Ok(Self(value))
        } else {
            Self::parse(&value)
        }
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let name = Name::parse("\t Mohammed  ").unwrap();
        assert_eq!(name.as_str(), "Mohammed");
        assert_eq!(name.to_string(), "Mohammed");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(Name::parse(""), Err(NameError::Empty));
        assert_eq!(Name::parse("  \n "), Err(NameError::Empty));
    }

    #[test]
    fn test_try_from_string() {
        assert_eq!(Name::try_from("Reid".to_string()).unwrap().as_str(), "Reid");
        assert_eq!(Name::try_from(" Reid ".to_string()).unwrap().as_str(), "Reid");
        assert!(Name::try_from(String::new()).is_err());
    }

    #[test]
    fn test_from_str() {
        let name: Name = "Clark".parse().unwrap();
        assert_eq!(name.as_ref(), "Clark");
        assert!("".parse::<Name>().is_err());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            NameError::Empty.to_string(),
            "name is empty or contains only whitespace"
        );
    }
}
