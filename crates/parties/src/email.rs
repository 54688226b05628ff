//! Email address value object.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use ordering_core::{DomainError, DomainResult, ValueObject};

// Lowercase ASCII only; uppercase addresses are rejected rather than normalized.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9_.-]{3,})@([0-9a-z.-]{3,})\.([a-z.]{2,6})$")
        .expect("email pattern is a valid regex")
});

/// A validated email address, stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and wrap an address.
    ///
    /// Fails with `InvalidArgument` when the input is blank or does not look
    /// like `local@domain.tld`.
    pub fn new(address: impl Into<String>) -> DomainResult<Self> {
        let address = address.into();

        if address.trim().is_empty() {
            return Err(DomainError::invalid_argument("email is required"));
        }

        if !EMAIL_PATTERN.is_match(&address) {
            return Err(DomainError::invalid_argument(format!(
                "email is not valid: {address}"
            )));
        }

        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl core::str::FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
