use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Title and body for a tracker issue. Body may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInformation {
    pub title: String,
    pub body: String,
}

impl TaskInformation {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A tracker issue identified by its display number, rendered `#<number>`.
///
/// Construction validates the `#<positive integer>` shape, so a reference
/// that exists is always usable in an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskReference(u64);

impl TaskReference {
    /// Parse a `#<number>` string. Rejects a missing `#` prefix, empty or
    /// non-digit suffixes, sign characters, and zero.
    pub fn parse(raw: &str) -> Result<Self, TrackerError> {
        let malformed = || TrackerError::MalformedReference(raw.to_string());
        let digits = raw.strip_prefix('#').ok_or_else(malformed)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let number: u64 = digits.parse().map_err(|_| malformed())?;
        if number == 0 {
            return Err(malformed());
        }
        Ok(Self(number))
    }

    /// Wrap an issue number already known to be assigned by the tracker.
    /// Fails on zero, which GitHub never assigns.
    pub fn from_number(number: u64) -> Result<Self, TrackerError> {
        if number == 0 {
            return Err(TrackerError::MalformedReference("#0".to_string()));
        }
        Ok(Self(number))
    }

    pub fn number(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for TaskReference {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
