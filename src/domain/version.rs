use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Interpreter version as reported by `<interpreter> --version`.
///
/// Support checks only consider `major.minor`; the patch level never decides
/// whether a runtime is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl RuntimeVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor, patch: None }
    }

    /// Parse a bare version such as `3.10` or `3.12.1`.
    ///
    /// Pre-release suffixes on the last segment (`3.13.0rc1`) are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.trim().split('.');

        let major = parts.next()?.parse().ok()?;
        let minor = leading_number(parts.next()?)?;
        let patch = match parts.next() {
            Some(segment) => Some(leading_number(segment)?),
            None => None,
        };

        if parts.next().is_some() {
            return None;
        }

        Some(Self { major, minor, patch })
    }

    /// Extract the version from interpreter output such as `Python 3.11.4`.
    pub fn from_version_output(output: &str) -> Result<Self, AppError> {
        output
            .split_whitespace()
            .find_map(Self::parse)
            .ok_or_else(|| AppError::RuntimeVersionParse(output.trim().to_string()))
    }

    /// Whether this version meets `minimum` on `major.minor`.
    pub fn satisfies(&self, minimum: &RuntimeVersion) -> bool {
        self.compare_release(minimum) != Ordering::Less
    }

    /// Compare on `major.minor` only.
    pub fn compare_release(&self, other: &RuntimeVersion) -> Ordering {
        (self.major, self.minor).cmp(&(other.major, other.minor))
    }
}

fn leading_number(segment: &str) -> Option<u32> {
    let digits: String = segment.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for RuntimeVersion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AppError::RuntimeVersionParse(s.to_string()))
    }
}

impl TryFrom<String> for RuntimeVersion {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuntimeVersion> for String {
    fn from(value: RuntimeVersion) -> Self {
        value.to_string()
    }
}
