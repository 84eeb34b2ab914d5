use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::Error;

/// A library version in `MAJOR.MINOR.PATCH` form.
///
/// Deserializes from a string such as `"0.0.1"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Digits only: u32's parser would also take a leading '+'
        let numbers: Vec<u32> = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                part.parse().ok()
            })
            .collect::<Option<_>>()
            .ok_or_else(|| Error::invalid_version(s))?;

        match numbers[..] {
            [major, minor, patch] => Ok(Self::new(major, minor, patch)),
            _ => Err(Error::invalid_version(s)),
        }
    }
}

impl TryFrom<String> for Version {
    type Error = Box<Error>;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
