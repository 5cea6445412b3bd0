use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Maximum handle length in characters.
pub const MAX_HANDLE_LEN: usize = 30;

/// A validated user handle.
///
/// Handles are unique per identity, case-sensitive, and immutable after
/// signup. Valid handles are 1 to [`MAX_HANDLE_LEN`] characters drawn from
/// ASCII letters, digits, and underscore.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Handle(String);

impl Handle {
    /// Parse and validate a handle.
    pub fn parse(s: impl Into<String>) -> Result<Self, TypeError> {
        let s = s.into();
        if s.is_empty() {
            return Err(TypeError::EmptyHandle);
        }
        if s.chars().count() > MAX_HANDLE_LEN {
            return Err(TypeError::HandleTooLong {
                len: s.chars().count(),
                max: MAX_HANDLE_LEN,
            });
        }
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(TypeError::InvalidHandleChar(bad));
        }
        Ok(Self(s))
    }

    /// The handle as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Handle {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle(@{})", self.0)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
