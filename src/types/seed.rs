//! Identity seeds.
//!
//! A seed is an opaque string. Profiles mint theirs once, at creation, from
//! the username and the creation time in milliseconds; after that it never
//! changes.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::sequence::SeededSequence;

use super::Pattern;

/// An opaque seed string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    /// Wrap an existing seed string.
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    /// Mint the seed for a profile created at `created_at_millis`.
    pub fn for_profile(username: &str, created_at_millis: u128) -> Self {
        Self(format!("{}-{}", username, created_at_millis))
    }

    /// Mint a seed for a profile created now.
    pub fn now(username: &str) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self::for_profile(username, millis)
    }

    /// The seed text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generate this seed's pattern.
    pub fn pattern(&self) -> Pattern {
        Pattern::generate(&self.0)
    }

    /// A filesystem-safe name derived from the seed.
    ///
    /// Keeps ASCII alphanumerics, `-` and `_`. When anything else had to be
    /// replaced with `_`, the seed's folded state is appended in hex so
    /// distinct seeds keep distinct names. The empty seed maps to `"empty"`.
    pub fn slug(&self) -> String {
        if self.0.is_empty() {
            return "empty".to_string();
        }

        let safe = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
        let slug: String = self
            .0
            .chars()
            .map(|c| if safe(c) { c } else { '_' })
            .collect();

        if self.0.chars().all(safe) {
            slug
        } else {
            format!("{}-{:08x}", slug, SeededSequence::new(&self.0).state())
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Seed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Self(s)
    }
}
