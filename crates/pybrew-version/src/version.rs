//! The parsed release version value

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::version_parser::{self, ParseError};

/// A parsed `<major>.<minor>[.<patch>][-suffix]` version.
///
/// Values are only created by parsing and never change afterwards.
/// Equality, hashing and ordering look at `(major, minor, patch)` with a
/// missing patch counted as `0`; the suffix is ignored, so `1.2`, `1.2.0`
/// and `1.2.0rc1` are all equal while still rendering differently.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: Option<u64>,
    suffix: String,
}

impl Version {
    pub(crate) fn new(major: u64, minor: u64, patch: Option<u64>, suffix: String) -> Self {
        Self {
            major,
            minor,
            patch,
            suffix,
        }
    }

    /// Parse a version string such as `3.11`, `3.11.4`, `3.12.0rc1` or `2.7.18-dev`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        version_parser::parse(input)
    }

    /// Parse a version literal that is known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `literal` does not parse. Only pass strings written in the
    /// source code; anything coming from users, files or the network must go
    /// through [`Version::parse`].
    pub fn from_literal(literal: &str) -> Self {
        match Self::parse(literal) {
            Ok(version) => version,
            Err(err) => panic!("invalid version literal: {}", err),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch number, `None` when the version only had two segments
    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    /// Tag text kept verbatim from parsing, e.g. `rc1` or `-beta`
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Patch number used for ordering
    pub fn effective_patch(&self) -> u64 {
        self.patch.unwrap_or(0)
    }

    fn key(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.effective_patch())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        f.write_str(&self.suffix)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_accessors() {
        let v = Version::parse("3.12.1rc2-dev").unwrap();
        assert_eq!(v.major(), 3);
        assert_eq!(v.minor(), 12);
        assert_eq!(v.patch(), Some(1));
        assert_eq!(v.suffix(), "rc2-dev");
        assert_eq!(v.effective_patch(), 1);

        let v = Version::parse("3.12").unwrap();
        assert_eq!(v.patch(), None);
        assert_eq!(v.effective_patch(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::parse("1.2").unwrap().to_string(), "1.2");
        assert_eq!(Version::parse("1.2.0").unwrap().to_string(), "1.2.0");
        assert_eq!(Version::parse("1.2.3-beta").unwrap().to_string(), "1.2.3-beta");
        assert_eq!(Version::parse("1.2.3rc1").unwrap().to_string(), "1.2.3rc1");
        assert_eq!(Version::parse("1.2.3rc1-beta").unwrap().to_string(), "1.2.3rc1-beta");
        assert_eq!(Version::parse("1.2-dev").unwrap().to_string(), "1.2-dev");
    }

    #[test]
    fn test_display_reparses_equal() {
        for input in ["1.2", "1.2.3", "1.2.3-beta", "1.2.3rc1", "1.2.3rc1-beta", "0.0-x", "10.20.30a"] {
            let v = Version::parse(input).unwrap();
            let reparsed = Version::parse(&v.to_string()).unwrap();
            assert_eq!(v, reparsed, "{}", input);
            assert_eq!(v.patch(), reparsed.patch(), "{}", input);
        }
    }

    #[test]
    fn test_from_str() {
        let v: Version = "2.7.18".parse().unwrap();
        assert_eq!(v, Version::from_literal("2.7.18"));
        assert!("2".parse::<Version>().is_err());
    }

    #[test]
    fn test_from_literal() {
        let v = Version::from_literal("3.8");
        assert_eq!(v.major(), 3);
        assert_eq!(v.minor(), 8);
    }

    #[test]
    #[should_panic(expected = "invalid version literal")]
    fn test_from_literal_panics() {
        Version::from_literal("3");
    }

    #[test]
    fn test_eq_ignores_suffix_and_missing_patch() {
        assert_eq!(Version::from_literal("1.2"), Version::from_literal("1.2.0"));
        assert_eq!(Version::from_literal("1.2.3"), Version::from_literal("1.2.3-anything"));
        assert_eq!(Version::from_literal("1.2.3"), Version::from_literal("1.2.3rc7"));
        assert_ne!(Version::from_literal("1.2"), Version::from_literal("1.2.1"));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let set: HashSet<Version> = ["1.2", "1.2.0", "1.2.0rc1", "1.2.0-beta", "1.2.1"]
            .iter()
            .map(|s| Version::from_literal(s))
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ord() {
        assert!(Version::from_literal("2.0.0") > Version::from_literal("1.9.9"));
        assert!(Version::from_literal("1.10.0") > Version::from_literal("1.9.0"));
        assert!(Version::from_literal("3.5.10") > Version::from_literal("3.5.2"));
        assert!(Version::from_literal("1.2") < Version::from_literal("1.2.1"));
        assert_eq!(
            Version::from_literal("1.2.3rc1").cmp(&Version::from_literal("1.2.3")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Version>();
    }
}
