//! Version comparison utilities

use std::cmp::Ordering;

use crate::Version;

/// Three-way compare returning `-1`, `0` or `1`
pub fn compare(v1: &Version, v2: &Version) -> i32 {
    match v1.cmp(v2) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

impl Version {
    /// Check if self == other (suffixes are ignored)
    pub fn equal(&self, other: &Version) -> bool {
        compare(self, other) == 0
    }

    /// Check if self > other
    pub fn greater_than(&self, other: &Version) -> bool {
        compare(self, other) == 1
    }

    /// Check if self < other
    pub fn less_than(&self, other: &Version) -> bool {
        compare(self, other) == -1
    }

    /// Check if self >= literal
    ///
    /// # Panics
    ///
    /// Panics if `literal` is not a valid version, see [`Version::from_literal`].
    pub fn greater_than_or_equal_str(&self, literal: &str) -> bool {
        compare(self, &Version::from_literal(literal)) >= 0
    }

    /// Check if self > literal
    ///
    /// # Panics
    ///
    /// Panics if `literal` is not a valid version, see [`Version::from_literal`].
    pub fn greater_than_str(&self, literal: &str) -> bool {
        self.greater_than(&Version::from_literal(literal))
    }

    /// Check if self < literal
    ///
    /// # Panics
    ///
    /// Panics if `literal` is not a valid version, see [`Version::from_literal`].
    pub fn less_than_str(&self, literal: &str) -> bool {
        self.less_than(&Version::from_literal(literal))
    }
}
