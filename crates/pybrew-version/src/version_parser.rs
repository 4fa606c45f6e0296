//! Version string parsing

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The numeric part did not split into two or three dot-segments
    #[error("Malformed version string \"{0}\": expected <major>.<minor>[.<patch>][-suffix]")]
    MalformedVersion(String),
    /// A numeric segment is not a non-negative base-10 integer
    #[error("Invalid number \"{0}\" in version string")]
    InvalidNumber(String),
}

lazy_static! {
    // Leading digit run of the patch segment and whatever tag follows it
    static ref PATCH_RE: Regex = Regex::new(r"(?s)^([0-9]+)(.*)$").unwrap();
}

/// Parse a `<major>.<minor>[.<patch>][-suffix]` string.
pub(crate) fn parse(input: &str) -> Result<Version, ParseError> {
    let (numeric, mut suffix) = match input.split_once('-') {
        Some((numeric, rest)) => (numeric, format!("-{}", rest)),
        None => (input, String::new()),
    };

    let segments: Vec<&str> = numeric.split('.').collect();
    if segments.len() != 2 && segments.len() != 3 {
        return Err(ParseError::MalformedVersion(input.to_string()));
    }

    let major = parse_number(segments[0])?;
    let minor = parse_number(segments[1])?;

    let patch = match segments.get(2) {
        Some(segment) => {
            let caps = PATCH_RE
                .captures(segment)
                .ok_or_else(|| ParseError::InvalidNumber(segment.to_string()))?;
            let patch = parse_number(&caps[1])?;

            // e.g. "rc1" out of "3rc1"
            let tag = &caps[2];
            if !tag.is_empty() {
                suffix.insert_str(0, tag);
            }
            Some(patch)
        }
        None => None,
    };

    Ok(Version::new(major, minor, patch, suffix))
}

/// Only plain ASCII digits are accepted, so signs and whitespace are rejected.
fn parse_number(segment: &str) -> Result<u64, ParseError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber(segment.to_string()));
    }
    segment
        .parse()
        .map_err(|_| ParseError::InvalidNumber(segment.to_string()))
}
