//! Four-part assembly version numbers (`major.minor.build.revision`).

use std::fmt;
use std::str::FromStr;

/// Largest value accepted for a single component.
const MAX_COMPONENT: u32 = i32::MAX as u32;

/// A parsed `major.minor.build.revision` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssemblyVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

/// Returned when a string is not a four-part dotted version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError;

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected four dot-separated non-negative integers")
    }
}

impl std::error::Error for ParseVersionError {}

impl AssemblyVersion {
    pub fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

fn parse_component(part: &str) -> Result<u32, ParseVersionError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseVersionError);
    }
    match part.parse::<u32>() {
        Ok(n) if n <= MAX_COMPONENT => Ok(n),
        _ => Err(ParseVersionError),
    }
}

impl FromStr for AssemblyVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let mut next = || parts.next().ok_or(ParseVersionError).and_then(parse_component);

        let version = AssemblyVersion::new(next()?, next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(ParseVersionError);
        }
        Ok(version)
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}
