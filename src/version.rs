use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// Lowest report version whose field semantics this crate understands.
pub const MIN_SUPPORTED: ReportVersion = ReportVersion::new(4, 0, 0);

/// First version outside the supported range (exclusive upper bound).
pub const FIRST_UNSUPPORTED: ReportVersion = ReportVersion::new(5, 0, 0);

/// Dotted `major.minor.patch` version carried by the report root.
///
/// Field semantics of the report format are only stable within major
/// version 4, so anything outside `[4.0.0, 5.0.0)` is rejected before any
/// record is produced rather than risking silent misinterpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReportVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl ReportVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn is_supported(&self) -> bool {
        *self >= MIN_SUPPORTED && *self < FIRST_UNSUPPORTED
    }

    pub fn ensure_supported(&self) -> Result<(), SchemaError> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(SchemaError::UnsupportedVersion {
                version: self.to_string(),
            })
        }
    }
}

impl FromStr for ReportVersion {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SchemaError::InvalidVersion {
            value: s.to_string(),
        };

        let mut parts = s.split('.');
        let component = |part: Option<&str>| {
            part.and_then(|p| p.parse::<u32>().ok()).ok_or_else(invalid)
        };

        let major = component(parts.next())?;
        let minor = component(parts.next())?;
        let patch = component(parts.next())?;

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(major, minor, patch))
    }
}

impl fmt::Display for ReportVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
