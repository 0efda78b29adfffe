//! Spring Boot version parsing and display names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A raw release as published by a metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootRelease {
    pub version: String,
    #[serde(default)]
    pub current: bool,
}

impl BootRelease {
    pub fn new(version: impl Into<String>, current: bool) -> Self {
        Self {
            version: version.into(),
            current,
        }
    }
}

/// Qualifier of a version: `RELEASE`, `BUILD-SNAPSHOT`, `M1`, `RC2`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    pub id: String,
    pub version: Option<u32>,
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)?;
        if let Some(v) = self.version {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// `major.minor.patch` with an optional qualifier separated by `.` or `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub qualifier: Option<Qualifier>,
}

impl Version {
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidVersion {
            version: text.to_string(),
            reason: reason.to_string(),
        };

        let text = text.trim();
        let mut parts = text.splitn(4, ['.', '-']);
        let mut number = |name: &str| -> Result<u32, DomainError> {
            parts
                .next()
                .filter(|p| !p.is_empty())
                .ok_or_else(|| invalid(&format!("missing {name} component")))?
                .parse()
                .map_err(|_| invalid(&format!("{name} component is not a number")))
        };

        let major = number("major")?;
        let minor = number("minor")?;
        let patch = number("patch")?;

        let qualifier = match parts.next() {
            None => None,
            Some(raw) => {
                let split = raw.find(|c: char| c.is_ascii_digit()).unwrap_or(raw.len());
                let (id, digits) = raw.split_at(split);
                if id.is_empty() {
                    return Err(invalid("qualifier must start with a letter"));
                }
                let version = if digits.is_empty() {
                    None
                } else {
                    Some(
                        digits
                            .parse()
                            .map_err(|_| invalid("qualifier version is not a number"))?,
                    )
                };
                Some(Qualifier {
                    id: id.to_string(),
                    version,
                })
            }
        };

        Ok(Self {
            major,
            minor,
            patch,
            qualifier,
        })
    }

    /// Human-readable name, e.g. `2.3.2`, `2.4.0 (SNAPSHOT)`, `2.4.0 (M1)`.
    pub fn display_name(&self) -> String {
        let base = format!("{}.{}.{}", self.major, self.minor, self.patch);
        match &self.qualifier {
            None => base,
            Some(q) if q.id == "RELEASE" => base,
            Some(q) if q.id.contains("SNAPSHOT") => format!("{base} (SNAPSHOT)"),
            Some(q) => format!("{base} ({q})"),
        }
    }
}

impl FromStr for Version {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A selectable Spring Boot version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootVersion {
    pub id: String,
    pub name: String,
    pub default: bool,
}

impl BootVersion {
    pub fn from_release(release: &BootRelease) -> Result<Self, DomainError> {
        let version = Version::parse(&release.version)?;
        Ok(Self {
            id: release.version.clone(),
            name: version.display_name(),
            default: release.current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        let name = |v: &str| Version::parse(v).unwrap().display_name();
        assert_eq!(name("2.3.2.RELEASE"), "2.3.2");
        assert_eq!(name("2.4.0-SNAPSHOT"), "2.4.0 (SNAPSHOT)");
        assert_eq!(name("2.3.3.BUILD-SNAPSHOT"), "2.3.3 (SNAPSHOT)");
        assert_eq!(name("2.4.0-M1"), "2.4.0 (M1)");
        assert_eq!(name("2.4.0-RC"), "2.4.0 (RC)");
        assert_eq!(name("2.5.0"), "2.5.0");
    }

    #[test]
    fn qualifier_is_split_into_id_and_number() {
        let v = Version::parse("2.4.0-M1").unwrap();
        assert_eq!(
            v.qualifier,
            Some(Qualifier {
                id: "M".into(),
                version: Some(1)
            })
        );

        let v = Version::parse("2.3.3.BUILD-SNAPSHOT").unwrap();
        assert_eq!(v.qualifier.unwrap().id, "BUILD-SNAPSHOT");
    }

    #[test]
    fn malformed_versions_are_rejected() {
        for bad in ["", "2", "2.3", "a.b.c", "2.3.x", "2.3.1-7"] {
            assert!(
                matches!(Version::parse(bad), Err(DomainError::InvalidVersion { .. })),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn boot_version_from_release() {
        let v = BootVersion::from_release(&BootRelease::new("2.3.2.RELEASE", true)).unwrap();
        assert_eq!(v.id, "2.3.2.RELEASE");
        assert_eq!(v.name, "2.3.2");
        assert!(v.default);
    }
}
