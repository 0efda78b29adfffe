//! Domain value objects: PackageName, LanguageId, ResourceId, ApplicationName, BuildSystem.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Each
//! one owns its string representation and the single rule that makes it
//! valid; nothing here touches the filesystem.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

// ── PackageName ──────────────────────────────────────────────────────────────

/// A dot-separated package name such as `com.example.app`.
///
/// Only emptiness is rejected. Anything else (double dots, slashes, leading
/// dots) is kept verbatim in the name; [`PackageName::to_relative_path`]
/// decides what reaches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidPackageName {
                name,
                reason: "package name cannot be empty".into(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Relative directory path of the package, one component per segment.
    ///
    /// Empty segments, root prefixes and `..` are dropped, so the result can
    /// always be joined onto a source root without leaving it.
    pub fn to_relative_path(&self) -> PathBuf {
        self.0
            .split('.')
            .flat_map(|segment| Path::new(segment).components())
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part),
                _ => None,
            })
            .collect()
    }

    /// Qualify a simple name with this package (`com.acme.app` + `dao`).
    pub fn qualify(&self, name: &str) -> String {
        format!("{}.{}", self.0, name)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackageName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PackageName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PackageName> for String {
    fn from(value: PackageName) -> Self {
        value.0
    }
}

// ── LanguageId ───────────────────────────────────────────────────────────────

/// Source language of the generated project, used as a path segment.
///
/// Treated as an opaque lookup key: `java`, `kotlin` and `groovy` are the
/// languages Spring Boot ships with, but any lowercase token is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageId(String);

impl LanguageId {
    pub const JAVA: &'static str = "java";
    pub const KOTLIN: &'static str = "kotlin";
    pub const GROOVY: &'static str = "groovy";

    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id: String = id.into();
        let id = id.trim().to_ascii_lowercase();
        if id.is_empty() || id.contains(['/', '\\']) {
            return Err(DomainError::InvalidLanguage { language: id });
        }
        Ok(Self(id))
    }

    pub fn java() -> Self {
        Self(Self::JAVA.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File extension for source files written in this language.
    pub fn file_extension(&self) -> &str {
        match self.0.as_str() {
            Self::KOTLIN => "kt",
            other => other,
        }
    }
}

impl Default for LanguageId {
    fn default() -> Self {
        Self::java()
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguageId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageId> for String {
    fn from(value: LanguageId) -> Self {
        value.0
    }
}

// ── ResourceId ───────────────────────────────────────────────────────────────

/// Locator string for a template resource, e.g. `classpath:configuration/Logback.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub const CLASSPATH_PREFIX: &'static str = "classpath:";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier without its `classpath:` scheme, if it has one.
    pub fn location(&self) -> &str {
        self.0
            .strip_prefix(Self::CLASSPATH_PREFIX)
            .unwrap_or(&self.0)
            .trim_start_matches('/')
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ── ApplicationName ──────────────────────────────────────────────────────────

/// Name of the generated entry-point type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationName(String);

impl ApplicationName {
    pub const DEFAULT: &'static str = "DemoApplication";

    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let valid_start = name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !valid_start {
            return Err(DomainError::InvalidApplicationName {
                reason: "must start with a letter or underscore".into(),
                name,
            });
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(DomainError::InvalidApplicationName {
                reason: "may only contain letters, digits and underscores".into(),
                name,
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApplicationName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for ApplicationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ApplicationName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ApplicationName> for String {
    fn from(value: ApplicationName) -> Self {
        value.0
    }
}

// ── BuildSystem ──────────────────────────────────────────────────────────────

/// Gradle build script dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradleDialect {
    Groovy,
    Kotlin,
}

impl GradleDialect {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Groovy => "groovy",
            Self::Kotlin => "kotlin",
        }
    }
}

/// The build system of a generated project.
///
/// Both build systems share the conventional `src/main` and `src/test`
/// layout; the variant is kept so descriptions round-trip to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    Maven,
    Gradle(GradleDialect),
}

impl BuildSystem {
    /// Resolve a build system from its id and optional dialect.
    pub fn for_id_and_dialect(id: &str, dialect: Option<&str>) -> Result<Self, DomainError> {
        let unknown = || DomainError::UnknownBuildSystem {
            id: id.to_string(),
            dialect: dialect.unwrap_or("null").to_string(),
        };

        match (id.to_ascii_lowercase().as_str(), dialect.map(str::to_ascii_lowercase)) {
            ("maven", None) => Ok(Self::Maven),
            ("gradle", None) => Ok(Self::Gradle(GradleDialect::Groovy)),
            ("gradle", Some(d)) => match d.as_str() {
                "groovy" => Ok(Self::Gradle(GradleDialect::Groovy)),
                "kotlin" => Ok(Self::Gradle(GradleDialect::Kotlin)),
                _ => Err(unknown()),
            },
            _ => Err(unknown()),
        }
    }

    pub const fn id(&self) -> &'static str {
        match self {
            Self::Maven => "maven",
            Self::Gradle(_) => "gradle",
        }
    }

    pub const fn dialect(&self) -> Option<GradleDialect> {
        match self {
            Self::Maven => None,
            Self::Gradle(d) => Some(*d),
        }
    }

    /// Root of the main source set for `language`.
    pub fn main_source(&self, project_root: &Path, language: &LanguageId) -> PathBuf {
        project_root.join("src").join("main").join(language.as_str())
    }

    /// `<main source>/<package path>`
    pub fn package_source(
        &self,
        project_root: &Path,
        language: &LanguageId,
        package: &PackageName,
    ) -> PathBuf {
        self.main_source(project_root, language)
            .join(package.to_relative_path())
    }

    /// Root of the main resources folder.
    pub fn main_resources(&self, project_root: &Path) -> PathBuf {
        project_root.join("src").join("main").join("resources")
    }
}

impl Default for BuildSystem {
    fn default() -> Self {
        Self::Maven
    }
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dialect() {
            Some(d) => write!(f, "{} ({})", self.id(), d.as_str()),
            None => f.write_str(self.id()),
        }
    }
}
