//! The `ProjectDescription` aggregate and its builder.
//!
//! The builder accepts raw strings and defers all validation to `build()`, so
//! callers (the CLI, tests) can set fields in any order and get a single
//! domain error back.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;
use crate::domain::value_objects::{ApplicationName, BuildSystem, LanguageId, PackageName};

/// Everything needed to generate one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescription {
    package: PackageName,
    language: LanguageId,
    build_system: BuildSystem,
    application_name: ApplicationName,
    root: PathBuf,
    boot_version: Option<String>,
}

impl ProjectDescription {
    pub fn builder() -> ProjectDescriptionBuilder {
        ProjectDescriptionBuilder::default()
    }

    pub fn package(&self) -> &PackageName {
        &self.package
    }
    pub fn language(&self) -> &LanguageId {
        &self.language
    }
    pub const fn build_system(&self) -> BuildSystem {
        self.build_system
    }
    pub fn application_name(&self) -> &ApplicationName {
        &self.application_name
    }
    pub fn root(&self) -> &Path {
        &self.root
    }
    pub fn boot_version(&self) -> Option<&str> {
        self.boot_version.as_deref()
    }

    /// `<root>/src/main/<lang>/<package path>`, per the build system layout.
    pub fn package_root(&self) -> PathBuf {
        self.build_system
            .package_source(&self.root, &self.language, &self.package)
    }

    /// Path of the generated entry-point source file.
    pub fn main_source_path(&self) -> PathBuf {
        self.package_root().join(format!(
            "{}.{}",
            self.application_name,
            self.language.file_extension()
        ))
    }
}

impl fmt::Display for ProjectDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.package, self.language, self.build_system
        )?;
        if let Some(v) = &self.boot_version {
            write!(f, " on Spring Boot {v}")?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ProjectDescriptionBuilder {
    package: Option<String>,
    language: Option<String>,
    build_system: Option<String>,
    dialect: Option<String>,
    application_name: Option<String>,
    root: Option<PathBuf>,
    boot_version: Option<String>,
}

impl ProjectDescriptionBuilder {
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn build_system(mut self, id: impl Into<String>) -> Self {
        self.build_system = Some(id.into());
        self
    }

    pub fn dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = Some(dialect.into());
        self
    }

    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn boot_version(mut self, version: impl Into<String>) -> Self {
        self.boot_version = Some(version.into());
        self
    }

    pub fn build(self) -> Result<ProjectDescription, DomainError> {
        let package = self
            .package
            .ok_or(DomainError::MissingRequiredField { field: "package" })?;
        let root = self
            .root
            .ok_or(DomainError::MissingRequiredField { field: "root" })?;

        let language = match self.language {
            Some(l) => LanguageId::new(l)?,
            None => LanguageId::default(),
        };
        let build_system = match self.build_system {
            Some(id) => BuildSystem::for_id_and_dialect(&id, self.dialect.as_deref())?,
            None => BuildSystem::default(),
        };
        let application_name = match self.application_name {
            Some(n) => ApplicationName::new(n)?,
            None => ApplicationName::default(),
        };

        Ok(ProjectDescription {
            package: PackageName::new(package)?,
            language,
            build_system,
            application_name,
            root,
            boot_version: self.boot_version.filter(|v| !v.trim().is_empty()),
        })
    }
}
