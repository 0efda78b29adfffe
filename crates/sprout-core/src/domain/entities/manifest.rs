//! Directory and file manifests for a generated project.
//!
//! A [`ManifestCatalog`] lists the directory suffixes and template files a
//! project receives. The [`ManifestBuilder`] resolves that catalog against a
//! project root, language and package into concrete paths. Both manifests are
//! recomputed for every run and never mutated afterwards.
//!
//! The builder never rejects a package. A name with a leading `.` or an
//! empty segment is normalised by [`PackageName::to_relative_path`], so every
//! path it produces stays under the project root.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::{BuildSystem, LanguageId, PackageName, ResourceId};

/// Placeholder replaced by the language's file extension in catalog paths.
pub const EXTENSION_PLACEHOLDER: &str = "{ext}";

// ── Catalog ──────────────────────────────────────────────────────────────────

/// Where a catalog file is rooted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileScope {
    /// Under `src/main/<lang>/<package path>`.
    Package,
    /// Under `src/main/resources`.
    Resources,
}

/// One template file of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub resource: ResourceId,
    pub scope: FileScope,
    /// Relative destination, `/`-separated, may contain `{ext}`.
    pub path: String,
}

impl CatalogFile {
    pub fn new(resource: impl Into<String>, scope: FileScope, path: impl Into<String>) -> Self {
        Self {
            resource: ResourceId::new(resource),
            scope,
            path: path.into(),
        }
    }
}

/// The data the manifest builder reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestCatalog {
    #[serde(default)]
    pub package_directories: Vec<String>,
    #[serde(default)]
    pub resource_directories: Vec<String>,
    #[serde(default)]
    pub files: Vec<CatalogFile>,
}

impl ManifestCatalog {
    /// The standard layout for a Spring Boot + MyBatis service.
    pub fn builtin() -> Self {
        let package_directories = [
            "comm/config",
            "controller",
            "entity",
            "dao",
            "repository",
            "service",
            "global",
            "global/cache",
            "global/constant",
            "global/enums",
            "rest/request",
            "rest/response",
            "utils",
        ]
        .map(String::from)
        .to_vec();

        let files = vec![
            CatalogFile::new(
                "classpath:configuration/RespCode.java",
                FileScope::Package,
                "comm/RespCode.{ext}",
            ),
            CatalogFile::new(
                "classpath:configuration/generatorConfig.xml",
                FileScope::Resources,
                "generatorConfig.xml",
            ),
            CatalogFile::new(
                "classpath:configuration/generatorConfigTk.xml",
                FileScope::Resources,
                "generatorConfigTk.xml",
            ),
            CatalogFile::new(
                "classpath:configuration/Logback.xml",
                FileScope::Resources,
                "Logback.xml",
            ),
            CatalogFile::new(
                "classpath:configuration/mybatisGeneratorinit.properties",
                FileScope::Resources,
                "mybatisGeneratorinit.properties",
            ),
        ];

        Self {
            package_directories,
            resource_directories: vec!["mappers".into()],
            files,
        }
    }

    /// Check the catalog for duplicate resources and unusable paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        let suffixes = self
            .package_directories
            .iter()
            .chain(&self.resource_directories)
            .map(String::as_str)
            .chain(self.files.iter().map(|f| f.path.as_str()));

        for suffix in suffixes {
            if suffix.trim().is_empty() {
                return Err(DomainError::InvalidCatalog("empty path entry".into()));
            }
            if suffix.starts_with('/') || suffix.starts_with('\\') || Path::new(suffix).is_absolute()
            {
                return Err(DomainError::InvalidCatalog(format!(
                    "path '{suffix}' must be relative"
                )));
            }
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.resource.as_str().is_empty() {
                return Err(DomainError::InvalidCatalog("empty resource id".into()));
            }
            if !seen.insert(&file.resource) {
                return Err(DomainError::InvalidCatalog(format!(
                    "resource '{}' is listed more than once",
                    file.resource
                )));
            }
        }

        Ok(())
    }
}

impl Default for ManifestCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ── Manifests ────────────────────────────────────────────────────────────────

/// Ordered list of directories to create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryManifest(Vec<PathBuf>);

impl DirectoryManifest {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self(paths)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DirectoryManifest {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Template resource → destination path. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileManifest(HashMap<ResourceId, PathBuf>);

impl FileManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous destination for `resource`.
    pub fn insert(&mut self, resource: ResourceId, destination: PathBuf) -> Option<PathBuf> {
        self.0.insert(resource, destination)
    }

    pub fn get(&self, resource: &ResourceId) -> Option<&PathBuf> {
        self.0.get(resource)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResourceId, &PathBuf)> {
        self.0.iter()
    }

    /// Entries ordered by resource id, for stable display.
    pub fn sorted(&self) -> Vec<(&ResourceId, &PathBuf)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ResourceId, PathBuf)> for FileManifest {
    fn from_iter<I: IntoIterator<Item = (ResourceId, PathBuf)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Resolves a [`ManifestCatalog`] into concrete paths.
///
/// Source roots come from the [`BuildSystem`] layout, Maven unless told
/// otherwise.
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    catalog: ManifestCatalog,
    layout: BuildSystem,
}

impl ManifestBuilder {
    pub fn new(catalog: ManifestCatalog) -> Self {
        Self {
            catalog,
            layout: BuildSystem::default(),
        }
    }

    pub fn with_build_system(mut self, layout: BuildSystem) -> Self {
        self.layout = layout;
        self
    }

    pub fn catalog(&self) -> &ManifestCatalog {
        &self.catalog
    }

    /// Package directories first, in catalog order, then resource directories.
    pub fn directory_manifest(
        &self,
        root: &Path,
        language: &LanguageId,
        package: &PackageName,
    ) -> DirectoryManifest {
        let package_root = self.layout.package_source(root, language, package);
        let resources = self.layout.main_resources(root);

        let paths = self
            .catalog
            .package_directories
            .iter()
            .map(|suffix| join_suffix(&package_root, suffix))
            .chain(
                self.catalog
                    .resource_directories
                    .iter()
                    .map(|suffix| join_suffix(&resources, suffix)),
            )
            .collect();

        DirectoryManifest(paths)
    }

    pub fn file_manifest(
        &self,
        root: &Path,
        language: &LanguageId,
        package: &PackageName,
    ) -> FileManifest {
        let package_root = self.layout.package_source(root, language, package);
        let resources = self.layout.main_resources(root);

        self.catalog
            .files
            .iter()
            .map(|file| {
                let suffix = file
                    .path
                    .replace(EXTENSION_PLACEHOLDER, language.file_extension());
                let base = match file.scope {
                    FileScope::Package => &package_root,
                    FileScope::Resources => &resources,
                };
                (file.resource.clone(), join_suffix(base, &suffix))
            })
            .collect()
    }
}

fn join_suffix(base: &Path, suffix: &str) -> PathBuf {
    suffix
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
}
