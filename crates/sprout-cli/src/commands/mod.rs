//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments and config into core calls and display the
//! results.  The helpers below are shared by `new` and `plan`.

pub mod completions;
pub mod config;
pub mod init;
pub mod new;
pub mod plan;
pub mod versions;

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sprout_adapters::{DirectoryResources, EmbeddedResources, catalog_loader};
use sprout_core::{
    application::ports::ResourceLocator,
    domain::{FileManifest, ManifestCatalog, ProjectDescriptionBuilder, ResourceId},
};
use tracing::debug;

use crate::{
    cli::{ListFormat, OutputFormat, ProjectArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Start a description from the package and language flags, falling back
/// to the configured defaults.
pub(crate) fn project_builder(
    args: &ProjectArgs,
    config: &AppConfig,
    root: &Path,
) -> CliResult<ProjectDescriptionBuilder> {
    let package = args
        .package
        .clone()
        .or_else(|| config.defaults.package.clone())
        .filter(|p| !p.trim().is_empty())
        .ok_or(CliError::MissingPackage)?;

    let mut builder = sprout_core::domain::ProjectDescription::builder()
        .package(package)
        .root(root);
    if let Some(language) = args.language.as_ref().or(config.defaults.language.as_ref()) {
        builder = builder.language(language.clone());
    }
    Ok(builder)
}

/// The catalog from `--catalog`, else `generation.catalog`, else the
/// built-in one.
pub(crate) fn resolve_catalog(args: &ProjectArgs, config: &AppConfig) -> CliResult<ManifestCatalog> {
    match args.catalog.as_ref().or(config.generation.catalog.as_ref()) {
        Some(path) => {
            debug!(path = %path.display(), "Loading catalog");
            Ok(catalog_loader::load_catalog(path)?)
        }
        None => Ok(ManifestCatalog::builtin()),
    }
}

fn check_template_dir(dir: &Path) -> CliResult<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(CliError::InvalidInput {
            message: format!("template directory '{}' does not exist", dir.display()),
            source: None,
        })
    }
}

/// Template lookup: an override directory backed by the bundled templates,
/// or the bundled templates alone.
pub(crate) fn resource_locator(dir: Option<&PathBuf>) -> CliResult<Box<dyn ResourceLocator>> {
    match dir {
        Some(dir) => {
            check_template_dir(dir)?;
            debug!(dir = %dir.display(), "Using template overrides");
            Ok(Box::new(
                DirectoryResources::new(dir).with_fallback(Box::new(EmbeddedResources::new())),
            ))
        }
        None => Ok(Box::new(EmbeddedResources::new())),
    }
}

/// Where a manifest file's template will be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TemplateSource {
    Override,
    Bundled,
    Missing,
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Override => "override",
            Self::Bundled => "bundled",
            Self::Missing => "missing",
        })
    }
}

/// Resolve the template source of every file in `files`, looking in the
/// override directory first and the bundled templates second.
pub(crate) fn template_sources(
    files: &FileManifest,
    dir: Option<&PathBuf>,
) -> CliResult<BTreeMap<ResourceId, TemplateSource>> {
    let overridden: HashSet<String> = match dir {
        Some(dir) => {
            check_template_dir(dir)?;
            DirectoryResources::new(dir)
                .list()?
                .iter()
                .map(|id| id.location().to_string())
                .collect()
        }
        None => HashSet::new(),
    };
    let bundled: HashSet<&str> = EmbeddedResources::locations().collect();

    Ok(files
        .iter()
        .map(|(id, _)| {
            let source = if overridden.contains(id.location()) {
                TemplateSource::Override
            } else if bundled.contains(id.location()) {
                TemplateSource::Bundled
            } else {
                TemplateSource::Missing
            };
            (id.clone(), source)
        })
        .collect())
}

/// `true` when either the command's `--format` or the global
/// `--output-format` asks for JSON.
pub(crate) fn wants_json(format: ListFormat, output: &OutputManager) -> bool {
    format == ListFormat::Json || output.format() == OutputFormat::Json
}
