//! TOML manifest catalogs.
//!
//! # Format
//!
//! ```toml
//! package_directories  = ["controller", "service", "dao"]
//! resource_directories = ["mappers"]
//!
//! [[files]]
//! resource = "classpath:configuration/RespCode.java"
//! scope    = "package"              # package | resources
//! path     = "comm/RespCode.{ext}"  # {ext} = language file extension
//! ```

use std::{fs, path::Path};

use sprout_core::domain::{DomainError, ManifestCatalog};
use tracing::{debug, instrument};

/// Parse and validate a catalog from TOML text.
pub fn parse_catalog(raw: &str) -> Result<ManifestCatalog, DomainError> {
    let catalog: ManifestCatalog = toml::from_str(raw)
        .map_err(|e| DomainError::InvalidCatalog(format!("failed to parse catalog: {e}")))?;
    catalog.validate()?;
    Ok(catalog)
}

/// Read, parse and validate the catalog at `path`.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_catalog(path: &Path) -> Result<ManifestCatalog, DomainError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        DomainError::InvalidCatalog(format!("failed to read '{}': {e}", path.display()))
    })?;
    let catalog = parse_catalog(&raw)?;
    debug!(
        directories = catalog.package_directories.len() + catalog.resource_directories.len(),
        files = catalog.files.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Serialize a catalog back to TOML (used to print the built-in catalog).
pub fn to_toml(catalog: &ManifestCatalog) -> Result<String, DomainError> {
    toml::to_string_pretty(catalog)
        .map_err(|e| DomainError::InvalidCatalog(format!("failed to serialize catalog: {e}")))
}
