//! Driven (output) ports - implemented by infrastructure.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::domain::{BootRelease, CompilationUnit, LanguageId, ResourceId};
use crate::error::SproutResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprout_adapters::filesystem::LocalFilesystem` (production)
/// - `sprout_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> SproutResult<()>;

    /// Create an empty file. Fails if the parent directory is missing.
    fn create_file(&self, path: &Path) -> SproutResult<()>;

    /// Write `content` to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, content: &str) -> SproutResult<()>;

    /// Open an existing file for appending.
    fn open_append(&self, path: &Path) -> SproutResult<Box<dyn Write + Send>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for locating template resources.
///
/// Identifiers may carry a `classpath:` scheme which implementations strip.
/// Missing resources are reported as `ApplicationError::ResourceNotFound`.
#[cfg_attr(test, mockall::automock)]
pub trait ResourceLocator: Send + Sync {
    fn locate(&self, id: &ResourceId) -> SproutResult<Box<dyn BufRead + Send>>;
}

/// Port for rendering the main class into source text.
#[cfg_attr(test, mockall::automock)]
pub trait SourceCodeWriter: Send + Sync {
    /// Fails with `DomainError::UnsupportedLanguage` for unknown languages.
    fn render(&self, unit: &CompilationUnit, language: &LanguageId) -> SproutResult<String>;
}

/// Port for the list of published Spring Boot releases.
#[cfg_attr(test, mockall::automock)]
pub trait BootMetadataSource: Send + Sync {
    fn releases(&self) -> SproutResult<Vec<BootRelease>>;
}
