pub mod boot_version;
pub mod manifest;
pub mod project_description;
pub mod source_code;

pub use crate::domain::DomainError;
pub use boot_version::{BootRelease, BootVersion, Version};
pub use manifest::{DirectoryManifest, FileManifest, ManifestBuilder, ManifestCatalog};
pub use project_description::ProjectDescription;
pub use source_code::CompilationUnit;
