// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sprout.
//!
//! Pure logic: value objects, manifests, the token filter, the source model
//! of the main class and boot version parsing. Nothing here performs I/O;
//! the application layer drives the filesystem and resources through ports.
//!
//! - **No I/O**: paths are computed, never touched
//! - **No logging**: observability belongs to the application and CLI layers
//! - **Immutable results**: manifests are rebuilt for every run

pub mod entities;
pub mod error;
pub mod substitution;
pub mod value_objects;

pub use entities::{
    boot_version::{BootRelease, BootVersion, Qualifier, Version},
    manifest::{
        CatalogFile, DirectoryManifest, FileManifest, FileScope, ManifestBuilder,
        ManifestCatalog,
    },
    project_description::{ProjectDescription, ProjectDescriptionBuilder},
    source_code::{Annotation, AnnotationValue, CompilationUnit, TypeDeclaration},
};

pub use error::{DomainError, ErrorCategory};

pub use substitution::{TokenFilter, substitute};

pub use value_objects::{
    ApplicationName, BuildSystem, GradleDialect, LanguageId, PackageName, ResourceId,
};
