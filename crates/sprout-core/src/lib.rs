//! Sprout Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprout
//! Spring Boot scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sprout-cli (CLI)             │
//! │      (builds ProjectDescription)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, Materializer, ...)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, ResourceLocator, Writer)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sprout-adapters (Infrastructure)    │
//! │  (LocalFilesystem, EmbeddedResources)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ManifestBuilder, TokenFilter, Version) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sprout_core::{
//!     application::ScaffoldService,
//!     domain::ProjectDescription,
//! };
//!
//! // 1. Describe the project
//! let description = ProjectDescription::builder()
//!     .package("com.acme.app")
//!     .language("java")
//!     .root("./acme")
//!     .build()
//!     .unwrap();
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, resources, writer);
//! let report = service.generate(&description).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FailurePolicy, MaterializeReport, Materializer, MetadataService, ScaffoldService,
        ports::{BootMetadataSource, Filesystem, ResourceLocator, SourceCodeWriter},
    };
    pub use crate::domain::{
        BuildSystem, DirectoryManifest, FileManifest, LanguageId, ManifestBuilder,
        ManifestCatalog, PackageName, ProjectDescription, ResourceId, TokenFilter,
    };
    pub use crate::error::{SproutError, SproutResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
