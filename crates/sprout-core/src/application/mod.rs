//! Application layer for Sprout.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, Materializer, MetadataService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Path computation and substitution rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CopiedFile, CopyFailure, FailurePolicy, GenerationPlan, GenerationReport, MainTypeCustomizer,
    MaterializeReport, Materializer, MetadataService, ScaffoldService,
};

pub use ports::{BootMetadataSource, Filesystem, ResourceLocator, SourceCodeWriter};

pub use error::{ApplicationError, CopyError};
