//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "list boot versions".

pub mod customizers;
pub mod materializer;
pub mod metadata_service;
pub mod scaffold_service;

pub use customizers::{
    MainTypeCustomizer, MapperScanCustomizer, SpringBootApplicationCustomizer, default_customizers,
};
pub use materializer::{CopiedFile, CopyFailure, FailurePolicy, MaterializeReport, Materializer};
pub use metadata_service::MetadataService;
pub use scaffold_service::{GenerationPlan, GenerationReport, ScaffoldService};
