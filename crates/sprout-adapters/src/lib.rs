//! Infrastructure adapters for Sprout.
//!
//! This crate implements the ports defined in `sprout-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog_loader;
pub mod filesystem;
pub mod metadata;
pub mod renderer;
pub mod resources;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use metadata::FixtureMetadataSource;
pub use renderer::SpringSourceWriter;
pub use resources::{DirectoryResources, EmbeddedResources, InMemoryResources};
