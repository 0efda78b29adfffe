//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world. Adapters
//! in `sprout-adapters` implement them.
//!
//! ## Driven (output) ports
//!
//! - `Filesystem`: directory creation, file creation and appends
//! - `ResourceLocator`: template resources as text streams
//! - `SourceCodeWriter`: rendering of the main class
//! - `BootMetadataSource`: the Spring Boot release list

pub mod output;

pub use output::{BootMetadataSource, Filesystem, ResourceLocator, SourceCodeWriter};

#[cfg(test)]
pub use output::{
    MockBootMetadataSource, MockFilesystem, MockResourceLocator, MockSourceCodeWriter,
};
