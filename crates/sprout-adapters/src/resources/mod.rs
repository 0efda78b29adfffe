//! Template resource locators.
//!
//! All locators accept identifiers with or without the `classpath:` scheme
//! and resolve them relative to their own root.

mod directory;
mod embedded;
mod memory;

pub use directory::DirectoryResources;
pub use embedded::EmbeddedResources;
pub use memory::InMemoryResources;

use sprout_core::{application::ApplicationError, domain::ResourceId, error::SproutError};

fn not_found(id: &ResourceId) -> SproutError {
    ApplicationError::ResourceNotFound { id: id.to_string() }.into()
}
