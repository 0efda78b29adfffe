//! Boot metadata sources.

mod fixture;

pub use fixture::{FixtureError, FixtureMetadataSource};
