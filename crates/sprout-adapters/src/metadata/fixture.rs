//! Boot releases from a fixed JSON record.
//!
//! The record has the shape of the Spring project metadata document:
//!
//! ```json
//! { "projectReleases": [ { "version": "2.3.2.RELEASE", "current": true } ] }
//! ```

use serde::Deserialize;
use sprout_core::{
    application::{ApplicationError, ports::BootMetadataSource},
    domain::BootRelease,
    error::SproutResult,
};
use thiserror::Error;
use tracing::debug;

/// The bundled metadata document.
pub const BUNDLED_METADATA: &str = include_str!("../../assets/metadata/spring-boot.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("metadata is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("metadata lists no releases")]
    Empty,
}

impl From<FixtureError> for sprout_core::error::SproutError {
    fn from(e: FixtureError) -> Self {
        ApplicationError::MetadataUnavailable {
            reason: e.to_string(),
        }
        .into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataDocument {
    #[serde(default)]
    project_releases: Vec<BootRelease>,
}

/// [`BootMetadataSource`] over a JSON document held in memory.
#[derive(Debug, Clone)]
pub struct FixtureMetadataSource {
    document: String,
}

impl FixtureMetadataSource {
    /// Source over the document shipped with Sprout.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_METADATA)
    }

    pub fn from_json(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    fn parse(&self) -> Result<Vec<BootRelease>, FixtureError> {
        let doc: MetadataDocument = serde_json::from_str(&self.document)?;
        if doc.project_releases.is_empty() {
            return Err(FixtureError::Empty);
        }
        Ok(doc.project_releases)
    }
}

impl Default for FixtureMetadataSource {
    fn default() -> Self {
        Self::bundled()
    }
}

impl BootMetadataSource for FixtureMetadataSource {
    fn releases(&self) -> SproutResult<Vec<BootRelease>> {
        let releases = self.parse()?;
        debug!(count = releases.len(), "Boot releases read");
        Ok(releases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::application::MetadataService;

    #[test]
    fn bundled_document_has_eight_releases() {
        let releases = FixtureMetadataSource::bundled().releases().unwrap();
        assert_eq!(releases.len(), 8);
        assert_eq!(releases.iter().filter(|r| r.current).count(), 1);
    }

    #[test]
    fn bundled_default_is_2_3_2() {
        let service = MetadataService::new(Box::new(FixtureMetadataSource::bundled()));
        let default = service.default_version().unwrap().unwrap();
        assert_eq!(default.id, "2.3.2.RELEASE");
        assert_eq!(default.name, "2.3.2");
    }

    #[test]
    fn display_names_from_bundled_document() {
        let service = MetadataService::new(Box::new(FixtureMetadataSource::bundled()));
        let names: Vec<_> = service
            .boot_versions()
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(
            names,
            [
                "2.4.0 (SNAPSHOT)",
                "2.4.0 (M1)",
                "2.3.3 (SNAPSHOT)",
                "2.3.2",
                "2.2.10 (SNAPSHOT)",
                "2.2.9",
                "2.1.17 (SNAPSHOT)",
                "2.1.16",
            ]
        );
    }

    #[test]
    fn broken_documents_are_unavailable() {
        for doc in ["not json", r#"{"projectReleases": []}"#] {
            let err = FixtureMetadataSource::from_json(doc).releases().unwrap_err();
            assert!(err.to_string().contains("metadata"));
        }
    }
}
