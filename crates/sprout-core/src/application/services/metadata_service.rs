//! Metadata Service - Spring Boot versions offered to the user.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::BootMetadataSource},
    domain::{BootVersion, DomainError},
    error::SproutResult,
};

pub struct MetadataService {
    source: Box<dyn BootMetadataSource>,
}

impl MetadataService {
    pub fn new(source: Box<dyn BootMetadataSource>) -> Self {
        Self { source }
    }

    /// All releases whose version parses, in source order.
    #[instrument(skip_all)]
    pub fn boot_versions(&self) -> SproutResult<Vec<BootVersion>> {
        let releases = self.source.releases()?;
        let versions: Vec<_> = releases
            .iter()
            .filter_map(|release| match BootVersion::from_release(release) {
                Ok(v) => Some(v),
                Err(e) => {
                    debug!(version = %release.version, error = %e, "Skipping release");
                    None
                }
            })
            .collect();
        debug!(count = versions.len(), "Boot versions loaded");
        Ok(versions)
    }

    /// The release marked as current, if any.
    pub fn default_version(&self) -> SproutResult<Option<BootVersion>> {
        Ok(self.boot_versions()?.into_iter().find(|v| v.default))
    }

    /// Look up `requested` by id, or fall back to the default version.
    pub fn resolve(&self, requested: Option<&str>) -> SproutResult<BootVersion> {
        let versions = self.boot_versions()?;
        match requested {
            Some(id) => versions
                .into_iter()
                .find(|v| v.id == id || v.name == id)
                .ok_or_else(|| {
                    DomainError::UnknownBootVersion {
                        version: id.to_string(),
                    }
                    .into()
                }),
            None => versions.into_iter().find(|v| v.default).ok_or_else(|| {
                ApplicationError::MetadataUnavailable {
                    reason: "no release is marked as current".into(),
                }
                .into()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockBootMetadataSource;
    use crate::domain::BootRelease;
    use crate::error::SproutError;

    fn service(releases: Vec<BootRelease>) -> MetadataService {
        let mut source = MockBootMetadataSource::new();
        source
            .expect_releases()
            .returning(move || Ok(releases.clone()));
        MetadataService::new(Box::new(source))
    }

    fn sample() -> MetadataService {
        service(vec![
            BootRelease::new("2.4.0-SNAPSHOT", false),
            BootRelease::new("not-a-version", false),
            BootRelease::new("2.4.0-M1", false),
            BootRelease::new("2.3.2.RELEASE", true),
        ])
    }

    #[test]
    fn unparsable_versions_are_skipped() {
        let names: Vec<_> = sample()
            .boot_versions()
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, ["2.4.0 (SNAPSHOT)", "2.4.0 (M1)", "2.3.2"]);
    }

    #[test]
    fn default_is_the_current_release() {
        let default = sample().default_version().unwrap().unwrap();
        assert_eq!(default.id, "2.3.2.RELEASE");
    }

    #[test]
    fn resolve_by_id_or_name() {
        let svc = sample();
        assert_eq!(svc.resolve(Some("2.4.0-M1")).unwrap().name, "2.4.0 (M1)");
        assert_eq!(svc.resolve(Some("2.3.2")).unwrap().id, "2.3.2.RELEASE");
        assert_eq!(svc.resolve(None).unwrap().id, "2.3.2.RELEASE");
        assert!(matches!(
            svc.resolve(Some("1.0.0")),
            Err(SproutError::Domain(DomainError::UnknownBootVersion { .. }))
        ));
    }

    #[test]
    fn source_failure_propagates() {
        let mut source = MockBootMetadataSource::new();
        source.expect_releases().returning(|| {
            Err(ApplicationError::MetadataUnavailable {
                reason: "corrupt".into(),
            }
            .into())
        });
        let svc = MetadataService::new(Box::new(source));
        assert!(svc.boot_versions().is_err());
    }
}
