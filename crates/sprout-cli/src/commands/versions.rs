//! `sprout versions`: list the Spring Boot versions from the bundled metadata.

use sprout_adapters::FixtureMetadataSource;
use sprout_core::application::MetadataService;

use crate::{cli::VersionsArgs, error::CliResult, output::OutputManager};

pub fn execute(args: VersionsArgs, output: OutputManager) -> CliResult<()> {
    let service = MetadataService::new(Box::new(FixtureMetadataSource::bundled()));
    let versions = service.boot_versions()?;

    if super::wants_json(args.format, &output) {
        return output.json("boot versions", &versions);
    }

    output.header("Spring Boot versions:")?;
    let width = versions.iter().map(|v| v.name.len()).max().unwrap_or(0);
    for version in &versions {
        let marker = if version.default { "  (default)" } else { "" };
        output.print(&format!(
            "  {:<width$}  {}{}",
            version.name, version.id, marker
        ))?;
    }
    Ok(())
}
