//! Implementation of the `sprout new` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectDescription`, call
//! the core scaffold service, and display results. No business logic lives here.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use sprout_adapters::{FixtureMetadataSource, LocalFilesystem, SpringSourceWriter};
use sprout_core::{
    application::{CopiedFile, GenerationReport, MetadataService, ScaffoldService},
    domain::{BootVersion, ProjectDescription, ResourceId},
};

use crate::{
    cli::{CopyErrorPolicy, GlobalArgs, ListFormat, NewArgs, OutputFormat},
    commands::plan,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `sprout new` command.
///
/// Dispatch sequence:
/// 1. Resolve the boot version and build the project description
/// 2. Refuse a non-empty target directory unless `--force`
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Confirm with the user unless `--yes` or `--quiet`
/// 5. Generate via `ScaffoldService`
/// 6. Report copy failures as warnings and print next steps
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Description
    let metadata = MetadataService::new(Box::new(FixtureMetadataSource::bundled()));
    let boot = metadata.resolve(args.boot_version.as_deref())?;
    let description = build_description(&args, &config, &boot)?;
    debug!(%description, "Description resolved");

    let catalog = super::resolve_catalog(&args.project, &config)?;
    let resources_dir = args
        .resources
        .clone()
        .or_else(|| config.generation.resources_dir.clone());
    let resources = super::resource_locator(resources_dir.as_ref())?;
    let policy = args.on_copy_error.unwrap_or(config.generation.on_copy_error);

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        resources,
        Box::new(SpringSourceWriter::new()),
    )
    .with_catalog(catalog)
    .with_policy(policy.into());

    // 2. Target directory
    let occupied = has_content(&args.dir)?;

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would generate {} into {}",
            description,
            args.dir.display(),
        ))?;
        if occupied {
            output.warning(&format!(
                "{} is not empty; templates would be appended to existing files",
                args.dir.display()
            ))?;
        }
        let preview = service.plan(&description);
        let sources = super::template_sources(&preview.files, resources_dir.as_ref())?;
        return plan::print_plan(&preview, &sources, ListFormat::Table, &output);
    }

    if occupied && !args.force {
        return Err(CliError::ProjectNotEmpty { path: args.dir });
    }

    // 4. Show configuration and confirm
    if !args.yes && !global.quiet && output.format() != OutputFormat::Json {
        show_configuration(&description, &boot, policy, &output)?;
        if !output.confirm("Continue?")? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Generate
    info!(project = %description, "Generation started");
    let spinner = output.spinner("Generating project...");
    let result = service.generate(&description);
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let report = result?;
    info!(
        copied = report.materialized.copied.len(),
        failed = report.materialized.failures.len(),
        "Generation completed"
    );

    // 6. Results
    for failure in &report.materialized.failures {
        warn!(resource = %failure.resource, error = %failure.error, "Template not copied");
        output.warning(&format!(
            "{} was not copied: {}",
            failure.destination.display(),
            failure.error
        ))?;
    }

    if output.format() == OutputFormat::Json {
        return output.json(
            "generation report",
            &GenerationSummary::new(&description, &boot, &report),
        );
    }

    output.success(&format!(
        "Project created in {} ({} templates, {} lines)",
        description.root().display(),
        report.materialized.copied.len(),
        report.materialized.lines_written(),
    ))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", description.root().display()))?;
        output.print("  # Point src/main/resources/generatorConfig.xml at your database")?;
    }

    Ok(())
}

// ── Description ───────────────────────────────────────────────────────────────

fn build_description(
    args: &NewArgs,
    config: &AppConfig,
    boot: &BootVersion,
) -> CliResult<ProjectDescription> {
    let mut builder =
        super::project_builder(&args.project, config, &args.dir)?.boot_version(boot.id.clone());

    if let Some(build) = args.build.as_ref().or(config.defaults.build_system.as_ref()) {
        builder = builder.build_system(build.clone());
    }
    if let Some(dialect) = &args.dialect {
        builder = builder.dialect(dialect.clone());
    }
    if let Some(name) = args
        .name
        .as_ref()
        .or(config.defaults.application_name.as_ref())
    {
        builder = builder.application_name(name.clone());
    }

    Ok(builder.build()?)
}

/// `true` if `dir` exists and has at least one entry.
fn has_content(dir: &Path) -> CliResult<bool> {
    if !dir.exists() {
        return Ok(false);
    }
    if !dir.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' exists and is not a directory", dir.display()),
            source: None,
        });
    }
    let mut entries = std::fs::read_dir(dir)
        .with_cli_context(|| format!("Failed to read directory '{}'", dir.display()))?;
    Ok(entries.next().is_some())
}

// ── JSON report ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerationSummary<'a> {
    root: &'a Path,
    package: &'a str,
    boot_version: &'a str,
    main_source: &'a Path,
    directories_created: usize,
    copied: &'a [CopiedFile],
    failures: Vec<FailureSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct FailureSummary<'a> {
    resource: &'a ResourceId,
    destination: &'a Path,
    error: String,
}

impl<'a> GenerationSummary<'a> {
    fn new(
        description: &'a ProjectDescription,
        boot: &'a BootVersion,
        report: &'a GenerationReport,
    ) -> Self {
        Self {
            root: description.root(),
            package: description.package().as_str(),
            boot_version: &boot.id,
            main_source: &report.main_source,
            directories_created: report.materialized.directories_created,
            copied: &report.materialized.copied,
            failures: report
                .materialized
                .failures
                .iter()
                .map(|f| FailureSummary {
                    resource: &f.resource,
                    destination: &f.destination,
                    error: f.error.to_string(),
                })
                .collect(),
        }
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    description: &ProjectDescription,
    boot: &BootVersion,
    policy: CopyErrorPolicy,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Package:      {}", description.package()))?;
    out.print(&format!("  Language:     {}", description.language()))?;
    out.print(&format!("  Build:        {}", description.build_system()))?;
    out.print(&format!("  Main class:   {}", description.application_name()))?;
    out.print(&format!("  Spring Boot:  {}", boot.name))?;
    out.print(&format!("  On error:     {policy}"))?;
    out.print(&format!("  Location:     {}", description.root().display()))?;
    out.print("")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use tempfile::TempDir;

    fn new_args(argv: &[&str]) -> NewArgs {
        let mut full = vec!["sprout", "new"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::New(args) => args,
            _ => panic!("expected New command"),
        }
    }

    fn boot() -> BootVersion {
        BootVersion {
            id: "2.3.2.RELEASE".into(),
            name: "2.3.2".into(),
            default: true,
        }
    }

    // ── build_description ─────────────────────────────────────────────────

    #[test]
    fn flags_become_description() {
        let args = new_args(&[
            "./acme",
            "-p",
            "com.acme.app",
            "--lang",
            "kotlin",
            "--build",
            "gradle",
            "--dialect",
            "kotlin",
            "--name",
            "AcmeApplication",
        ]);
        let desc = build_description(&args, &AppConfig::default(), &boot()).unwrap();

        assert_eq!(desc.package().as_str(), "com.acme.app");
        assert_eq!(desc.language().as_str(), "kotlin");
        assert_eq!(desc.build_system().to_string(), "gradle (kotlin)");
        assert_eq!(desc.application_name().as_str(), "AcmeApplication");
        assert_eq!(desc.boot_version(), Some("2.3.2.RELEASE"));
        assert_eq!(desc.root(), Path::new("./acme"));
    }

    #[test]
    fn config_defaults_fill_the_gaps() {
        let args = new_args(&["./acme", "-p", "com.acme.app"]);
        let desc = build_description(&args, &AppConfig::default(), &boot()).unwrap();
        assert_eq!(desc.language().as_str(), "java");
        assert_eq!(desc.build_system().to_string(), "maven");
        assert_eq!(desc.application_name().as_str(), "DemoApplication");
    }

    #[test]
    fn unknown_build_system_is_a_user_error() {
        let args = new_args(&["./acme", "-p", "com.acme.app", "--build", "ant"]);
        let err = build_description(&args, &AppConfig::default(), &boot()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    // ── has_content ───────────────────────────────────────────────────────

    #[test]
    fn missing_and_empty_dirs_are_free() {
        let temp = TempDir::new().unwrap();
        assert!(!has_content(&temp.path().join("new")).unwrap());
        assert!(!has_content(temp.path()).unwrap());
    }

    #[test]
    fn dir_with_files_is_occupied() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pom.xml"), "<project/>").unwrap();
        assert!(has_content(temp.path()).unwrap());
    }

    #[test]
    fn file_target_is_rejected() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(
            has_content(&file),
            Err(CliError::InvalidInput { .. })
        ));
    }
}
