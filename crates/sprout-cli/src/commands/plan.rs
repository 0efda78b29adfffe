//! `sprout plan`: print the layout a generation would create.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use sprout_adapters::{EmbeddedResources, LocalFilesystem, SpringSourceWriter, catalog_loader};
use sprout_core::{
    application::{GenerationPlan, ScaffoldService},
    domain::ResourceId,
};
use tracing::instrument;

use super::TemplateSource;
use crate::{
    cli::{ListFormat, PlanArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(root = %args.root.display()))]
pub fn execute(args: PlanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = super::resolve_catalog(&args.project, &config)?;

    if args.export_catalog {
        if super::wants_json(args.format, &output) {
            return output.json("catalog", &catalog);
        }
        let text = catalog_loader::to_toml(&catalog)?;
        output.print(text.trim_end())?;
        return Ok(());
    }

    let description = super::project_builder(&args.project, &config, &args.root)?.build()?;

    // Planning performs no I/O; the adapters are only needed to build the service.
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(EmbeddedResources::new()),
        Box::new(SpringSourceWriter::new()),
    )
    .with_catalog(catalog);

    let plan = service.plan(&description);
    let sources = super::template_sources(
        &plan.files,
        args.resources
            .as_ref()
            .or(config.generation.resources_dir.as_ref()),
    )?;
    print_plan(&plan, &sources, args.format, &output)
}

#[derive(Debug, Serialize)]
struct PlanReport<'a> {
    #[serde(flatten)]
    plan: &'a GenerationPlan,
    templates: &'a BTreeMap<ResourceId, TemplateSource>,
}

/// Shared with `sprout new --dry-run`.
pub(crate) fn print_plan(
    plan: &GenerationPlan,
    sources: &BTreeMap<ResourceId, TemplateSource>,
    format: ListFormat,
    output: &OutputManager,
) -> CliResult<()> {
    if super::wants_json(format, output) {
        return output.json(
            "plan",
            &PlanReport {
                plan,
                templates: sources,
            },
        );
    }

    output.header("Main class:")?;
    output.print(&format!("  {}", plan.main_source.display()))?;

    output.print("")?;
    output.header(&format!("Directories ({}):", plan.directories.len()))?;
    for dir in &plan.directories {
        output.print(&format!("  {}", dir.display()))?;
    }

    output.print("")?;
    output.header(&format!("Files ({}):", plan.files.len()))?;
    for (resource, destination) in plan.files.sorted() {
        output.print(&file_line(resource, destination, sources.get(resource)))?;
    }

    let missing = sources
        .values()
        .filter(|s| **s == TemplateSource::Missing)
        .count();
    if missing > 0 {
        output.warning(&format!("{missing} template(s) have no source and would not be copied"))?;
    }

    Ok(())
}

fn file_line(resource: &ResourceId, destination: &Path, source: Option<&TemplateSource>) -> String {
    match source {
        Some(source) => format!("  {}  <-  {}  [{}]", destination.display(), resource, source),
        None => format!("  {}  <-  {}", destination.display(), resource),
    }
}
