//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Build and customize the main application class
//! 2. Render it and write it below the package root
//! 3. Build the directory and file manifests
//! 4. Materialize them through the [`Materializer`]

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, ResourceLocator, SourceCodeWriter},
        services::{
            customizers::{MainTypeCustomizer, default_customizers},
            materializer::{FailurePolicy, MaterializeReport, Materializer},
        },
    },
    domain::{
        CompilationUnit, DirectoryManifest, FileManifest, ManifestBuilder, ManifestCatalog,
        ProjectDescription,
    },
    error::SproutResult,
};

/// What a generation run would touch, computed without I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    pub main_source: PathBuf,
    pub directories: DirectoryManifest,
    pub files: FileManifest,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub main_source: PathBuf,
    pub materialized: MaterializeReport,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    resources: Box<dyn ResourceLocator>,
    writer: Box<dyn SourceCodeWriter>,
    manifests: ManifestBuilder,
    customizers: Vec<Box<dyn MainTypeCustomizer>>,
    policy: FailurePolicy,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use sprout_core::application::{ScaffoldService, ports::*};
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     resources,  // impl ResourceLocator
    ///     writer,     // impl SourceCodeWriter
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        resources: Box<dyn ResourceLocator>,
        writer: Box<dyn SourceCodeWriter>,
    ) -> Self {
        Self {
            filesystem,
            resources,
            writer,
            manifests: ManifestBuilder::default(),
            customizers: default_customizers(),
            policy: FailurePolicy::default(),
        }
    }

    /// Use `catalog` instead of the built-in one.
    pub fn with_catalog(mut self, catalog: ManifestCatalog) -> Self {
        self.manifests = ManifestBuilder::new(catalog);
        self
    }

    /// Register an extra customizer after the existing ones.
    pub fn with_customizer(mut self, customizer: Box<dyn MainTypeCustomizer>) -> Self {
        self.customizers.push(customizer);
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Generate the project described by `description`.
    ///
    /// The main class is rendered before anything is written, so an
    /// unsupported language fails without touching the disk.
    #[instrument(
        skip_all,
        fields(
            project = %description,
            root = %description.root().display()
        )
    )]
    pub fn generate(&self, description: &ProjectDescription) -> SproutResult<GenerationReport> {
        info!("Generating project");

        let unit = self.main_compilation_unit(description);
        let source = self.writer.render(&unit, description.language())?;

        let main_source = description.main_source_path();
        if let Some(parent) = main_source.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&main_source, &source)?;
        debug!(path = %main_source.display(), "Main class written");

        let plan = self.plan(description);
        let materialized = Materializer::new(self.filesystem.as_ref(), self.resources.as_ref())
            .policy(self.policy)
            .materialize(&plan.directories, &plan.files, description.package())?;

        info!(
            complete = materialized.is_complete(),
            "Project generated"
        );
        Ok(GenerationReport {
            main_source,
            materialized,
        })
    }

    /// Compute paths for `description` without any I/O.
    pub fn plan(&self, description: &ProjectDescription) -> GenerationPlan {
        let (root, language, package) = (
            description.root(),
            description.language(),
            description.package(),
        );
        let manifests = self
            .manifests
            .clone()
            .with_build_system(description.build_system());
        GenerationPlan {
            main_source: description.main_source_path(),
            directories: manifests.directory_manifest(root, language, package),
            files: manifests.file_manifest(root, language, package),
        }
    }

    /// Render the main class without writing it.
    pub fn render_main(&self, description: &ProjectDescription) -> SproutResult<String> {
        let unit = self.main_compilation_unit(description);
        self.writer.render(&unit, description.language())
    }

    fn main_compilation_unit(&self, description: &ProjectDescription) -> CompilationUnit {
        let mut unit = CompilationUnit::new(
            description.package().clone(),
            description.application_name().clone(),
        );
        for customizer in &self.customizers {
            debug!(customizer = customizer.name(), "Applying customizer");
            customizer.customize(&mut unit, description);
        }
        unit
    }
}
