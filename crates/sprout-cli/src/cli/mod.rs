//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use sprout_core::application::FailurePolicy;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprout",
    bin_name = "sprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Spring Boot project skeletons with package-aware boilerplate",
    long_about = "Sprout generates a Spring Boot project skeleton: the main application \
                  class, a conventional package layout, and configuration templates \
                  rewritten for your base package.",
    after_help = "EXAMPLES:\n\
        \x20 sprout new ./acme --package com.acme.app\n\
        \x20 sprout new ./acme --package com.acme.app --lang kotlin --build gradle --dialect kotlin\n\
        \x20 sprout plan --package com.acme.app --format json\n\
        \x20 sprout versions\n\
        \x20 sprout completions bash > /usr/share/bash-completion/completions/sprout",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project.
    #[command(
        visible_alias = "n",
        about = "Generate a new Spring Boot project",
        after_help = "EXAMPLES:\n\
            \x20 sprout new ./acme --package com.acme.app --yes\n\
            \x20 sprout new ./acme --package com.acme.app --dry-run\n\
            \x20 sprout new ./acme --package com.acme.app --resources ./my-templates --on-copy-error abort"
    )]
    New(NewArgs),

    /// Show the directories and files a generation would create.
    #[command(
        visible_alias = "p",
        about = "Preview the generated layout without writing",
        after_help = "EXAMPLES:\n\
            \x20 sprout plan --package com.acme.app\n\
            \x20 sprout plan --package com.acme.app --lang kotlin --root ./acme --format json\n\
            \x20 sprout plan --package com.acme.app --resources ./my-templates\n\
            \x20 sprout plan --export-catalog > catalog.toml"
    )]
    Plan(PlanArgs),

    /// List the Spring Boot versions Sprout knows about.
    #[command(
        visible_alias = "ls",
        about = "List available Spring Boot versions",
        after_help = "EXAMPLES:\n\
            \x20 sprout versions\n\
            \x20 sprout versions --format json"
    )]
    Versions(VersionsArgs),

    /// Initialise a Sprout configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 sprout init           # user config directory\n\
            \x20 sprout init --local   # .sprout.toml in the current directory\n\
            \x20 sprout init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprout completions bash > ~/.local/share/bash-completion/completions/sprout\n\
            \x20 sprout completions zsh  > ~/.zfunc/_sprout\n\
            \x20 sprout completions fish > ~/.config/fish/completions/sprout.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Sprout configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sprout config get defaults.package\n\
            \x20 sprout config list\n\
            \x20 sprout config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `sprout new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Directory to generate the project into.  Created if missing.
    #[arg(value_name = "DIR", help = "Project directory")]
    pub dir: PathBuf,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Build system id.
    #[arg(
        short = 'b',
        long = "build",
        value_name = "BUILD",
        help = "Build system (maven, gradle)"
    )]
    pub build: Option<String>,

    /// Gradle build script dialect.
    #[arg(
        long = "dialect",
        value_name = "DIALECT",
        requires = "build",
        help = "Gradle dialect (groovy, kotlin)"
    )]
    pub dialect: Option<String>,

    /// Name of the main application class.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Application class name (default: DemoApplication)"
    )]
    pub name: Option<String>,

    /// Spring Boot version, by id or display name.
    #[arg(
        long = "boot-version",
        value_name = "VERSION",
        help = "Spring Boot version (see `sprout versions`)"
    )]
    pub boot_version: Option<String>,

    /// Directory whose files override the bundled templates.
    #[arg(
        long = "resources",
        value_name = "DIR",
        help = "Template override directory"
    )]
    pub resources: Option<PathBuf>,

    /// What to do when a single template cannot be copied.
    #[arg(
        long = "on-copy-error",
        value_name = "POLICY",
        value_enum,
        help = "Policy for per-template copy failures"
    )]
    pub on_copy_error: Option<CopyErrorPolicy>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Generate into a non-empty directory.
    #[arg(
        long = "force",
        help = "Generate into a non-empty directory (templates are appended to)"
    )]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Arguments shared by `new` and `plan`.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Base package of the generated code.
    #[arg(
        short = 'p',
        long = "package",
        value_name = "PACKAGE",
        help = "Base package, e.g. com.acme.app"
    )]
    pub package: Option<String>,

    /// Source language.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        help = "Source language (java, kotlin, groovy)"
    )]
    pub language: Option<String>,

    /// TOML catalog replacing the built-in directory and file lists.
    #[arg(
        long = "catalog",
        value_name = "FILE",
        help = "Manifest catalog file"
    )]
    pub catalog: Option<PathBuf>,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprout plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Project root the paths are computed against.
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root"
    )]
    pub root: PathBuf,

    /// Directory whose files override the bundled templates.
    #[arg(
        long = "resources",
        value_name = "DIR",
        help = "Template override directory"
    )]
    pub resources: Option<PathBuf>,

    /// Print the active catalog as TOML instead of the plan.
    #[arg(
        long = "export-catalog",
        help = "Print the catalog as TOML (a starting point for --catalog)"
    )]
    pub export_catalog: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

// ── versions ──────────────────────────────────────────────────────────────────

/// Arguments for `sprout versions`.
#[derive(Debug, Args)]
pub struct VersionsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON document.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprout init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.sprout.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprout completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sprout config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.package`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Per-template copy failure policy, as accepted on the command line and in
/// the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyErrorPolicy {
    /// Warn and keep copying the remaining templates.
    #[default]
    Continue,
    /// Stop at the first failure.
    Abort,
}

impl From<CopyErrorPolicy> for FailurePolicy {
    fn from(policy: CopyErrorPolicy) -> Self {
        match policy {
            CopyErrorPolicy::Continue => FailurePolicy::Continue,
            CopyErrorPolicy::Abort => FailurePolicy::Abort,
        }
    }
}

impl std::fmt::Display for CopyErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
