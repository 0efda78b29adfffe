//! Template materializer - executes manifests against a filesystem.
//!
//! Directories are created first, then every file of the manifest is
//! prepared (empty file + parents) and filled by streaming the template
//! resource through the [`TokenFilter`], one line at a time, in append mode.
//!
//! Appending is not idempotent: running twice onto the same destination
//! duplicates its content. Callers that may re-run against an existing tree
//! are expected to guard against that themselves.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, CopyError,
        ports::{Filesystem, ResourceLocator},
    },
    domain::{DirectoryManifest, FileManifest, PackageName, ResourceId, TokenFilter},
    error::SproutResult,
};

/// What to do when copying a single resource fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log a warning, record the failure and continue with the next file.
    #[default]
    Continue,
    /// Stop at the first failure with `ApplicationError::CopyAborted`.
    Abort,
}

/// A resource that was copied successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedFile {
    pub resource: ResourceId,
    pub destination: PathBuf,
    pub lines: usize,
}

/// A resource that could not be copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    pub resource: ResourceId,
    pub destination: PathBuf,
    pub error: CopyError,
}

/// Outcome of one `materialize` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories_created: usize,
    pub copied: Vec<CopiedFile>,
    pub failures: Vec<CopyFailure>,
}

impl MaterializeReport {
    /// `true` when every resource was copied.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn lines_written(&self) -> usize {
        self.copied.iter().map(|c| c.lines).sum()
    }
}

pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
    resources: &'a dyn ResourceLocator,
    policy: FailurePolicy,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, resources: &'a dyn ResourceLocator) -> Self {
        Self {
            filesystem,
            resources,
            policy: FailurePolicy::default(),
        }
    }

    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Create every directory, then copy every file of the manifest.
    ///
    /// Directory and destination preparation failures abort the run. Copy
    /// failures are handled according to the [`FailurePolicy`]. Nothing is
    /// rolled back.
    #[instrument(
        skip_all,
        fields(
            package = %package,
            directories = directories.len(),
            files = files.len(),
            policy = ?self.policy
        )
    )]
    pub fn materialize(
        &self,
        directories: &DirectoryManifest,
        files: &FileManifest,
        package: &PackageName,
    ) -> SproutResult<MaterializeReport> {
        let mut report = MaterializeReport {
            directories_created: self.create_directories(directories)?,
            ..Default::default()
        };

        let filter = TokenFilter::new(package);

        for (resource, destination) in files.sorted() {
            self.prepare_destination(destination)?;

            match self.copy_resource(resource, destination, &filter) {
                Ok(lines) => {
                    debug!(resource = %resource, destination = %destination.display(), lines, "Copied");
                    report.copied.push(CopiedFile {
                        resource: resource.clone(),
                        destination: destination.clone(),
                        lines,
                    });
                }
                Err(error) => match self.policy {
                    FailurePolicy::Continue => {
                        warn!(resource = %resource, error = %error, "Copy failed, continuing");
                        report.failures.push(CopyFailure {
                            resource: resource.clone(),
                            destination: destination.clone(),
                            error,
                        });
                    }
                    FailurePolicy::Abort => {
                        return Err(ApplicationError::CopyAborted {
                            resource: resource.to_string(),
                            error,
                        }
                        .into());
                    }
                },
            }
        }

        info!(
            directories = report.directories_created,
            copied = report.copied.len(),
            failed = report.failures.len(),
            "Materialization finished"
        );
        Ok(report)
    }

    /// Create the directories that do not exist yet. Returns how many were created.
    pub fn create_directories(&self, directories: &DirectoryManifest) -> SproutResult<usize> {
        let mut created = 0;
        for dir in directories {
            if self.filesystem.exists(dir) {
                continue;
            }
            self.filesystem.create_dir_all(dir)?;
            created += 1;
        }
        Ok(created)
    }

    /// Stream one resource through `filter` and append it to `destination`.
    ///
    /// Returns the number of lines written. Every line is terminated with
    /// `\n`, including a final line that had no terminator in the template.
    pub fn copy_resource(
        &self,
        resource: &ResourceId,
        destination: &Path,
        filter: &TokenFilter<'_>,
    ) -> Result<usize, CopyError> {
        let mut reader = self.resources.locate(resource).map_err(|e| {
            if e.is_not_found() {
                CopyError::ResourceNotFound {
                    id: resource.to_string(),
                }
            } else {
                CopyError::Read {
                    reason: e.to_string(),
                }
            }
        })?;

        let write_err = |reason: String| CopyError::Write {
            path: destination.to_path_buf(),
            reason,
        };

        let mut writer = self
            .filesystem
            .open_append(destination)
            .map_err(|e| write_err(e.to_string()))?;

        let mut buf = Vec::new();
        let mut lines = 0;
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| CopyError::Read {
                    reason: e.to_string(),
                })?;
            if read == 0 {
                break;
            }
            lines += 1;

            let raw = strip_terminator(&buf);
            let line = std::str::from_utf8(raw).map_err(|_| CopyError::Encoding { line: lines })?;

            let mut out = filter.apply(line);
            out.push('\n');
            writer
                .write_all(out.as_bytes())
                .map_err(|e| write_err(e.to_string()))?;
        }

        writer.flush().map_err(|e| write_err(e.to_string()))?;
        Ok(lines)
    }

    fn prepare_destination(&self, destination: &Path) -> SproutResult<()> {
        if self.filesystem.exists(destination) {
            return Ok(());
        }
        if let Some(parent) = destination.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.create_file(destination)
    }
}

fn strip_terminator(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
