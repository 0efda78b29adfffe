//! Templates read from a directory on disk.
//!
//! The directory mirrors the `classpath:` layout, e.g. the resource
//! `classpath:configuration/Logback.xml` lives at
//! `<root>/configuration/Logback.xml`. Resources missing from the directory
//! can be served by a fallback locator, typically [`super::EmbeddedResources`].

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use sprout_core::{
    application::{ApplicationError, ports::ResourceLocator},
    domain::ResourceId,
    error::SproutResult,
};
use tracing::{debug, instrument};
use walkdir::WalkDir;

use super::not_found;

pub struct DirectoryResources {
    root: PathBuf,
    fallback: Option<Box<dyn ResourceLocator>>,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: None,
        }
    }

    /// Serve resources missing from the directory from `fallback`.
    pub fn with_fallback(mut self, fallback: Box<dyn ResourceLocator>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every regular file below the root, as `classpath:` identifiers, sorted.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn list(&self) -> SproutResult<Vec<ResourceId>> {
        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: self.root.clone(),
                reason: format!("directory walk error: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let location = rel.to_string_lossy().replace('\\', "/");
            ids.push(ResourceId::new(format!(
                "{}{location}",
                ResourceId::CLASSPATH_PREFIX
            )));
        }
        ids.sort();
        debug!(count = ids.len(), "Listed directory resources");
        Ok(ids)
    }

    fn path_for(&self, id: &ResourceId) -> PathBuf {
        id.location()
            .split('/')
            .filter(|s| !s.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }
}

impl ResourceLocator for DirectoryResources {
    fn locate(&self, id: &ResourceId) -> SproutResult<Box<dyn BufRead + Send>> {
        let path = self.path_for(id);
        match File::open(&path) {
            Ok(file) if path.is_file() => Ok(Box::new(BufReader::new(file))),
            Ok(_) => Err(not_found(id)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => match &self.fallback {
                Some(fallback) => {
                    debug!(resource = %id, "Not in directory, using fallback");
                    fallback.locate(id)
                }
                None => Err(not_found(id)),
            },
            Err(e) => Err(ApplicationError::FilesystemError {
                path,
                reason: format!("Failed to open resource: {e}"),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::InMemoryResources;
    use std::fs;
    use std::io::Read;
    use tempfile::TempDir;

    fn make_dir(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (rel, content) in files {
            let full = temp.path().join(rel);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }
        temp
    }

    fn read(locator: &dyn ResourceLocator, id: &str) -> String {
        let mut out = String::new();
        locator
            .locate(&ResourceId::new(id))
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        out
    }

    #[test]
    fn locates_nested_classpath_resource() {
        let temp = make_dir(&[("configuration/Logback.xml", "<configuration/>\n")]);
        let res = DirectoryResources::new(temp.path());
        assert_eq!(read(&res, "classpath:configuration/Logback.xml"), "<configuration/>\n");
    }

    #[test]
    fn missing_without_fallback_is_not_found() {
        let temp = make_dir(&[]);
        let err = DirectoryResources::new(temp.path())
            .locate(&ResourceId::new("classpath:nope.txt"))
            .err()
            .unwrap();
        assert!(err.is_not_found());
    }

    #[test]
    fn directory_is_not_a_resource() {
        let temp = make_dir(&[("configuration/a.txt", "x")]);
        let err = DirectoryResources::new(temp.path())
            .locate(&ResourceId::new("classpath:configuration"))
            .err();
        assert!(err.is_some());
    }

    #[test]
    fn fallback_serves_missing_entries() {
        let temp = make_dir(&[("a.txt", "disk")]);
        let fallback = InMemoryResources::new().with("a.txt", "memory").with("b.txt", "memory");
        let res = DirectoryResources::new(temp.path()).with_fallback(Box::new(fallback));

        assert_eq!(read(&res, "classpath:a.txt"), "disk");
        assert_eq!(read(&res, "classpath:b.txt"), "memory");
    }

    #[test]
    fn list_returns_sorted_classpath_ids() {
        let temp = make_dir(&[
            ("configuration/z.xml", ""),
            ("configuration/a.xml", ""),
            ("top.txt", ""),
        ]);
        let ids: Vec<String> = DirectoryResources::new(temp.path())
            .list()
            .unwrap()
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect();
        assert_eq!(
            ids,
            [
                "classpath:configuration/a.xml",
                "classpath:configuration/z.xml",
                "classpath:top.txt"
            ]
        );
    }
}
