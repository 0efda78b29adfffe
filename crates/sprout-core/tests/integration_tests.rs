//! Integration tests for sprout-core, driven through the public ports with
//! small in-test fakes.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::{BufRead, Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use sprout_core::application::{ApplicationError, FailurePolicy, Materializer};
use sprout_core::domain::{LanguageId, ManifestBuilder, PackageName, ResourceId};
use sprout_core::error::SproutResult;
use sprout_core::prelude::*;

#[derive(Default, Clone)]
struct FakeFs {
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
    files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
}

struct Appender {
    path: PathBuf,
    files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
}

impl Write for Appender {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.files
            .lock()
            .unwrap()
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl FakeFs {
    fn read(&self, path: &Path) -> String {
        String::from_utf8(self.files.lock().unwrap()[path].clone()).unwrap()
    }
}

impl Filesystem for FakeFs {
    fn create_dir_all(&self, path: &Path) -> SproutResult<()> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn create_file(&self, path: &Path) -> SproutResult<()> {
        let parent = path.parent().unwrap_or(Path::new(""));
        if !self.dirs.lock().unwrap().contains(parent) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "parent missing".into(),
            }
            .into());
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), Vec::new());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SproutResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn open_append(&self, path: &Path) -> SproutResult<Box<dyn Write + Send>> {
        Ok(Box::new(Appender {
            path: path.to_path_buf(),
            files: Arc::clone(&self.files),
        }))
    }

    fn exists(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path) || self.files.lock().unwrap().contains_key(path)
    }
}

struct FakeResources(HashMap<String, String>);

impl ResourceLocator for FakeResources {
    fn locate(&self, id: &ResourceId) -> SproutResult<Box<dyn BufRead + Send>> {
        self.0
            .get(id.as_str())
            .map(|text| Box::new(Cursor::new(text.clone().into_bytes())) as Box<dyn BufRead + Send>)
            .ok_or_else(|| {
                ApplicationError::ResourceNotFound {
                    id: id.to_string(),
                }
                .into()
            })
    }
}

const RESP_CODE: &str = "package com.croot.demo.comm;\n\npublic enum RespCode {\n}\n";
const GENERATOR: &str = "<jdbcConnection connectionURL=\"jdbc:mysql://localhost/bs_demo_server\"/>\n";

fn builtin_resources() -> FakeResources {
    let mut map = HashMap::new();
    map.insert(
        "classpath:configuration/RespCode.java".to_string(),
        RESP_CODE.to_string(),
    );
    for name in [
        "generatorConfig.xml",
        "generatorConfigTk.xml",
        "Logback.xml",
        "mybatisGeneratorinit.properties",
    ] {
        map.insert(format!("classpath:configuration/{name}"), GENERATOR.to_string());
    }
    FakeResources(map)
}

fn inputs() -> (PathBuf, LanguageId, PackageName) {
    (
        PathBuf::from("/out/acme"),
        LanguageId::java(),
        PackageName::new("com.acme.app").unwrap(),
    )
}

#[test]
fn materializing_into_empty_tree_preserves_line_counts() {
    let fs = FakeFs::default();
    let res = builtin_resources();
    let (root, lang, pkg) = inputs();
    let builder = ManifestBuilder::default();
    let dirs = builder.directory_manifest(&root, &lang, &pkg);
    let files = builder.file_manifest(&root, &lang, &pkg);

    let report = Materializer::new(&fs, &res)
        .materialize(&dirs, &files, &pkg)
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.directories_created, 14);
    for dir in &dirs {
        assert!(fs.exists(dir));
    }

    let resp = root.join("src/main/java/com/acme/app/comm/RespCode.java");
    let text = fs.read(&resp);
    assert_eq!(text.lines().count(), RESP_CODE.lines().count());
    assert!(text.starts_with("package com.acme.app.comm;\n"));

    let logback = fs.read(&root.join("src/main/resources/Logback.xml"));
    assert!(logback.contains("bs_com.acme.app_server"));
}

#[test]
fn second_run_duplicates_file_content() {
    let fs = FakeFs::default();
    let res = builtin_resources();
    let (root, lang, pkg) = inputs();
    let builder = ManifestBuilder::default();
    let dirs = builder.directory_manifest(&root, &lang, &pkg);
    let files = builder.file_manifest(&root, &lang, &pkg);
    let materializer = Materializer::new(&fs, &res);

    materializer.materialize(&dirs, &files, &pkg).unwrap();
    let second = materializer.materialize(&dirs, &files, &pkg).unwrap();

    // Directories already existed; files were appended to again.
    assert_eq!(second.directories_created, 0);
    let resp = fs.read(&root.join("src/main/java/com/acme/app/comm/RespCode.java"));
    assert_eq!(resp.lines().count(), 2 * RESP_CODE.lines().count());
}

#[test]
fn missing_resource_does_not_stop_siblings_by_default() {
    let fs = FakeFs::default();
    let mut res = builtin_resources();
    res.0.remove("classpath:configuration/Logback.xml");
    let (root, lang, pkg) = inputs();
    let builder = ManifestBuilder::default();

    let report = Materializer::new(&fs, &res)
        .materialize(
            &builder.directory_manifest(&root, &lang, &pkg),
            &builder.file_manifest(&root, &lang, &pkg),
            &pkg,
        )
        .unwrap();

    assert_eq!(report.copied.len(), 4);
    assert_eq!(report.failures.len(), 1);
    // The destination was still created, empty.
    assert_eq!(fs.read(&root.join("src/main/resources/Logback.xml")), "");
}

#[test]
fn missing_resource_aborts_under_abort_policy() {
    let fs = FakeFs::default();
    let res = FakeResources(HashMap::new());
    let (root, lang, pkg) = inputs();
    let builder = ManifestBuilder::default();

    let result = Materializer::new(&fs, &res)
        .policy(FailurePolicy::Abort)
        .materialize(
            &builder.directory_manifest(&root, &lang, &pkg),
            &builder.file_manifest(&root, &lang, &pkg),
            &pkg,
        );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Copying"));
}
