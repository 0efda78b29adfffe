//! End-to-end generation through the real adapters.

use std::path::Path;

use sprout_adapters::{
    EmbeddedResources, InMemoryResources, LocalFilesystem, MemoryFilesystem, SpringSourceWriter,
    resources::DirectoryResources,
};
use sprout_core::application::{FailurePolicy, ScaffoldService};
use sprout_core::domain::ProjectDescription;
use tempfile::TempDir;

fn description(root: &Path) -> ProjectDescription {
    ProjectDescription::builder()
        .package("com.acme.app")
        .root(root)
        .build()
        .unwrap()
}

#[test]
fn generates_full_tree_on_disk() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("acme");
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(EmbeddedResources::new()),
        Box::new(SpringSourceWriter::new()),
    );

    let report = service.generate(&description(&root)).unwrap();
    assert!(report.materialized.is_complete());
    assert_eq!(report.materialized.copied.len(), 5);

    let pkg_root = root.join("src/main/java/com/acme/app");
    for dir in ["comm/config", "controller", "dao", "global/enums", "rest/response", "utils"] {
        assert!(pkg_root.join(dir).is_dir(), "{dir} missing");
    }
    assert!(root.join("src/main/resources/mappers").is_dir());

    let main = std::fs::read_to_string(pkg_root.join("DemoApplication.java")).unwrap();
    assert!(main.contains("@MapperScan(basePackages = {\"com.acme.app.dao\", \"com.acme.app.dao.**\"})"));

    let resp = std::fs::read_to_string(pkg_root.join("comm/RespCode.java")).unwrap();
    assert!(resp.starts_with("package com.acme.app.comm;\n"));
    assert_eq!(
        resp.lines().count(),
        sprout_adapters::resources::EmbeddedResources::get(&"classpath:configuration/RespCode.java".into())
            .unwrap()
            .lines()
            .count()
    );

    let generator =
        std::fs::read_to_string(root.join("src/main/resources/generatorConfig.xml")).unwrap();
    assert!(generator.contains("targetPackage=\"com.acme.app.dao\""));
    assert!(generator.contains("/bs_com.acme.app_server\""));
    assert!(!generator.contains("com.croot.demo"));
}

#[test]
fn regenerating_duplicates_templates_but_not_main_class() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(EmbeddedResources::new()),
        Box::new(SpringSourceWriter::new()),
    );
    let desc = description(Path::new("/out/acme"));

    service.generate(&desc).unwrap();
    let main_once = fs.read_file(&desc.main_source_path()).unwrap();
    let props = Path::new("/out/acme/src/main/resources/mybatisGeneratorinit.properties");
    let props_once = fs.read_file(props).unwrap();

    service.generate(&desc).unwrap();

    assert_eq!(fs.read_file(&desc.main_source_path()).unwrap(), main_once);
    assert_eq!(fs.read_file(props).unwrap(), props_once.repeat(2));
}

#[test]
fn directory_override_with_embedded_fallback() {
    let temp = TempDir::new().unwrap();
    let overrides = temp.path().join("templates");
    std::fs::create_dir_all(overrides.join("configuration")).unwrap();
    std::fs::write(
        overrides.join("configuration/Logback.xml"),
        "<!-- custom for bs_demo_server -->\n",
    )
    .unwrap();

    let fs = MemoryFilesystem::new();
    let resources =
        DirectoryResources::new(&overrides).with_fallback(Box::new(EmbeddedResources::new()));
    let service = ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(resources),
        Box::new(SpringSourceWriter::new()),
    );

    let report = service.generate(&description(Path::new("/p"))).unwrap();
    assert!(report.materialized.is_complete());
    assert_eq!(
        fs.read_file(Path::new("/p/src/main/resources/Logback.xml")).unwrap(),
        "<!-- custom for bs_com.acme.app_server -->\n"
    );
}

#[test]
fn missing_template_is_reported_and_siblings_are_copied() {
    let fs = MemoryFilesystem::new();
    let resources = InMemoryResources::new().with(
        "classpath:configuration/RespCode.java",
        "package com.croot.demo.comm;\n",
    );
    let service = ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(resources),
        Box::new(SpringSourceWriter::new()),
    )
    .with_policy(FailurePolicy::Continue);

    let report = service.generate(&description(Path::new("/p"))).unwrap();
    assert_eq!(report.materialized.copied.len(), 1);
    assert_eq!(report.materialized.failures.len(), 4);
    assert_eq!(
        fs.read_file(Path::new("/p/src/main/java/com/acme/app/comm/RespCode.java")).unwrap(),
        "package com.acme.app.comm;\n"
    );
}
