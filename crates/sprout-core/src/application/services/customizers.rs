//! Customizers for the generated main application class.
//!
//! Customizers run in registration order against the same
//! [`CompilationUnit`]; a later customizer sees (and may override) what an
//! earlier one added.

use crate::domain::{Annotation, AnnotationValue, CompilationUnit, ProjectDescription};

pub const SPRING_BOOT_APPLICATION: &str =
    "org.springframework.boot.autoconfigure.SpringBootApplication";
pub const MAPPER_SCAN: &str = "tk.mybatis.spring.annotation.MapperScan";

/// Hook that edits the main type before it is rendered.
pub trait MainTypeCustomizer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn customize(&self, unit: &mut CompilationUnit, description: &ProjectDescription);
}

/// Marks the main type with `@SpringBootApplication`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpringBootApplicationCustomizer;

impl MainTypeCustomizer for SpringBootApplicationCustomizer {
    fn name(&self) -> &'static str {
        "spring-boot-application"
    }

    fn customize(&self, unit: &mut CompilationUnit, _description: &ProjectDescription) {
        unit.type_declaration_mut()
            .annotate(Annotation::new(SPRING_BOOT_APPLICATION));
    }
}

/// Adds `@MapperScan` covering the `dao` package and everything below it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MapperScanCustomizer;

impl MainTypeCustomizer for MapperScanCustomizer {
    fn name(&self) -> &'static str {
        "mapper-scan"
    }

    fn customize(&self, unit: &mut CompilationUnit, description: &ProjectDescription) {
        let package = description.package();
        let scan = Annotation::new(MAPPER_SCAN).with_attribute(
            "basePackages",
            AnnotationValue::StringArray(vec![
                package.qualify("dao"),
                package.qualify("dao.**"),
            ]),
        );
        unit.type_declaration_mut().annotate(scan);
    }
}

/// The customizers every generated project gets, in order.
pub fn default_customizers() -> Vec<Box<dyn MainTypeCustomizer>> {
    vec![
        Box::new(SpringBootApplicationCustomizer),
        Box::new(MapperScanCustomizer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description() -> ProjectDescription {
        ProjectDescription::builder()
            .package("com.acme.app")
            .root("/work/acme")
            .build()
            .unwrap()
    }

    fn customized() -> CompilationUnit {
        let desc = description();
        let mut unit =
            CompilationUnit::new(desc.package().clone(), desc.application_name().clone());
        for c in default_customizers() {
            c.customize(&mut unit, &desc);
        }
        unit
    }

    #[test]
    fn defaults_run_in_order() {
        let unit = customized();
        let names: Vec<_> = unit
            .type_declaration()
            .annotations()
            .iter()
            .map(|a| a.simple_name())
            .collect();
        assert_eq!(names, ["SpringBootApplication", "MapperScan"]);
    }

    #[test]
    fn mapper_scan_covers_dao_packages() {
        let unit = customized();
        let scan = &unit.type_declaration().annotations()[1];
        assert_eq!(
            scan.attributes(),
            [(
                "basePackages".to_string(),
                AnnotationValue::StringArray(vec![
                    "com.acme.app.dao".into(),
                    "com.acme.app.dao.**".into()
                ])
            )]
        );
    }
}
