//! Renders the main application class as Java, Kotlin or Groovy.

use sprout_core::{
    application::ports::SourceCodeWriter,
    domain::{Annotation, AnnotationValue, CompilationUnit, DomainError, LanguageId},
    error::SproutResult,
};
use tracing::instrument;

const SPRING_APPLICATION: &str = "org.springframework.boot.SpringApplication";
const RUN_APPLICATION: &str = "org.springframework.boot.runApplication";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    Java,
    Kotlin,
    Groovy,
}

impl Dialect {
    fn for_language(language: &LanguageId) -> Option<Self> {
        match language.as_str() {
            LanguageId::JAVA => Some(Self::Java),
            LanguageId::KOTLIN => Some(Self::Kotlin),
            LanguageId::GROOVY => Some(Self::Groovy),
            _ => None,
        }
    }

    fn terminator(self) -> &'static str {
        match self {
            Self::Java => ";",
            Self::Kotlin | Self::Groovy => "",
        }
    }

    fn array(self, items: &[String]) -> String {
        let quoted: Vec<_> = items.iter().map(|s| quote(s)).collect();
        match self {
            Self::Java => format!("{{{}}}", quoted.join(", ")),
            Self::Kotlin | Self::Groovy => format!("[{}]", quoted.join(", ")),
        }
    }
}

/// [`SourceCodeWriter`] for the JVM languages Spring Boot supports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpringSourceWriter;

impl SpringSourceWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn supports(language: &LanguageId) -> bool {
        Dialect::for_language(language).is_some()
    }
}

impl SourceCodeWriter for SpringSourceWriter {
    #[instrument(skip_all, fields(language = %language))]
    fn render(&self, unit: &CompilationUnit, language: &LanguageId) -> SproutResult<String> {
        let dialect =
            Dialect::for_language(language).ok_or_else(|| DomainError::UnsupportedLanguage {
                language: language.to_string(),
            })?;
        Ok(render(unit, dialect))
    }
}

fn render(unit: &CompilationUnit, dialect: Dialect) -> String {
    let td = unit.type_declaration();
    let name = td.name().as_str();
    let term = dialect.terminator();
    let mut lines = vec![format!("package {}{term}", unit.package()), String::new()];

    let mut imports = unit.imports();
    if dialect == Dialect::Kotlin {
        for import in imports.iter_mut() {
            if import == SPRING_APPLICATION {
                *import = RUN_APPLICATION.to_string();
            }
        }
        imports.sort();
    }
    if !imports.is_empty() {
        lines.extend(imports.iter().map(|import| format!("import {import}{term}")));
        lines.push(String::new());
    }

    lines.extend(
        td.annotations()
            .iter()
            .map(|annotation| render_annotation(annotation, dialect)),
    );

    match dialect {
        Dialect::Java => {
            lines.push(format!("public class {name} {{"));
            if td.has_main_method() {
                lines.extend([
                    String::new(),
                    "    public static void main(String[] args) {".into(),
                    format!("        SpringApplication.run({name}.class, args);"),
                    "    }".into(),
                    String::new(),
                ]);
            }
            lines.push("}".into());
        }
        Dialect::Groovy => {
            lines.push(format!("class {name} {{"));
            if td.has_main_method() {
                lines.extend([
                    String::new(),
                    "    static void main(String[] args) {".into(),
                    format!("        SpringApplication.run({name}, args)"),
                    "    }".into(),
                    String::new(),
                ]);
            }
            lines.push("}".into());
        }
        Dialect::Kotlin => {
            lines.push(format!("class {name}"));
            if td.has_main_method() {
                lines.extend([
                    String::new(),
                    "fun main(args: Array<String>) {".into(),
                    format!("    runApplication<{name}>(*args)"),
                    "}".into(),
                ]);
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_annotation(annotation: &Annotation, dialect: Dialect) -> String {
    let attributes = annotation.attributes();
    let name = annotation.simple_name();
    if attributes.is_empty() {
        return format!("@{name}");
    }

    let value = |v: &AnnotationValue| match v {
        AnnotationValue::String(s) => quote(s),
        AnnotationValue::StringArray(items) => dialect.array(items),
    };

    if let [(key, v)] = attributes {
        if key == "value" {
            return format!("@{name}({})", value(v));
        }
    }

    let rendered: Vec<_> = attributes
        .iter()
        .map(|(key, v)| format!("{key} = {}", value(v)))
        .collect();
    format!("@{name}({})", rendered.join(", "))
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::application::services::default_customizers;
    use sprout_core::domain::ProjectDescription;

    fn unit() -> CompilationUnit {
        let desc = ProjectDescription::builder()
            .package("com.acme.app")
            .root("/work")
            .build()
            .unwrap();
        let mut unit =
            CompilationUnit::new(desc.package().clone(), desc.application_name().clone());
        for c in default_customizers() {
            c.customize(&mut unit, &desc);
        }
        unit
    }

    fn render_as(lang: &str) -> String {
        SpringSourceWriter::new()
            .render(&unit(), &LanguageId::new(lang).unwrap())
            .unwrap()
    }

    #[test]
    fn java_main_class() {
        let expected = "\
package com.acme.app;

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;
import tk.mybatis.spring.annotation.MapperScan;

@SpringBootApplication
@MapperScan(basePackages = {\"com.acme.app.dao\", \"com.acme.app.dao.**\"})
public class DemoApplication {

    public static void main(String[] args) {
        SpringApplication.run(DemoApplication.class, args);
    }

}
";
        assert_eq!(render_as("java"), expected);
    }

    #[test]
    fn kotlin_main_function() {
        let out = render_as("kotlin");
        assert!(out.starts_with("package com.acme.app\n"));
        assert!(out.contains("import org.springframework.boot.runApplication\n"));
        assert!(!out.contains("SpringApplication\n"));
        assert!(out.contains("@MapperScan(basePackages = [\"com.acme.app.dao\", \"com.acme.app.dao.**\"])"));
        assert!(out.contains("class DemoApplication\n"));
        assert!(out.contains("runApplication<DemoApplication>(*args)"));
    }

    #[test]
    fn kotlin_file_layout() {
        let expected = "\
package com.acme.app

import org.springframework.boot.autoconfigure.SpringBootApplication
import org.springframework.boot.runApplication
import tk.mybatis.spring.annotation.MapperScan

@SpringBootApplication
@MapperScan(basePackages = [\"com.acme.app.dao\", \"com.acme.app.dao.**\"])
class DemoApplication

fun main(args: Array<String>) {
    runApplication<DemoApplication>(*args)
}
";
        assert_eq!(render_as("kotlin"), expected);
    }

    #[test]
    fn groovy_main_method() {
        let out = render_as("groovy");
        assert!(out.contains("import tk.mybatis.spring.annotation.MapperScan\n"));
        assert!(out.contains("SpringApplication.run(DemoApplication, args)"));
        assert!(!out.contains(';'));
    }

    #[test]
    fn unsupported_language_is_rejected() {
        let err = SpringSourceWriter::new()
            .render(&unit(), &LanguageId::new("scala").unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("scala"));
        assert!(!SpringSourceWriter::supports(&LanguageId::new("scala").unwrap()));
    }

    #[test]
    fn value_attribute_is_shorthand() {
        let a = Annotation::new("x.Y").with_attribute("value", AnnotationValue::String("a\"b".into()));
        assert_eq!(render_annotation(&a, Dialect::Java), "@Y(\"a\\\"b\")");
    }
}
