//! Language-neutral model of the generated entry-point class.
//!
//! Renderers in the adapter layer turn a [`CompilationUnit`] into Java,
//! Kotlin or Groovy text.

use std::collections::BTreeSet;

use crate::domain::value_objects::{ApplicationName, PackageName};

/// Value of a single annotation attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    String(String),
    StringArray(Vec<String>),
}

/// An annotation identified by its fully-qualified type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    attributes: Vec<(String, AnnotationValue)>,
}

impl Annotation {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            name: qualified_name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.attributes.push((name.into(), value));
        self
    }

    pub fn qualified_name(&self) -> &str {
        &self.name
    }

    /// `MapperScan` for `tk.mybatis.spring.annotation.MapperScan`.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Package part of the qualified name, if any.
    pub fn package(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(pkg, _)| pkg)
    }

    pub fn attributes(&self) -> &[(String, AnnotationValue)] {
        &self.attributes
    }
}

/// The single top-level type of a compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    name: ApplicationName,
    annotations: Vec<Annotation>,
    main_method: bool,
}

impl TypeDeclaration {
    pub fn new(name: ApplicationName) -> Self {
        Self {
            name,
            annotations: Vec::new(),
            main_method: true,
        }
    }

    pub fn name(&self) -> &ApplicationName {
        &self.name
    }

    /// Add an annotation, replacing an existing one of the same type.
    pub fn annotate(&mut self, annotation: Annotation) {
        match self
            .annotations
            .iter_mut()
            .find(|a| a.qualified_name() == annotation.qualified_name())
        {
            Some(existing) => *existing = annotation,
            None => self.annotations.push(annotation),
        }
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn has_annotation(&self, qualified_name: &str) -> bool {
        self.annotations
            .iter()
            .any(|a| a.qualified_name() == qualified_name)
    }

    /// Whether a `main` entry point that boots the application is emitted.
    pub fn has_main_method(&self) -> bool {
        self.main_method
    }

    pub fn set_main_method(&mut self, enabled: bool) {
        self.main_method = enabled;
    }
}

/// A source file: one package and one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    package: PackageName,
    type_declaration: TypeDeclaration,
}

impl CompilationUnit {
    pub fn new(package: PackageName, name: ApplicationName) -> Self {
        Self {
            package,
            type_declaration: TypeDeclaration::new(name),
        }
    }

    pub fn package(&self) -> &PackageName {
        &self.package
    }

    pub fn type_declaration(&self) -> &TypeDeclaration {
        &self.type_declaration
    }

    pub fn type_declaration_mut(&mut self) -> &mut TypeDeclaration {
        &mut self.type_declaration
    }

    /// Imports needed by the annotations, sorted and de-duplicated. Types in
    /// the unit's own package are not imported.
    pub fn imports(&self) -> Vec<String> {
        let mut imports: BTreeSet<String> = self
            .type_declaration
            .annotations
            .iter()
            .filter(|a| a.package().is_some_and(|p| p != self.package.as_str()))
            .map(|a| a.qualified_name().to_string())
            .collect();

        if self.type_declaration.main_method {
            imports.insert("org.springframework.boot.SpringApplication".into());
        }

        imports.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> CompilationUnit {
        CompilationUnit::new(
            PackageName::new("com.acme.app").unwrap(),
            ApplicationName::default(),
        )
    }

    #[test]
    fn annotation_names_are_split() {
        let a = Annotation::new("tk.mybatis.spring.annotation.MapperScan");
        assert_eq!(a.simple_name(), "MapperScan");
        assert_eq!(a.package(), Some("tk.mybatis.spring.annotation"));
        assert_eq!(Annotation::new("Local").package(), None);
    }

    #[test]
    fn annotate_replaces_same_type() {
        let mut unit = unit();
        let td = unit.type_declaration_mut();
        td.annotate(Annotation::new("a.B"));
        td.annotate(
            Annotation::new("a.B").with_attribute("x", AnnotationValue::String("1".into())),
        );
        td.annotate(Annotation::new("a.C"));

        assert_eq!(td.annotations().len(), 2);
        assert_eq!(td.annotations()[0].attributes().len(), 1);
    }

    #[test]
    fn imports_are_sorted_and_skip_own_package() {
        let mut unit = unit();
        let td = unit.type_declaration_mut();
        td.annotate(Annotation::new("z.Last"));
        td.annotate(Annotation::new("com.acme.app.Local"));
        td.annotate(Annotation::new("a.First"));

        assert_eq!(
            unit.imports(),
            vec![
                "a.First".to_string(),
                "org.springframework.boot.SpringApplication".to_string(),
                "z.Last".to_string(),
            ]
        );
    }
}
