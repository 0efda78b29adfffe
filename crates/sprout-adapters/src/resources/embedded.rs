//! Templates compiled into the binary.

use std::io::{BufRead, Cursor};

use sprout_core::{
    application::ports::ResourceLocator, domain::ResourceId, error::SproutResult,
};
use tracing::trace;

use super::not_found;

pub const RESP_CODE: &str = include_str!("../../assets/configuration/RespCode.java");
pub const GENERATOR_CONFIG: &str = include_str!("../../assets/configuration/generatorConfig.xml");
pub const GENERATOR_CONFIG_TK: &str =
    include_str!("../../assets/configuration/generatorConfigTk.xml");
pub const LOGBACK: &str = include_str!("../../assets/configuration/Logback.xml");
pub const GENERATOR_PROPERTIES: &str =
    include_str!("../../assets/configuration/mybatisGeneratorinit.properties");

/// Location (without scheme) → content of every bundled template.
const BUNDLED: &[(&str, &str)] = &[
    ("configuration/RespCode.java", RESP_CODE),
    ("configuration/generatorConfig.xml", GENERATOR_CONFIG),
    ("configuration/generatorConfigTk.xml", GENERATOR_CONFIG_TK),
    ("configuration/Logback.xml", LOGBACK),
    ("configuration/mybatisGeneratorinit.properties", GENERATOR_PROPERTIES),
];

/// Resource locator over the templates bundled with Sprout.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    pub fn new() -> Self {
        Self
    }

    /// Locations of all bundled templates.
    pub fn locations() -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(location, _)| *location)
    }

    pub fn get(id: &ResourceId) -> Option<&'static str> {
        BUNDLED
            .iter()
            .find(|(location, _)| *location == id.location())
            .map(|(_, content)| *content)
    }
}

impl ResourceLocator for EmbeddedResources {
    fn locate(&self, id: &ResourceId) -> SproutResult<Box<dyn BufRead + Send>> {
        let content = Self::get(id).ok_or_else(|| not_found(id))?;
        trace!(resource = %id, bytes = content.len(), "Embedded resource located");
        Ok(Box::new(Cursor::new(content.as_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::domain::ManifestCatalog;

    #[test]
    fn every_builtin_catalog_file_is_bundled() {
        for file in ManifestCatalog::builtin().files {
            assert!(
                EmbeddedResources::get(&file.resource).is_some(),
                "{} is not bundled",
                file.resource
            );
        }
    }

    #[test]
    fn templates_carry_placeholder_tokens() {
        assert!(RESP_CODE.starts_with("package com.croot.demo.comm;"));
        assert!(GENERATOR_CONFIG.contains("bs_demo_server"));
        assert!(LOGBACK.contains("bs_demo_server"));
    }

    #[test]
    fn unknown_resource_is_not_found() {
        let err = EmbeddedResources::new()
            .locate(&ResourceId::new("classpath:configuration/Nope.xml"))
            .err()
            .unwrap();
        assert!(err.is_not_found());
    }

    #[test]
    fn scheme_is_optional() {
        let res = EmbeddedResources::new();
        let mut first = String::new();
        res.locate(&ResourceId::new("configuration/Logback.xml"))
            .unwrap()
            .read_line(&mut first)
            .unwrap();
        assert!(first.starts_with("<?xml"));
    }
}
