//! In-memory resource locator for tests.

use std::{
    collections::HashMap,
    io::{BufRead, Cursor},
    sync::{Arc, RwLock},
};

use sprout_core::{
    application::{ApplicationError, ports::ResourceLocator},
    domain::ResourceId,
    error::SproutResult,
};

use super::not_found;

/// Thread-safe map of location → content.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResources {
    inner: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `id` (scheme optional).
    pub fn insert(&self, id: impl Into<ResourceId>, content: impl Into<Vec<u8>>) -> SproutResult<()> {
        let id = id.into();
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(id.location().to_string(), content.into());
        Ok(())
    }

    pub fn with(self, id: &str, content: &str) -> Self {
        // A fresh store cannot be poisoned.
        self.insert(id, content).unwrap();
        self
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceLocator for InMemoryResources {
    fn locate(&self, id: &ResourceId) -> SproutResult<Box<dyn BufRead + Send>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let bytes = inner.get(id.location()).ok_or_else(|| not_found(id))?;
        Ok(Box::new(Cursor::new(bytes.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn lookup_ignores_scheme() {
        let res = InMemoryResources::new().with("classpath:a/b.txt", "hello");
        let mut out = String::new();
        res.locate(&ResourceId::new("a/b.txt"))
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "hello");
        assert_eq!(res.len(), 1);
    }

    #[test]
    fn missing_is_not_found() {
        let err = InMemoryResources::new()
            .locate(&ResourceId::new("x"))
            .err()
            .unwrap();
        assert!(err.is_not_found());
    }
}
