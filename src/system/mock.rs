//! Mock system implementation for testing

use super::System;
use std::collections::HashMap;
use std::env::VarError;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// # Example
/// ```
/// use healthy_ai_engine::system::{MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_env("HEALTHY_AI_ENGINE_LOG", "debug")
///     .with_file("/etc/engine.yaml", b"logging:\n  level: warn\n");
///
/// assert_eq!(system.env_var("HEALTHY_AI_ENGINE_LOG").unwrap(), "debug");
/// assert!(system.exists(Path::new("/etc/engine.yaml")));
/// ```
#[derive(Clone, Default)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

#[derive(Default)]
struct MockSystemState {
    env_vars: HashMap<String, String>,
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MockSystem {
    /// Create a new, empty `MockSystem`
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an environment variable (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_env(self, key: &str, value: &str) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.env_vars.insert(key.to_owned(), value.to_owned());
        }
        self
    }

    /// Add a file with contents (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> Self {
        if let Ok(mut state) = self.state.write() {
            state
                .files
                .insert(path.as_ref().to_path_buf(), contents.to_vec());
        }
        self
    }
}

impl System for MockSystem {
    #[inline]
    fn env_var(&self, key: &str) -> Result<String, VarError> {
        let state = self.state.read().map_err(|_| VarError::NotPresent)?;
        state.env_vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let bytes = state.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        let result = bytes.clone();
        drop(state);
        String::from_utf8(result)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.files.contains_key(path))
    }
}
