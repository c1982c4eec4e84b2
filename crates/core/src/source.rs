//! Env file access behind a small provider trait.
//!
//! [`EnvSource`] keeps the loading step independent of `std::fs` so the
//! existence check and read can be exercised from memory in tests.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use crate::env_map::EnvMap;
use crate::error::EnvFileError;
use crate::parser;

/// Conventional env file name, looked up relative to the project root.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Abstracts how env files are located and read.
pub trait EnvSource {
    /// Absolute form of `path`, used for diagnostics and the read itself.
    fn resolve(&self, path: &Path) -> PathBuf;

    /// Whether a file exists at an already-resolved path.
    fn exists(&self, path: &Path) -> bool;

    /// Read the text at an already-resolved path. Invalid UTF-8 is replaced
    /// with U+FFFD rather than reported.
    fn read_text(&self, path: &Path) -> Result<String, std::io::Error>;
}

/// Filesystem-backed source. Relative paths resolve against the current
/// working directory.
pub struct FileSystemSource;

impl EnvSource for FileSystemSource {
    fn resolve(&self, path: &Path) -> PathBuf {
        std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_text(&self, path: &Path) -> Result<String, std::io::Error> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// In-memory source for tests. Paths are normalized lexically.
pub struct InMemorySource {
    files: HashMap<PathBuf, String>,
}

impl InMemorySource {
    pub fn new(files: HashMap<PathBuf, String>) -> Self {
        Self { files }
    }

    /// Resolve `.` and `..` without touching the filesystem.
    fn normalize_path(path: &Path) -> PathBuf {
        let mut components = Vec::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    // never pop past the root
                    if matches!(components.last(), Some(Component::Normal(_))) {
                        components.pop();
                    }
                }
                other => components.push(other),
            }
        }
        components.iter().collect()
    }
}

impl EnvSource for InMemorySource {
    fn resolve(&self, path: &Path) -> PathBuf {
        Self::normalize_path(&Path::new("/").join(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_text(&self, path: &Path) -> Result<String, std::io::Error> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found in memory: {}", path.display()),
            )
        })
    }
}

/// Absolute path the filesystem loader would read for `path`.
pub fn resolve_env_path(path: &Path) -> PathBuf {
    FileSystemSource.resolve(path)
}

/// Load and parse an env file from disk.
pub fn load_env_file(path: &Path) -> Result<EnvMap, EnvFileError> {
    load_env_file_with(&FileSystemSource, path)
}

/// Load and parse an env file through `source`.
pub fn load_env_file_with(source: &dyn EnvSource, path: &Path) -> Result<EnvMap, EnvFileError> {
    let text = read_env_file_with(source, path)?;
    Ok(parser::parse(&text))
}

/// Read an env file from disk without parsing it.
pub fn read_env_file(path: &Path) -> Result<String, EnvFileError> {
    read_env_file_with(&FileSystemSource, path)
}

/// Read an env file through `source`.
///
/// Existence is checked before reading so a missing file is always reported
/// as [`EnvFileError::NotFound`] with the resolved path.
pub fn read_env_file_with(source: &dyn EnvSource, path: &Path) -> Result<String, EnvFileError> {
    let resolved = source.resolve(path);
    if !source.exists(&resolved) {
        tracing::debug!(path = %resolved.display(), "env file not found");
        return Err(EnvFileError::NotFound { path: resolved });
    }

    let text = source
        .read_text(&resolved)
        .map_err(|source| EnvFileError::Read {
            path: resolved.clone(),
            source,
        })?;

    tracing::debug!(path = %resolved.display(), bytes = text.len(), "read env file");
    Ok(text)
}
