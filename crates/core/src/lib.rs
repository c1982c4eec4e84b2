//! envseed-core: `.env` parsing and env file loading.
//!
//! # Public API
//!
//! - [`parse()`] / [`parse_with_report()`] -- text to [`EnvMap`]
//! - [`load_env_file()`] -- resolve, check, read and parse a file on disk
//! - [`read_env_file()`] -- the same without parsing
//! - [`EnvFileError`] -- the only failure, raised by file access
//! - [`EnvSource`] -- provider seam with filesystem and in-memory impls

pub mod env_map;
pub mod error;
pub mod parser;
pub mod source;

// ── Convenience re-exports ───────────────────────────────────────────

pub use env_map::EnvMap;
pub use error::EnvFileError;
pub use parser::{parse, parse_with_report, ParseReport};
pub use source::{
    load_env_file, load_env_file_with, read_env_file, read_env_file_with, resolve_env_path,
    EnvSource, FileSystemSource, InMemorySource, DEFAULT_ENV_FILE,
};
