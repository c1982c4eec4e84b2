use std::path::PathBuf;

/// Errors raised while loading an env file. Parsing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum EnvFileError {
    /// No file at the resolved path. The message is shown to the operator
    /// as is, so it stays in their language.
    #[error("Arquivo .env não encontrado em: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but the read itself failed (permissions, I/O).
    /// Byte content never causes this.
    #[error("erro ao ler {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EnvFileError {
    /// Absolute path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            EnvFileError::NotFound { path } | EnvFileError::Read { path, .. } => path.as_path(),
        }
    }
}
