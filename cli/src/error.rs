use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Failures the `seagro` binary can recover from or report.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("stylesheet {href:?} would overwrite the rendered page")]
    StylesheetClash { href: String },

    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode content as JSON")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// True when the reader on the other end of stdout went away.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == io::ErrorKind::BrokenPipe,
            Self::Json(err) => err.io_error_kind() == Some(io::ErrorKind::BrokenPipe),
            _ => false,
        }
    }
}
