use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied for file '{}'", .0.display())]
    PermissionDenied(PathBuf),

    #[error("unable to read '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("unable to write results to '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    /// Classifies a failure to open or read the input source.
    pub fn source_unavailable(path: PathBuf, source: io::Error) -> Error {
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path),
            io::ErrorKind::PermissionDenied => Error::PermissionDenied(path),
            _ => Error::Io { path, source },
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
