use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SidebarError {
    #[error("failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}
