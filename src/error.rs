//! Fatal errors that end the run with a non-zero exit status.
//!
//! Metadata failures on individual entries are not represented here;
//! the scanner records those in the affected entry and keeps walking.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to write results to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
