//! Error types for the editor boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of an editor action that touches the outside world.
///
/// Returned from import/export; the live model and history are left as they
/// were before the call.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EditorError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
