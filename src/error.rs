use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::bundle::InputKind;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read {kind} input {}", path.display())]
    Read {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BundleError {
    pub fn io_error(&self) -> &io::Error {
        match self {
            BundleError::Read { source, .. } | BundleError::Write { source, .. } => source,
        }
    }
}
