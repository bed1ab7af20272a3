//! Error types shared across the library.
//!
//! Every failure here is recoverable by design: the CLI reports it as a
//! status line and moves on. Nothing in this crate panics on a missing
//! external program or a bad file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by runner, privileged-job and binds operations.
#[derive(Debug, Error)]
pub enum Error {
  /// The privilege-escalation helper is not on the search path.
  #[error("{helper} not found on PATH; cannot run privileged commands")]
  HelperNotFound { helper: &'static str },

  /// An external program could not be resolved on the search path.
  #[error("{program} not found on PATH")]
  MissingProgram { program: String },

  /// A child process failed to spawn.
  #[error("failed to spawn {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: std::io::Error,
  },

  /// File I/O failed; the operation was aborted with no partial state.
  #[error("{}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// Bind rows failed the bind-prefix rule. Indices refer to the
  /// editable row list, zero-based.
  #[error("row(s) {rows:?} must start with 'bind'; nothing was written")]
  InvalidRows { rows: Vec<usize> },
}

pub type Result<T> = std::result::Result<T, Error>;
