//! Argv-based process invocation.
//!
//! Every external tool is described as an [`Invocation`] (program name
//! plus argument vector) and executed through a [`Runner`]. Building the
//! argv explicitly instead of templating shell strings keeps arguments
//! inert: a `%` or a quote in user input can never change the command.
//!
//! The runner carries the dry-run flag, so call sites receive it
//! explicitly instead of consulting a process-global.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::util::shell_quote;

/// A program name plus argument vector.
///
/// The program is resolved on `$PATH` at execution time, mirroring how
/// the rest of the system treats external tools: absence is a reported,
/// recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  program: String,
  args: Vec<String>,
}

impl Invocation {
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  pub fn program(&self) -> &str {
    &self.program
  }

  pub fn argv(&self) -> &[String] {
    &self.args
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program)?;
    for arg in &self.args {
      write!(f, " {}", shell_quote(arg))?;
    }
    Ok(())
  }
}

/// Captured result of a finished child process.
#[derive(Debug, Clone)]
pub struct RunOutput {
  /// Exit code, or `None` when the process was killed by a signal.
  pub code: Option<i32>,
  pub stdout: String,
  pub stderr: String,
}

impl RunOutput {
  pub fn success(&self) -> bool {
    self.code == Some(0)
  }

  /// Stdout followed by stderr, for surfacing a tool's combined output.
  pub fn combined(&self) -> String {
    let mut out = self.stdout.clone();
    if !self.stderr.is_empty() {
      if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
      }
      out.push_str(&self.stderr);
    }
    out
  }
}

/// Outcome of [`Runner::capture`] / [`Runner::stream`].
#[derive(Debug)]
pub enum Captured {
  /// Dry-run: the rendered command line that would have been executed.
  DryRun(String),
  Ran(RunOutput),
}

/// Outcome of [`Runner::launch`].
#[derive(Debug)]
pub enum Launch {
  /// Dry-run: the rendered command line that would have been spawned.
  DryRun(String),
  Spawned { pid: Option<u32> },
}

/// Executes invocations, honoring an explicit dry-run flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
  pub dry_run: bool,
}

impl Runner {
  pub fn new(dry_run: bool) -> Self {
    Self { dry_run }
  }

  /// Resolve a program on the search path, the way the shell would.
  ///
  /// Names containing a path separator are checked directly.
  pub fn which(program: &str) -> Option<PathBuf> {
    if program.contains('/') {
      let path = PathBuf::from(program);
      return is_executable(&path).then_some(path);
    }
    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
      let candidate = dir.join(program);
      if is_executable(&candidate) {
        return Some(candidate);
      }
    }
    None
  }

  /// Run to completion and capture stdout/stderr.
  pub async fn capture(&self, inv: &Invocation) -> Result<Captured> {
    if self.dry_run {
      return Ok(Captured::DryRun(inv.to_string()));
    }
    let program = self.resolve(inv)?;

    info!(cmd = %inv, "executing command");
    let output = Command::new(&program)
      .args(inv.argv())
      .stdin(Stdio::null())
      .output()
      .await
      .map_err(|source| Error::Spawn {
        program: inv.program().to_string(),
        source,
      })?;

    let run = RunOutput {
      code: output.status.code(),
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    if !run.success() && !run.stderr.is_empty() {
      debug!(stderr = %run.stderr, "command stderr");
    }
    Ok(Captured::Ran(run))
  }

  /// Run to completion with inherited stdio, for long interactive work
  /// (a full system update) where the operator should see output live.
  pub async fn stream(&self, inv: &Invocation) -> Result<Captured> {
    if self.dry_run {
      return Ok(Captured::DryRun(inv.to_string()));
    }
    let program = self.resolve(inv)?;

    info!(cmd = %inv, "executing command (streamed)");
    let status = Command::new(&program)
      .args(inv.argv())
      .status()
      .await
      .map_err(|source| Error::Spawn {
        program: inv.program().to_string(),
        source,
      })?;

    Ok(Captured::Ran(RunOutput {
      code: status.code(),
      stdout: String::new(),
      stderr: String::new(),
    }))
  }

  /// Spawn detached and return immediately. Used for fire-and-forget
  /// launches (volume control, file manager); the child outlives us.
  pub fn launch(&self, inv: &Invocation) -> Result<Launch> {
    if self.dry_run {
      return Ok(Launch::DryRun(inv.to_string()));
    }
    let program = self.resolve(inv)?;

    let child = Command::new(&program)
      .args(inv.argv())
      .stdin(Stdio::null())
      .stdout(Stdio::null())
      .stderr(Stdio::null())
      .spawn()
      .map_err(|source| Error::Spawn {
        program: inv.program().to_string(),
        source,
      })?;

    let pid = child.id();
    info!(cmd = %inv, pid = ?pid, "launched command");
    Ok(Launch::Spawned { pid })
  }

  fn resolve(&self, inv: &Invocation) -> Result<PathBuf> {
    Self::which(inv.program()).ok_or_else(|| Error::MissingProgram {
      program: inv.program().to_string(),
    })
  }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
  use std::os::unix::fs::PermissionsExt;
  path
    .metadata()
    .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
    .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
  path.is_file()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_renders_an_argv_with_quoting() {
    let inv = Invocation::new("xdg-mime")
      .args(["default", "org.gnome.Nautilus.desktop"])
      .arg("inode/directory");
    assert_eq!(
      inv.to_string(),
      "xdg-mime default org.gnome.Nautilus.desktop inode/directory"
    );

    let inv = Invocation::new("bash").arg("-lc").arg("echo a b");
    assert_eq!(inv.to_string(), "bash -lc 'echo a b'");
  }

  #[test]
  fn which_finds_sh() {
    assert!(Runner::which("sh").is_some());
  }

  #[test]
  fn which_reports_absence() {
    assert!(Runner::which("definitely-not-a-real-program-xyz").is_none());
  }

  #[tokio::test]
  async fn capture_runs_and_collects_stdout() {
    let runner = Runner::new(false);
    let inv = Invocation::new("echo").arg("hello");
    match runner.capture(&inv).await.unwrap() {
      Captured::Ran(out) => {
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "hello");
      }
      Captured::DryRun(_) => panic!("expected a real run"),
    }
  }

  #[tokio::test]
  async fn capture_missing_program_is_reported() {
    let runner = Runner::new(false);
    let inv = Invocation::new("definitely-not-a-real-program-xyz");
    let err = runner.capture(&inv).await.unwrap_err();
    assert!(matches!(err, Error::MissingProgram { .. }));
  }

  #[tokio::test]
  async fn dry_run_reports_the_command_and_spawns_nothing() {
    let runner = Runner::new(true);
    // A missing program must not matter: no resolution, no spawn.
    let inv = Invocation::new("definitely-not-a-real-program-xyz").arg("--flag");
    match runner.capture(&inv).await.unwrap() {
      Captured::DryRun(cmd) => {
        assert_eq!(cmd, "definitely-not-a-real-program-xyz --flag");
      }
      Captured::Ran(_) => panic!("dry run must not execute"),
    }
  }

  #[test]
  fn launch_dry_run_reports_the_command() {
    let runner = Runner::new(true);
    let inv = Invocation::new("pavucontrol");
    match runner.launch(&inv).unwrap() {
      Launch::DryRun(cmd) => assert_eq!(cmd, "pavucontrol"),
      Launch::Spawned { .. } => panic!("dry run must not spawn"),
    }
  }

  #[test]
  fn combined_output_joins_streams() {
    let out = RunOutput {
      code: Some(1),
      stdout: "partial".to_string(),
      stderr: "boom".to_string(),
    };
    assert_eq!(out.combined(), "partial\nboom");
  }
}
