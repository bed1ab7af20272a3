//! Privileged script execution.
//!
//! Scripts run through a privilege-escalation helper (`pkexec`) invoked
//! as `pkexec /bin/bash -s`: the script body travels over the child's
//! stdin, never through the argument list, so nothing root-bound ever
//! appears in `/proc/<pid>/cmdline`. The helper may prompt the operator
//! for authentication; that interaction is outside our control.
//!
//! Spawning is non-blocking. A watcher task observes the child's exit
//! and delivers exactly one [`JobEvent::Finished`] on the caller's
//! channel, classifying the end state the way the child-watch taxonomy
//! does: clean exit, nonzero exit code, or terminating signal.

use std::process::Stdio;
use std::time::Duration;

use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::runner::Runner;

/// The privilege-escalation helper resolved on `$PATH` at spawn time.
pub const HELPER: &str = "pkexec";

/// Final state of a privileged job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
  /// Exited with code zero.
  Completed,
  /// Exited with a nonzero code.
  Failed { code: i32 },
  /// Killed by a signal.
  Signaled { signal: i32 },
}

/// Events delivered on the reporting channel, in order: one `Launched`,
/// then one `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobEvent {
  Launched { pid: Option<u32> },
  Finished(JobOutcome),
}

/// Handle to a spawned privileged job. Dropping it does not affect the
/// child; the watcher task owns the process.
#[derive(Debug)]
pub struct PrivilegedJob {
  pid: Option<Pid>,
}

impl PrivilegedJob {
  pub fn pid(&self) -> Option<i32> {
    self.pid.map(Pid::as_raw)
  }

  /// Operator-requested cancellation: SIGTERM, then SIGKILL after the
  /// grace period if the process is still alive. The watcher still
  /// reports the resulting `Signaled` outcome on the channel.
  pub async fn terminate(&self, grace: Duration) {
    let Some(pid) = self.pid else { return };
    let _ = signal::kill(pid, Signal::SIGTERM);
    tokio::time::sleep(grace).await;
    if signal::kill(pid, None).is_ok() {
      let _ = signal::kill(pid, Signal::SIGKILL);
    }
  }
}

/// Spawn `pkexec /bin/bash -s`, feed it the script body plus a trailing
/// newline, and return immediately.
///
/// A missing helper is reported synchronously as
/// [`Error::HelperNotFound`] with no spawn and no events. Must be
/// called from within a tokio runtime.
pub fn spawn_script(script: &str, events: UnboundedSender<JobEvent>) -> Result<PrivilegedJob> {
  spawn_with_helper(HELPER, script, events)
}

fn spawn_with_helper(
  helper: &'static str,
  script: &str,
  events: UnboundedSender<JobEvent>,
) -> Result<PrivilegedJob> {
  let helper_path = Runner::which(helper).ok_or(Error::HelperNotFound { helper })?;

  let mut child = Command::new(&helper_path)
    .arg("/bin/bash")
    .arg("-s")
    .stdin(Stdio::piped())
    .spawn()
    .map_err(|source| Error::Spawn {
      program: helper.to_string(),
      source,
    })?;

  let pid = child.id();
  let stdin = child.stdin.take();
  let body = format!("{script}\n");

  info!(helper, pid = ?pid, "launched privileged command; authentication may be requested");
  let _ = events.send(JobEvent::Launched { pid });

  tokio::spawn(async move {
    if let Some(mut stdin) = stdin {
      if let Err(err) = stdin.write_all(body.as_bytes()).await {
        warn!(%err, "failed to write script to helper stdin");
      }
      // Dropping the handle closes the pipe; `bash -s` sees EOF.
    }
    let outcome = match child.wait().await {
      Ok(status) => outcome_from_status(status),
      Err(err) => {
        warn!(%err, "failed to observe helper exit");
        JobOutcome::Failed { code: -1 }
      }
    };
    let _ = events.send(JobEvent::Finished(outcome));
  });

  Ok(PrivilegedJob {
    pid: pid.map(|p| Pid::from_raw(p as i32)),
  })
}

fn outcome_from_status(status: std::process::ExitStatus) -> JobOutcome {
  use std::os::unix::process::ExitStatusExt;
  match status.code() {
    Some(0) => JobOutcome::Completed,
    Some(code) => JobOutcome::Failed { code },
    None => JobOutcome::Signaled {
      signal: status.signal().unwrap_or(0),
    },
  }
}
