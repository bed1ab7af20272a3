//! The `run` subcommand: an arbitrary command line, optionally elevated
//! or in a terminal window.

use anyhow::{Result, bail};
use hyprcc_core::runner::{Invocation, Launch, Runner};
use hyprcc_core::terminal::TerminalLauncher;
use hyprcc_core::util::shell_quote;

use super::run_privileged;
use crate::output::{print_dry_run, print_success};

pub async fn cmd_run(runner: &Runner, command: &str, root: bool, terminal: bool) -> Result<()> {
  if command.trim().is_empty() {
    bail!("please provide a command to run");
  }

  if terminal {
    let Some(launcher) = TerminalLauncher::detect() else {
      bail!("no terminal emulator found on PATH");
    };
    let inner = if root {
      format!("sudo bash -lc {}", shell_quote(command))
    } else {
      command.to_string()
    };
    match runner.launch(&launcher.wrap(&inner))? {
      Launch::DryRun(cmd) => print_dry_run(&cmd),
      Launch::Spawned { .. } => {
        print_success(&format!("Started in {}: {command}", launcher.program()));
      }
    }
    return Ok(());
  }

  if root {
    return run_privileged(runner, command, "run").await;
  }

  let inv = Invocation::new("bash").arg("-lc").arg(command);
  match runner.launch(&inv)? {
    Launch::DryRun(cmd) => print_dry_run(&cmd),
    Launch::Spawned { .. } => print_success(&format!("Started: {command}")),
  }
  Ok(())
}
