//! The `packages` subcommands: pending updates, full update, installs.

use anyhow::{Result, bail};
use hyprcc_core::packages::{self, Backend};
use hyprcc_core::runner::{Captured, Launch, Runner};
use hyprcc_core::terminal::TerminalLauncher;

use crate::output::{print_dry_run, print_info, print_success};

pub async fn cmd_packages_updates(runner: &Runner) -> Result<()> {
  match runner.capture(&packages::list_updates()).await? {
    Captured::DryRun(cmd) => print_dry_run(&cmd),
    Captured::Ran(out) => {
      // `yay -Qu` exits 1 with empty output when everything is current.
      let listing = out.stdout.trim_end();
      if listing.is_empty() {
        print_success("System is up to date");
      } else {
        println!("{listing}");
        print_info(&format!("{} update(s) pending", listing.lines().count()));
      }
    }
  }
  Ok(())
}

pub async fn cmd_packages_update(runner: &Runner, terminal: bool) -> Result<()> {
  if terminal {
    let Some(launcher) = TerminalLauncher::detect() else {
      bail!("no terminal emulator found on PATH");
    };
    let inv = launcher.wrap(packages::combined_update_shell());
    match runner.launch(&inv)? {
      Launch::DryRun(cmd) => print_dry_run(&cmd),
      Launch::Spawned { .. } => {
        print_success(&format!("Started the update in {}", launcher.program()));
      }
    }
    return Ok(());
  }

  match runner.stream(&packages::full_update()).await? {
    Captured::DryRun(cmd) => print_dry_run(&cmd),
    Captured::Ran(out) => match out.code {
      Some(0) => print_success("Update completed successfully"),
      Some(code) => bail!("update finished with exit {code}"),
      None => bail!("update was killed by a signal"),
    },
  }
  Ok(())
}

pub async fn cmd_packages_install(
  runner: &Runner,
  backend: Backend,
  package: &str,
  terminal: bool,
) -> Result<()> {
  if terminal {
    let Some(launcher) = TerminalLauncher::detect() else {
      bail!("no terminal emulator found on PATH");
    };
    let inv = launcher.wrap(&packages::install_shell(backend, package));
    match runner.launch(&inv)? {
      Launch::DryRun(cmd) => print_dry_run(&cmd),
      Launch::Spawned { .. } => {
        print_success(&format!("Started installing {package} in {}", launcher.program()));
      }
    }
    return Ok(());
  }

  match runner.stream(&packages::install(backend, package)).await? {
    Captured::DryRun(cmd) => print_dry_run(&cmd),
    Captured::Ran(out) => match out.code {
      Some(0) => print_success(&format!("Installed {package}")),
      Some(code) => bail!("install finished with exit {code}"),
      None => bail!("install was killed by a signal"),
    },
  }
  Ok(())
}
