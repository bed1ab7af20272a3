//! The `devices` subcommand: PCI and USB listings.

use anyhow::Result;
use hyprcc_core::runner::{Captured, Invocation, Runner};

use crate::output::{print_dry_run, print_section, print_warning};

async fn show_listing(runner: &Runner, title: &str, inv: Invocation) -> Result<()> {
  match runner.capture(&inv).await {
    Ok(Captured::DryRun(cmd)) => print_dry_run(&cmd),
    Ok(Captured::Ran(out)) => print_section(title, &out.combined()),
    // Missing lspci/lsusb is a note, not a failure.
    Err(err) => print_warning(&format!("{title}: {err}")),
  }
  Ok(())
}

pub async fn cmd_devices(runner: &Runner) -> Result<()> {
  show_listing(runner, "PCI devices (lspci -k)", Invocation::new("lspci").arg("-k")).await?;
  show_listing(runner, "USB devices (lsusb)", Invocation::new("lsusb")).await?;
  Ok(())
}
