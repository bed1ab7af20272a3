//! The `disks` subcommand: block devices and filesystem usage.

use anyhow::Result;
use hyprcc_core::paths;
use hyprcc_core::runner::{Captured, Invocation, Runner};

use crate::output::{print_dry_run, print_section, print_warning};

async fn show_listing(runner: &Runner, title: &str, inv: Invocation) -> Result<()> {
  match runner.capture(&inv).await {
    Ok(Captured::DryRun(cmd)) => print_dry_run(&cmd),
    Ok(Captured::Ran(out)) => print_section(title, &out.combined()),
    Err(err) => print_warning(&format!("{title}: {err}")),
  }
  Ok(())
}

pub async fn cmd_disks(runner: &Runner) -> Result<()> {
  show_listing(
    runner,
    "Block devices",
    Invocation::new("lsblk").args(["-lpo", "NAME,SIZE,TYPE,FSTYPE,MOUNTPOINT"]),
  )
  .await?;
  show_listing(runner, "Filesystem usage", Invocation::new("df").arg("-h")).await?;

  let home = paths::home_dir();
  show_listing(
    runner,
    "Home directory size",
    Invocation::new("du").args(["-sh"]).arg(home.to_string_lossy()),
  )
  .await?;
  Ok(())
}
