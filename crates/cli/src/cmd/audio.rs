//! The `audio` subcommands: default-sink volume via pactl, plus a
//! launcher for pavucontrol.

use anyhow::{Result, bail};
use hyprcc_core::runner::{Captured, Invocation, Launch, Runner};

use crate::output::{print_dry_run, print_success};

const DEFAULT_SINK: &str = "@DEFAULT_SINK@";

pub fn cmd_audio_open(runner: &Runner) -> Result<()> {
  match runner.launch(&Invocation::new("pavucontrol"))? {
    Launch::DryRun(cmd) => print_dry_run(&cmd),
    Launch::Spawned { .. } => print_success("Started pavucontrol"),
  }
  Ok(())
}

pub async fn cmd_audio_get(runner: &Runner) -> Result<()> {
  let inv = Invocation::new("pactl").args(["get-sink-volume", DEFAULT_SINK]);
  match runner.capture(&inv).await? {
    Captured::DryRun(cmd) => print_dry_run(&cmd),
    Captured::Ran(out) if out.success() => println!("{}", out.stdout.trim_end()),
    Captured::Ran(out) => bail!("pactl failed: {}", out.stderr.trim_end()),
  }
  Ok(())
}

pub async fn cmd_audio_set(runner: &Runner, percent: u8) -> Result<()> {
  let inv = Invocation::new("pactl")
    .args(["set-sink-volume", DEFAULT_SINK])
    .arg(format!("{percent}%"));
  match runner.capture(&inv).await? {
    Captured::DryRun(cmd) => print_dry_run(&cmd),
    Captured::Ran(out) if out.success() => print_success(&format!("Volume set to {percent}%")),
    Captured::Ran(out) => bail!("pactl failed: {}", out.stderr.trim_end()),
  }
  Ok(())
}

pub async fn cmd_audio_mute(runner: &Runner) -> Result<()> {
  let inv = Invocation::new("pactl").args(["set-sink-mute", DEFAULT_SINK, "toggle"]);
  match runner.capture(&inv).await? {
    Captured::DryRun(cmd) => print_dry_run(&cmd),
    Captured::Ran(out) if out.success() => print_success("Toggled mute on the default sink"),
    Captured::Ran(out) => bail!("pactl failed: {}", out.stderr.trim_end()),
  }
  Ok(())
}
