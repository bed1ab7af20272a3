//! The `config` subcommands: open config directories, print paths.

use anyhow::Result;
use hyprcc_core::paths;
use hyprcc_core::runner::{Invocation, Launch, Runner};

use crate::output::{print_dry_run, print_stat, print_success};

pub fn cmd_config_open(runner: &Runner, name: &str) -> Result<()> {
  let dir = paths::config_subdir(name);
  // Prefer a file manager; xdg-open hands off to whatever is configured.
  let program = if Runner::which("thunar").is_some() {
    "thunar"
  } else {
    "xdg-open"
  };
  let inv = Invocation::new(program).arg(dir.to_string_lossy());
  match runner.launch(&inv)? {
    Launch::DryRun(cmd) => print_dry_run(&cmd),
    Launch::Spawned { .. } => print_success(&format!("Opening {}", dir.display())),
  }
  Ok(())
}

pub fn cmd_config_path() -> Result<()> {
  print_stat("config dir", &paths::user_config_dir().display().to_string());
  print_stat("hypr dir", &paths::hypr_config_dir().display().to_string());
  print_stat("binds file", &paths::binds_path().display().to_string());
  print_stat(
    "hyprland.conf",
    &paths::hyprland_conf_path().display().to_string(),
  );
  Ok(())
}
