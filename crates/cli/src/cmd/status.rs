//! The `status` subcommand: managed paths and helper availability.

use anyhow::Result;
use hyprcc_core::paths;
use hyprcc_core::runner::Runner;

use crate::output::{print_json, print_stat, print_success};

const HELPERS: &[&str] = &[
  "pkexec",
  "hyprctl",
  "yay",
  "pacman",
  "flatpak",
  "pactl",
  "xdg-mime",
];

pub fn cmd_status(json: bool) -> Result<()> {
  let binds = paths::binds_path();
  let binds_exists = binds.exists();

  if json {
    let mut tools = serde_json::Map::new();
    for helper in HELPERS {
      let path = Runner::which(helper).map(|p| p.display().to_string());
      tools.insert(
        helper.to_string(),
        path.map_or(serde_json::Value::Null, Into::into),
      );
    }
    return print_json(&serde_json::json!({
      "version": env!("CARGO_PKG_VERSION"),
      "binds_path": binds.display().to_string(),
      "binds_exists": binds_exists,
      "tools": tools,
    }));
  }

  print_success(&format!("hyprcc v{}", env!("CARGO_PKG_VERSION")));
  println!();
  print_stat(
    "binds file",
    &format!(
      "{} ({})",
      binds.display(),
      if binds_exists { "present" } else { "missing" }
    ),
  );
  println!();
  println!("Helpers:");
  for helper in HELPERS {
    match Runner::which(helper) {
      Some(path) => print_stat(helper, &path.display().to_string()),
      None => print_stat(helper, "not found"),
    }
  }
  Ok(())
}
