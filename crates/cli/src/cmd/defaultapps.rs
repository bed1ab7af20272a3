//! The `default-apps` subcommands, backed by xdg-mime.

use anyhow::{Result, bail};
use hyprcc_core::defaults::{self, Role};
use hyprcc_core::runner::{Captured, Runner};

use crate::output::{print_dry_run, print_json, print_stat, print_success};

/// Current default for a role, `None` when unset or when xdg-mime is
/// unavailable.
async fn current_default(runner: &Runner, role: Role) -> Option<String> {
  match runner.capture(&defaults::query(role)).await {
    Ok(Captured::Ran(out)) if out.success() => {
      let value = out.stdout.trim();
      (!value.is_empty()).then(|| value.to_string())
    }
    Ok(Captured::DryRun(cmd)) => {
      print_dry_run(&cmd);
      None
    }
    _ => None,
  }
}

pub async fn cmd_default_apps_show(runner: &Runner, json: bool) -> Result<()> {
  if json {
    let mut map = serde_json::Map::new();
    for role in Role::all() {
      let value = current_default(runner, role).await;
      map.insert(role.label().to_string(), value.map_or(serde_json::Value::Null, Into::into));
    }
    return print_json(&serde_json::Value::Object(map));
  }

  for role in Role::all() {
    let value = current_default(runner, role).await;
    print_stat(role.label(), value.as_deref().unwrap_or("(not set)"));
  }
  Ok(())
}

pub async fn cmd_default_apps_set(
  runner: &Runner,
  terminal: Option<String>,
  file_manager: Option<String>,
  browser: Option<String>,
  editor: Option<String>,
) -> Result<()> {
  let requested = [
    (Role::Terminal, terminal),
    (Role::FileManager, file_manager),
    (Role::Browser, browser),
    (Role::Editor, editor),
  ];
  if requested.iter().all(|(_, desktop_file)| desktop_file.is_none()) {
    bail!("nothing to set; pass at least one of --terminal, --file-manager, --browser, --editor");
  }

  for (role, desktop_file) in requested {
    let Some(desktop_file) = desktop_file else { continue };
    match runner.capture(&defaults::assign(role, &desktop_file)).await? {
      Captured::DryRun(cmd) => print_dry_run(&cmd),
      Captured::Ran(out) if out.success() => {
        print_success(&format!("{}: {desktop_file}", role.label()));
      }
      Captured::Ran(out) => {
        bail!("xdg-mime failed for {}: {}", role.label(), out.stderr.trim_end());
      }
    }
  }
  Ok(())
}
