//! The `binds` subcommands: list and edit the keybind rows.

use std::path::PathBuf;

use anyhow::{Result, bail};
use hyprcc_core::binds::{self, BindsFile};
use hyprcc_core::paths;
use hyprcc_core::runner::Runner;

use crate::output::{print_info, print_success};

fn load(file: Option<PathBuf>) -> Result<BindsFile> {
  let path = file.unwrap_or_else(paths::binds_path);
  let binds = BindsFile::load(path)?;
  if binds.started_empty() {
    print_info(&format!(
      "No binds file at {}; starting empty",
      binds.path().display()
    ));
  }
  Ok(binds)
}

async fn save_and_reload(
  runner: &Runner,
  file: &BindsFile,
  rows: &[String],
  no_reload: bool,
) -> Result<()> {
  file.save(rows)?;
  print_success(&format!("Saved {}", file.path().display()));
  if no_reload {
    return Ok(());
  }
  match binds::reload_hyprland(runner).await? {
    Some(output) => {
      let trimmed = output.trim();
      if trimmed.is_empty() {
        print_info("Reloaded Hyprland");
      } else {
        print_info(&format!("hyprctl reload: {trimmed}"));
      }
    }
    None => {
      print_info("hyprctl not found; edit your config or restart Hyprland to apply");
    }
  }
  Ok(())
}

pub fn cmd_binds_list(file: Option<PathBuf>) -> Result<()> {
  let binds = load(file)?;
  let rows = binds.rows();
  if rows.is_empty() {
    print_info("No bind lines");
    return Ok(());
  }
  for (index, row) in rows.iter().enumerate() {
    println!("{index:3}  {row}");
  }
  Ok(())
}

pub async fn cmd_binds_add(
  runner: &Runner,
  file: Option<PathBuf>,
  line: String,
  no_reload: bool,
) -> Result<()> {
  let binds = load(file)?;
  let mut rows = binds.rows();
  rows.push(line);
  save_and_reload(runner, &binds, &rows, no_reload).await
}

pub async fn cmd_binds_set(
  runner: &Runner,
  file: Option<PathBuf>,
  index: usize,
  line: String,
  no_reload: bool,
) -> Result<()> {
  let binds = load(file)?;
  let mut rows = binds.rows();
  if index >= rows.len() {
    bail!("no bind row {index} (the file has {})", rows.len());
  }
  rows[index] = line;
  save_and_reload(runner, &binds, &rows, no_reload).await
}

pub async fn cmd_binds_remove(
  runner: &Runner,
  file: Option<PathBuf>,
  index: usize,
  no_reload: bool,
) -> Result<()> {
  let binds = load(file)?;
  let mut rows = binds.rows();
  if index >= rows.len() {
    bail!("no bind row {index} (the file has {})", rows.len());
  }
  rows.remove(index);
  save_and_reload(runner, &binds, &rows, no_reload).await
}

pub async fn cmd_binds_comment(
  runner: &Runner,
  file: Option<PathBuf>,
  text: String,
  no_reload: bool,
) -> Result<()> {
  let binds = load(file)?;
  let mut rows = binds.rows();
  let comment = if text.trim_start().starts_with('#') {
    text
  } else {
    format!("# {text}")
  };
  rows.push(comment);
  save_and_reload(runner, &binds, &rows, no_reload).await
}
