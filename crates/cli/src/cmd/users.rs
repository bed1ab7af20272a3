//! The `users` subcommands. Everything but `list` runs through the
//! privileged runner.

use anyhow::{Context, Result, bail};
use hyprcc_core::accounts;
use hyprcc_core::runner::Runner;

use super::run_privileged;
use crate::output::print_warning;

fn password_or_prompt(password: Option<String>, prompt: &str) -> Result<String> {
  match password {
    Some(password) => Ok(password),
    None => rpassword::prompt_password(prompt).context("Failed to read password"),
  }
}

pub fn cmd_users_list() -> Result<()> {
  for name in accounts::login_users()? {
    println!("{name}");
  }
  Ok(())
}

pub async fn cmd_users_add(
  runner: &Runner,
  username: &str,
  password: Option<String>,
  sudo: bool,
  passwordless_sudo: bool,
) -> Result<()> {
  if accounts::user_exists(username) {
    bail!("user '{username}' already exists");
  }
  let password = password_or_prompt(password, "New password: ")?;

  let wants_admin = sudo || passwordless_sudo;
  let admin_group = wants_admin.then(accounts::sudo_group).flatten();
  if wants_admin && admin_group.is_none() {
    print_warning("No sudo or wheel group found; creating the user without admin rights");
  }

  let script = accounts::add_user_script(username, &password, admin_group, passwordless_sudo);
  run_privileged(runner, &script, "add user").await
}

pub async fn cmd_users_remove(runner: &Runner, username: &str, remove_home: bool) -> Result<()> {
  if !accounts::user_exists(username) {
    bail!("user '{username}' does not exist");
  }
  let script = accounts::delete_user_script(username, remove_home);
  run_privileged(runner, &script, "remove user").await
}

pub async fn cmd_users_passwd(
  runner: &Runner,
  username: &str,
  password: Option<String>,
) -> Result<()> {
  if !accounts::user_exists(username) {
    bail!("user '{username}' does not exist");
  }
  let password = password_or_prompt(password, "New password: ")?;
  let script = accounts::change_password_script(username, &password);
  run_privileged(runner, &script, "change password").await
}
