//! User configuration locations.
//!
//! Everything this tool edits lives under the per-user configuration
//! directory, `$XDG_CONFIG_HOME` falling back to `~/.config`.

use std::path::PathBuf;

/// Returns the user's home directory.
pub fn home_dir() -> PathBuf {
  let home = std::env::var("HOME").expect("HOME not set");
  PathBuf::from(home)
}

/// Returns the per-user configuration directory.
pub fn user_config_dir() -> PathBuf {
  std::env::var("XDG_CONFIG_HOME")
    .map(PathBuf::from)
    .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns `~/.config/<name>` for a named tool (hypr, waybar, rofi).
pub fn config_subdir(name: &str) -> PathBuf {
  user_config_dir().join(name)
}

/// Returns the Hyprland configuration directory.
pub fn hypr_config_dir() -> PathBuf {
  config_subdir("hypr")
}

/// Returns the keybinds file this tool edits.
pub fn binds_path() -> PathBuf {
  hypr_config_dir().join("binds.conf")
}

/// Returns the main Hyprland configuration file.
pub fn hyprland_conf_path() -> PathBuf {
  hypr_config_dir().join("hyprland.conf")
}
