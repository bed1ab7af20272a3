//! Terminal emulator detection.
//!
//! Some actions (package installs, the run-command page's terminal
//! mode) want a visible terminal. We pick the first emulator found on
//! the search path and wrap the inner command as an argument vector.
//! The inner command is a single argv element, so quoting, spaces and
//! percent signs in it are inert.

use crate::runner::{Invocation, Runner};

/// Candidate emulators, tried in order of preference.
const CANDIDATES: &[&str] = &[
  "kitty",
  "xdg-terminal",
  "x-terminal-emulator",
  "alacritty",
  "konsole",
  "gnome-terminal",
  "xfce4-terminal",
  "xterm",
];

/// A detected terminal emulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLauncher {
  program: String,
}

impl TerminalLauncher {
  /// Walk the candidate list and return the first emulator on `$PATH`.
  pub fn detect() -> Option<Self> {
    CANDIDATES
      .iter()
      .find(|candidate| Runner::which(candidate).is_some())
      .map(|candidate| Self {
        program: candidate.to_string(),
      })
  }

  /// A launcher for a specific emulator, bypassing detection.
  pub fn with_program(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
    }
  }

  pub fn program(&self) -> &str {
    &self.program
  }

  /// Build `term -e bash -lc <inner>` (gnome-terminal takes `--`
  /// instead of `-e`).
  pub fn wrap(&self, inner: &str) -> Invocation {
    let separator = if self.program == "gnome-terminal" { "--" } else { "-e" };
    Invocation::new(&self.program)
      .arg(separator)
      .args(["bash", "-lc"])
      .arg(inner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wrap_builds_an_exec_argv() {
    let launcher = TerminalLauncher::with_program("kitty");
    let inv = launcher.wrap("yay -Syu && flatpak update -y");
    assert_eq!(inv.program(), "kitty");
    assert_eq!(
      inv.argv(),
      ["-e", "bash", "-lc", "yay -Syu && flatpak update -y"]
    );
  }

  #[test]
  fn gnome_terminal_uses_double_dash() {
    let launcher = TerminalLauncher::with_program("gnome-terminal");
    let inv = launcher.wrap("top");
    assert_eq!(inv.argv(), ["--", "bash", "-lc", "top"]);
  }

  #[test]
  fn percent_signs_in_the_inner_command_stay_literal() {
    // The old printf-templated wrapper corrupted inner commands that
    // contained '%'. The argv form must carry them through untouched.
    let launcher = TerminalLauncher::with_program("alacritty");
    let inner = "pactl set-sink-volume @DEFAULT_SINK@ 50%";
    let inv = launcher.wrap(inner);
    assert_eq!(inv.argv().last().map(String::as_str), Some(inner));
  }
}
