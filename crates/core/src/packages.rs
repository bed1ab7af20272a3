//! Package-manager command builders.
//!
//! Arch-flavored: pacman for repository packages, yay for the AUR,
//! flatpak for Flathub. These only build invocations; execution (and
//! dry-run) is the runner's business.

use crate::runner::Invocation;
use crate::util::shell_quote;

/// Where a package comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
  Pacman,
  Aur,
  Flatpak,
}

/// List pending updates (`yay -Qu` covers repos and AUR).
pub fn list_updates() -> Invocation {
  Invocation::new("yay").arg("-Qu")
}

/// Full non-interactive system update.
pub fn full_update() -> Invocation {
  Invocation::new("yay").args(["-Syu", "--devel", "--timeupdate", "--needed", "--noconfirm"])
}

/// Install one package through the given backend.
pub fn install(backend: Backend, package: &str) -> Invocation {
  match backend {
    Backend::Pacman => Invocation::new("sudo").args(["pacman", "-S", "--noconfirm"]).arg(package),
    Backend::Aur => Invocation::new("yay").args(["-S", "--noconfirm"]).arg(package),
    Backend::Flatpak => Invocation::new("flatpak").args(["install", "-y", "flathub"]).arg(package),
  }
}

/// The install command as a shell line, for running inside a terminal
/// emulator window.
pub fn install_shell(backend: Backend, package: &str) -> String {
  let pkg = shell_quote(package);
  match backend {
    Backend::Pacman => format!("sudo pacman -S --noconfirm {pkg}"),
    Backend::Aur => format!("yay -S --noconfirm {pkg}"),
    Backend::Flatpak => format!("flatpak install -y flathub {pkg}"),
  }
}

/// Combined repo + AUR + flatpak update as a shell line for a terminal.
pub fn combined_update_shell() -> &'static str {
  "yay -Syu && flatpak update -y"
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn full_update_is_noninteractive() {
    let inv = full_update();
    assert_eq!(inv.program(), "yay");
    assert!(inv.argv().contains(&"--noconfirm".to_string()));
  }

  #[test]
  fn install_targets_the_right_backend() {
    assert_eq!(install(Backend::Pacman, "kitty").program(), "sudo");
    assert_eq!(install(Backend::Aur, "kitty").program(), "yay");
    assert_eq!(install(Backend::Flatpak, "org.gimp.GIMP").program(), "flatpak");
  }

  #[test]
  fn install_shell_quotes_the_package() {
    assert_eq!(
      install_shell(Backend::Pacman, "name with space"),
      "sudo pacman -S --noconfirm 'name with space'"
    );
  }
}
