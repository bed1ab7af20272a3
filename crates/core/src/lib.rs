//! hyprcc-core: library behind the `hyprcc` control-center CLI.
//!
//! This crate wraps the shell utilities a Hyprland desktop is managed
//! with (`pacman`/`yay`, `flatpak`, `xdg-mime`, `pactl`, `hyprctl`,
//! `useradd`/`userdel`/`chpasswd`, `pkexec`) behind typed invocations:
//! - [`runner`]: argv-based process execution with an explicit dry-run
//!   flag
//! - [`privileged`]: `pkexec`-backed script execution with an async
//!   exit watcher
//! - [`binds`]: the keybind-file reconciler
//! - [`terminal`], [`paths`], [`accounts`], [`packages`], [`defaults`]:
//!   the per-page building blocks

#[cfg(unix)]
pub mod accounts;
pub mod binds;
pub mod defaults;
pub mod error;
pub mod packages;
pub mod paths;
#[cfg(unix)]
pub mod privileged;
pub mod runner;
pub mod terminal;
pub mod util;

pub use error::{Error, Result};
