//! CLI output formatting utilities.
//!
//! Consistent status lines for the terminal: colored symbols when the
//! stream supports it, plain text otherwise. Errors never panic the
//! process; they are printed and turned into a nonzero exit.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message
  );
}

pub fn print_warning(message: &str) {
  println!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stdout, |s| s.yellow()),
    message
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.cyan()),
    message
  );
}

/// A would-be command line, printed instead of executing in dry-run.
pub fn print_dry_run(command: &str) {
  println!(
    "{} {}",
    "dry-run:".if_supports_color(Stream::Stdout, |s| s.yellow()),
    command
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.bold()),
    value
  );
}

/// A section header followed by a block of tool output.
pub fn print_section(title: &str, body: &str) {
  println!("{}", title.if_supports_color(Stream::Stdout, |s| s.bold()));
  let trimmed = body.trim_end();
  if trimmed.is_empty() {
    println!("  (no output)");
  } else {
    println!("{trimmed}");
  }
  println!();
}

pub fn print_json(value: &serde_json::Value) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
