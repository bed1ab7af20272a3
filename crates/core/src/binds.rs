//! Keybind configuration file reconciliation.
//!
//! `binds.conf` is a line-oriented Hyprland config: bind directives
//! intermixed with comments, blank lines and anything else the user put
//! there. Editing happens on the bind lines only, through an ordered
//! list of rows. Saving merges the rows back while preserving every
//! non-bind line verbatim, in its original position.
//!
//! Reconciliation rules:
//! - the i-th original bind line is replaced by the i-th bind row;
//! - a blank row consumes a slot and blanks that line (a removal);
//! - rows left over after the original bind lines run out are appended
//!   at end of file, followed by any newly written comment rows;
//! - every other line is copied through untouched.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::runner::{Captured, Invocation, Runner};

/// Classification of a single configuration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
  Blank,
  Comment,
  Bind,
  Other,
}

/// Classify one line. Leading/trailing whitespace is ignored; the bind
/// check is a case-insensitive prefix match, so `bindm`, `binde` and
/// friends all count.
pub fn classify(line: &str) -> LineKind {
  let trimmed = line.trim();
  if trimmed.is_empty() {
    LineKind::Blank
  } else if trimmed.starts_with('#') {
    LineKind::Comment
  } else if has_bind_prefix(trimmed) {
    LineKind::Bind
  } else {
    LineKind::Other
  }
}

fn has_bind_prefix(trimmed: &str) -> bool {
  trimmed
    .get(..4)
    .is_some_and(|p| p.eq_ignore_ascii_case("bind"))
}

/// An ordered snapshot of a binds file.
#[derive(Debug, Clone)]
pub struct BindsFile {
  path: PathBuf,
  lines: Vec<String>,
  started_empty: bool,
}

impl BindsFile {
  /// Read the file into an ordered line list. A missing file is not an
  /// error: the editor starts empty and [`started_empty`] is set.
  ///
  /// [`started_empty`]: BindsFile::started_empty
  pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
    let path = path.into();
    match fs::read_to_string(&path) {
      Ok(content) => {
        let lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        debug!(path = %path.display(), lines = lines.len(), "loaded binds file");
        Ok(Self {
          path,
          lines,
          started_empty: false,
        })
      }
      Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(Self {
        path,
        lines: Vec::new(),
        started_empty: true,
      }),
      Err(source) => Err(Error::Io { path, source }),
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// True when no file existed at load time.
  pub fn started_empty(&self) -> bool {
    self.started_empty
  }

  /// The editable rows: the bind-classified lines, original text,
  /// original order.
  pub fn rows(&self) -> Vec<String> {
    self
      .lines
      .iter()
      .filter(|l| classify(l) == LineKind::Bind)
      .cloned()
      .collect()
  }

  /// Validate the rows, reconcile them into the original line list and
  /// write the result back. On any failure nothing is written.
  pub fn save(&self, rows: &[String]) -> Result<()> {
    let (bind_rows, comment_rows) = partition_rows(rows)?;
    let merged = reconcile(&self.lines, &bind_rows, &comment_rows);
    let content = merged.join("\n");
    write_atomic(&self.path, &content)?;
    info!(path = %self.path.display(), binds = bind_rows.len(), "saved binds file");
    Ok(())
  }
}

/// Write through a temp file in the same directory, then rename into
/// place. A failure mid-write can never corrupt the existing file.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
  use std::io::Write;

  let dir = match path.parent() {
    Some(dir) if !dir.as_os_str().is_empty() => dir,
    _ => Path::new("."),
  };
  let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  tmp.write_all(content.as_bytes()).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  tmp.persist(path).map_err(|err| Error::Io {
    path: path.to_path_buf(),
    source: err.error,
  })?;
  Ok(())
}

/// Split edited rows into bind rows (positional) and comment rows
/// (appended at end of file). A blank row stays in the bind sequence as
/// an empty slot. Anything else that does not start with `bind` fails
/// validation, reported by row index.
fn partition_rows(rows: &[String]) -> Result<(Vec<String>, Vec<String>)> {
  let mut bind_rows = Vec::new();
  let mut comment_rows = Vec::new();
  let mut invalid = Vec::new();

  for (idx, row) in rows.iter().enumerate() {
    let trimmed = row.trim();
    if trimmed.is_empty() {
      bind_rows.push(String::new());
    } else if trimmed.starts_with('#') {
      comment_rows.push(row.clone());
    } else if has_bind_prefix(trimmed) {
      bind_rows.push(row.clone());
    } else {
      invalid.push(idx);
    }
  }

  if invalid.is_empty() {
    Ok((bind_rows, comment_rows))
  } else {
    Err(Error::InvalidRows { rows: invalid })
  }
}

/// Merge edited rows into the original lines. Pure function; the save
/// path and the tests share it.
fn reconcile(original: &[String], bind_rows: &[String], comment_rows: &[String]) -> Vec<String> {
  let mut out: Vec<String> = Vec::with_capacity(original.len() + comment_rows.len());
  let mut next_bind = 0usize;

  for line in original {
    if classify(line) == LineKind::Bind {
      if next_bind < bind_rows.len() {
        out.push(bind_rows[next_bind].clone());
        next_bind += 1;
      } else {
        out.push(String::new());
      }
    } else {
      out.push(line.clone());
    }
  }

  for row in &bind_rows[next_bind..] {
    out.push(row.clone());
  }
  for row in comment_rows {
    out.push(row.clone());
  }

  out
}

/// Post-save hook: run `hyprctl reload` if the tool is available and
/// return its combined output. `Ok(None)` means hyprctl is not on the
/// search path, which is a note for the operator, not an error.
pub async fn reload_hyprland(runner: &Runner) -> Result<Option<String>> {
  if !runner.dry_run && Runner::which("hyprctl").is_none() {
    return Ok(None);
  }
  let inv = Invocation::new("hyprctl").arg("reload");
  match runner.capture(&inv).await? {
    Captured::DryRun(cmd) => Ok(Some(format!("dry-run: {cmd}"))),
    Captured::Ran(out) => Ok(Some(out.combined())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn write_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("binds.conf");
    fs::write(&path, content).unwrap();
    path
  }

  #[test]
  fn classify_recognizes_each_kind() {
    assert_eq!(classify(""), LineKind::Blank);
    assert_eq!(classify("   "), LineKind::Blank);
    assert_eq!(classify("# a comment"), LineKind::Comment);
    assert_eq!(classify("bind = SUPER, Q, exec, kill"), LineKind::Bind);
    assert_eq!(classify("BIND = SUPER, Q, exec, kill"), LineKind::Bind);
    assert_eq!(classify("bindm = SUPER, mouse:272, movewindow"), LineKind::Bind);
    assert_eq!(classify("  bind = A, B, exec, c"), LineKind::Bind);
    assert_eq!(classify("monitor=,preferred,auto,1"), LineKind::Other);
    assert_eq!(classify("bin = nope"), LineKind::Other);
  }

  #[test]
  fn missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let file = BindsFile::load(dir.path().join("absent.conf")).unwrap();
    assert!(file.started_empty());
    assert!(file.rows().is_empty());
  }

  #[test]
  fn zero_edit_save_reproduces_the_file() {
    let dir = TempDir::new().unwrap();
    let content = "# header\n\nbind = SUPER, Q, exec, kill\nmonitor=,preferred,auto,1\nbindm = SUPER, mouse:272, movewindow\n";
    let path = write_file(&dir, content);

    let file = BindsFile::load(&path).unwrap();
    file.save(&file.rows()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), content);
  }

  #[test]
  fn editing_a_bind_line_preserves_everything_else() {
    // Worked example from the editor contract.
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "# comment\nbind = SUPER, Q, exec, kill\n");

    let file = BindsFile::load(&path).unwrap();
    let mut rows = file.rows();
    rows[0] = "bind = SUPER, W, exec, kitty".to_string();
    file.save(&rows).unwrap();

    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "# comment\nbind = SUPER, W, exec, kitty\n"
    );
  }

  #[test]
  fn non_bind_lines_keep_count_and_order() {
    let dir = TempDir::new().unwrap();
    let content = "# one\nbind = A, B, exec, x\nexec-once = waybar\n# two\nbind = C, D, exec, y\n\nmonitor=eDP-1,preferred,auto,1";
    let path = write_file(&dir, content);

    let file = BindsFile::load(&path).unwrap();
    let mut rows = file.rows();
    rows[1] = "bind = C, D, exec, z".to_string();
    file.save(&rows).unwrap();

    let saved = fs::read_to_string(&path).unwrap();
    let non_bind_before: Vec<&str> = content.split('\n').filter(|l| classify(l) != LineKind::Bind).collect();
    let non_bind_after: Vec<&str> = saved.split('\n').filter(|l| classify(l) != LineKind::Bind).collect();
    assert_eq!(non_bind_before, non_bind_after);
  }

  #[test]
  fn removed_rows_blank_their_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bind = A, B, exec, x\n# keep me\nbind = C, D, exec, y\n");

    let file = BindsFile::load(&path).unwrap();
    let mut rows = file.rows();
    rows.remove(1);
    file.save(&rows).unwrap();

    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "bind = A, B, exec, x\n# keep me\n\n"
    );
  }

  #[test]
  fn extra_rows_are_appended_binds_then_comments() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bind = A, B, exec, x");

    let file = BindsFile::load(&path).unwrap();
    let mut rows = file.rows();
    rows.push("# volume keys".to_string());
    rows.push("bind = , XF86AudioRaiseVolume, exec, pactl set-sink-volume @DEFAULT_SINK@ +5%".to_string());
    file.save(&rows).unwrap();

    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "bind = A, B, exec, x\nbind = , XF86AudioRaiseVolume, exec, pactl set-sink-volume @DEFAULT_SINK@ +5%\n# volume keys"
    );
  }

  #[test]
  fn invalid_rows_abort_the_save_and_touch_nothing() {
    let dir = TempDir::new().unwrap();
    let content = "bind = A, B, exec, x\n";
    let path = write_file(&dir, content);

    let file = BindsFile::load(&path).unwrap();
    let rows = vec![
      "bind = A, B, exec, x".to_string(),
      "exec-once = waybar".to_string(),
    ];
    let err = file.save(&rows).unwrap_err();
    assert!(matches!(err, Error::InvalidRows { ref rows } if rows == &[1]));
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
  }

  #[test]
  fn save_leaves_no_temp_file_behind() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bind = A, B, exec, x\n");

    let file = BindsFile::load(&path).unwrap();
    file.save(&file.rows()).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
      .unwrap()
      .map(|e| e.unwrap().file_name())
      .collect();
    assert_eq!(entries, ["binds.conf"]);
  }

  #[test]
  fn save_into_a_missing_directory_reports_io() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("binds.conf");

    let file = BindsFile::load(&path).unwrap();
    let err = file
      .save(&["bind = A, B, exec, x".to_string()])
      .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
  }

  #[test]
  fn save_on_a_fresh_file_appends_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binds.conf");

    let file = BindsFile::load(&path).unwrap();
    assert!(file.started_empty());
    file
      .save(&["bind = SUPER, Return, exec, kitty".to_string()])
      .unwrap();

    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "bind = SUPER, Return, exec, kitty"
    );
  }
}
