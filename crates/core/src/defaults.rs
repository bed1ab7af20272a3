//! Default-application roles backed by `xdg-mime`.

use crate::runner::Invocation;

/// The four roles the control center manages, each keyed by the MIME
/// type (or scheme handler) xdg uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  Terminal,
  FileManager,
  Browser,
  Editor,
}

impl Role {
  pub fn all() -> [Role; 4] {
    [Role::Terminal, Role::FileManager, Role::Browser, Role::Editor]
  }

  pub fn mime(self) -> &'static str {
    match self {
      Role::Terminal => "x-scheme-handler/terminal",
      Role::FileManager => "inode/directory",
      Role::Browser => "x-scheme-handler/http",
      Role::Editor => "text/plain",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Role::Terminal => "terminal",
      Role::FileManager => "file-manager",
      Role::Browser => "browser",
      Role::Editor => "editor",
    }
  }
}

/// `xdg-mime query default <mime>`; the caller trims the output.
pub fn query(role: Role) -> Invocation {
  Invocation::new("xdg-mime").args(["query", "default"]).arg(role.mime())
}

/// `xdg-mime default <desktop-file> <mime>`.
pub fn assign(role: Role, desktop_file: &str) -> Invocation {
  Invocation::new("xdg-mime").arg("default").arg(desktop_file).arg(role.mime())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn query_uses_the_role_mime() {
    let inv = query(Role::Browser);
    assert_eq!(inv.to_string(), "xdg-mime query default x-scheme-handler/http");
  }

  #[test]
  fn assign_places_the_desktop_file_before_the_mime() {
    let inv = assign(Role::Editor, "org.gnome.gedit.desktop");
    assert_eq!(
      inv.to_string(),
      "xdg-mime default org.gnome.gedit.desktop text/plain"
    );
  }
}
