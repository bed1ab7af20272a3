//! User account lookups and the privileged account scripts.
//!
//! The scripts returned here are the bodies fed to the privileged
//! runner (`pkexec /bin/bash -s`). They shell-quote every user-supplied
//! value and run under `set -e` so a failing step aborts the rest.

use std::path::Path;

use nix::unistd::{Group, User};

use crate::error::{Error, Result};
use crate::util::shell_quote;

/// True when an account with this name exists.
pub fn user_exists(name: &str) -> bool {
  matches!(User::from_name(name), Ok(Some(_)))
}

/// The administrative group to enroll new sudo users into: `sudo` where
/// it exists, `wheel` otherwise (Arch), else `None`.
pub fn sudo_group() -> Option<&'static str> {
  if matches!(Group::from_name("sudo"), Ok(Some(_))) {
    Some("sudo")
  } else if matches!(Group::from_name("wheel"), Ok(Some(_))) {
    Some("wheel")
  } else {
    None
  }
}

/// Login accounts (UID >= 1000, excluding `nobody`), in passwd order.
pub fn login_users() -> Result<Vec<String>> {
  let path = Path::new("/etc/passwd");
  let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(parse_passwd(&content))
}

fn parse_passwd(content: &str) -> Vec<String> {
  content
    .lines()
    .filter_map(|line| {
      let mut fields = line.split(':');
      let name = fields.next()?;
      let _password = fields.next()?;
      let uid: u32 = fields.next()?.parse().ok()?;
      (uid >= 1000 && uid != 65534).then(|| name.to_string())
    })
    .collect()
}

/// Script: create a user with a home directory and password, optionally
/// enrolled in the administrative group, optionally with passwordless
/// sudo via a sudoers drop-in.
pub fn add_user_script(
  username: &str,
  password: &str,
  admin_group: Option<&str>,
  passwordless_sudo: bool,
) -> String {
  let user = shell_quote(username);
  let pass = shell_quote(password);
  let mut script = format!(
    "#!/bin/bash\nset -e\nuseradd -m -s /bin/zsh {user}\necho {user}:{pass} | chpasswd\n"
  );
  if let Some(group) = admin_group {
    script.push_str(&format!("usermod -aG {group} {user}\n"));
    if passwordless_sudo {
      script.push_str(&format!(
        "echo {user} 'ALL=(ALL) NOPASSWD: ALL' > /etc/sudoers.d/{user}\nchmod 0440 /etc/sudoers.d/{user}\n"
      ));
    }
  }
  script.push_str("echo 'OK'\n");
  script
}

/// Script: delete a user (optionally with their home directory) and
/// clean up any sudoers drop-in left by [`add_user_script`].
pub fn delete_user_script(username: &str, remove_home: bool) -> String {
  let user = shell_quote(username);
  let userdel = if remove_home { "userdel -r" } else { "userdel" };
  format!("#!/bin/bash\nset -e\n{userdel} {user}\nrm -f /etc/sudoers.d/{user}\necho 'OK'\n")
}

/// Script: set a user's password via `chpasswd`.
pub fn change_password_script(username: &str, password: &str) -> String {
  let user = shell_quote(username);
  let pass = shell_quote(password);
  format!("#!/bin/bash\nset -e\necho {user}:{pass} | chpasswd\necho 'OK'\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_passwd_keeps_login_accounts_only() {
    let content = "root:x:0:0:root:/root:/bin/bash\n\
                   daemon:x:1:1::/usr/sbin:/usr/sbin/nologin\n\
                   alice:x:1000:1000:Alice:/home/alice:/bin/zsh\n\
                   bob:x:1001:1001::/home/bob:/bin/bash\n\
                   nobody:x:65534:65534::/nonexistent:/usr/sbin/nologin\n";
    assert_eq!(parse_passwd(content), ["alice", "bob"]);
  }

  #[test]
  fn parse_passwd_skips_malformed_lines() {
    assert!(parse_passwd("garbage\nalso:garbage\n").is_empty());
  }

  #[test]
  fn add_user_script_plain() {
    let script = add_user_script("alice", "s3cret", None, false);
    assert!(script.starts_with("#!/bin/bash\nset -e\n"));
    assert!(script.contains("useradd -m -s /bin/zsh alice\n"));
    assert!(script.contains("echo alice:s3cret | chpasswd\n"));
    assert!(!script.contains("usermod"));
    assert!(!script.contains("sudoers.d"));
  }

  #[test]
  fn add_user_script_with_admin_group_and_passwordless() {
    let script = add_user_script("alice", "pw", Some("wheel"), true);
    assert!(script.contains("usermod -aG wheel alice\n"));
    assert!(script.contains("> /etc/sudoers.d/alice\n"));
    assert!(script.contains("chmod 0440 /etc/sudoers.d/alice\n"));
  }

  #[test]
  fn scripts_quote_hostile_values() {
    let script = change_password_script("alice", "pa ss'word");
    assert!(script.contains(r"echo alice:'pa ss'\''word' | chpasswd"));
  }

  #[test]
  fn delete_user_script_variants() {
    assert!(delete_user_script("bob", true).contains("userdel -r bob\n"));
    assert!(delete_user_script("bob", false).contains("\nuserdel bob\n"));
  }
}
