//! Small shared helpers.

/// Quote a string for safe interpolation into a `bash -c`/`bash -s` body.
///
/// Single-quote style: the only escape needed is for embedded single
/// quotes. Plain words pass through untouched so rendered command lines
/// stay readable.
pub fn shell_quote(s: &str) -> String {
  let safe = !s.is_empty()
    && s
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '=' | ':' | ',' | '@' | '+'));
  if safe {
    s.to_string()
  } else {
    format!("'{}'", s.replace('\'', r"'\''"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_words_pass_through() {
    assert_eq!(shell_quote("pacman"), "pacman");
    assert_eq!(shell_quote("/usr/bin/env"), "/usr/bin/env");
  }

  #[test]
  fn whitespace_gets_quoted() {
    assert_eq!(shell_quote("two words"), "'two words'");
  }

  #[test]
  fn empty_string_gets_quoted() {
    assert_eq!(shell_quote(""), "''");
  }

  #[test]
  fn single_quotes_are_escaped() {
    assert_eq!(shell_quote("it's"), r"'it'\''s'");
  }

  #[test]
  fn percent_signs_are_preserved_verbatim() {
    // A '%' must never be treated as a format directive downstream.
    assert_eq!(shell_quote("100%"), "'100%'");
  }
}
