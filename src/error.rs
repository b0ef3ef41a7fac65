use {super::*, thiserror::Error as ThisError};

#[derive(Debug, ThisError)]
pub(crate) enum Error {
  #[error("please enter username and password: username is blank")]
  BlankUsername,

  #[error("please enter username and password: password is blank")]
  BlankCredential,

  #[error("password must be at least {min} characters")]
  CredentialTooShort { min: usize },

  /// Field contains a character that would break the plain-text layout.
  #[error("{field} may not contain {character:?}")]
  ForbiddenCharacter { field: &'static str, character: char },

  #[error("invalid username or password")]
  InvalidCredentials,

  #[error("invalid score: {reason}")]
  InvalidScore { reason: &'static str },

  /// Score or account line that failed to parse. Readers skip these.
  #[error("malformed record on line {line}: {reason}")]
  CorruptRecord { line: usize, reason: String },

  #[error("storage error at `{}`: {source}", .path.display())]
  Storage { path: PathBuf, source: io::Error },

  #[error("username `{username}` already exists")]
  UsernameTaken { username: String },

  #[error("username must be at least {min} characters")]
  UsernameTooShort { min: usize },
}

impl Error {
  pub(crate) fn storage(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
    move |source| Self::Storage {
      path: path.to_owned(),
      source,
    }
  }
}
