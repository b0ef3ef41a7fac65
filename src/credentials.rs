use super::*;

#[derive(Args, Clone, Debug)]
pub(crate) struct Credentials {
  #[clap(long, short)]
  username: String,
  #[clap(long, short, env = "WPM_LEDGER_PASSWORD", hide_env_values = true)]
  password: String,
}

impl Credentials {
  pub(crate) const MIN_PASSWORD_LENGTH: usize = 4;
  pub(crate) const MIN_USERNAME_LENGTH: usize = 3;

  fn username(&self) -> &str {
    self.username.trim()
  }

  /// Registers the account after applying the sign-up form rules: trimmed
  /// username of at least three characters, password of at least four.
  pub(crate) fn register(&self, store: &Store) -> Result<(), Error> {
    let username = self.username();

    if username.is_empty() {
      return Err(Error::BlankUsername);
    }

    if self.password.is_empty() {
      return Err(Error::BlankCredential);
    }

    if username.chars().count() < Self::MIN_USERNAME_LENGTH {
      return Err(Error::UsernameTooShort {
        min: Self::MIN_USERNAME_LENGTH,
      });
    }

    if self.password.chars().count() < Self::MIN_PASSWORD_LENGTH {
      return Err(Error::CredentialTooShort {
        min: Self::MIN_PASSWORD_LENGTH,
      });
    }

    if store.user_exists(username)? {
      return Err(Error::UsernameTaken {
        username: username.to_owned(),
      });
    }

    store.register_user(username, &self.password)
  }

  pub(crate) fn login(&self, store: &Store) -> Result<Session, Error> {
    let username = self.username();

    if username.is_empty() {
      return Err(Error::BlankUsername);
    }

    if self.password.is_empty() {
      return Err(Error::BlankCredential);
    }

    Session::login(store, username, &self.password)
  }
}
