use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Account {
  pub(crate) credential: String,
  pub(crate) username: String,
}

impl Account {
  /// Builds an account, rejecting blank fields and characters that would
  /// corrupt the registry line or escape the scores directory.
  pub(crate) fn new(username: &str, credential: &str) -> Result<Self, Error> {
    Self::validate_username(username)?;

    if credential.trim().is_empty() {
      return Err(Error::BlankCredential);
    }

    if let Some(character) = credential.chars().find(|c| *c == ':' || c.is_control()) {
      return Err(Error::ForbiddenCharacter {
        field: "password",
        character,
      });
    }

    Ok(Self {
      credential: credential.to_owned(),
      username: username.to_owned(),
    })
  }

  pub(crate) fn validate_username(username: &str) -> Result<(), Error> {
    if username.trim().is_empty() {
      return Err(Error::BlankUsername);
    }

    if username == "." || username == ".." {
      return Err(Error::ForbiddenCharacter {
        field: "username",
        character: '.',
      });
    }

    match username
      .chars()
      .find(|c| matches!(c, ':' | '/' | '\\') || c.is_control())
    {
      Some(character) => Err(Error::ForbiddenCharacter {
        field: "username",
        character,
      }),
      None => Ok(()),
    }
  }

  fn parse(line_number: usize, line: &str) -> Result<Self, Error> {
    match line.split(':').collect::<Vec<&str>>()[..] {
      [username, credential] => {
        Self::validate_username(username)?;

        if credential.trim().is_empty() {
          return Err(Error::BlankCredential);
        }

        Ok(Self {
          credential: credential.to_owned(),
          username: username.to_owned(),
        })
      }
      ref fields => Err(Error::CorruptRecord {
        line: line_number,
        reason: format!("expected 2 fields, found {}", fields.len()),
      }),
    }
  }
}

impl Display for Account {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.username, self.credential)
  }
}

#[derive(Clone, Debug)]
pub(crate) struct AccountStore {
  path: PathBuf,
}

impl AccountStore {
  pub(crate) fn new(path: PathBuf) -> Self {
    Self { path }
  }

  pub(crate) fn path(&self) -> &Path {
    &self.path
  }

  /// All well-formed accounts in file order. A registry that does not exist
  /// yet holds no accounts.
  pub(crate) fn accounts(&self) -> Result<Vec<Account>, Error> {
    let file = match File::open(&self.path) {
      Ok(file) => file,
      Err(error) if error.kind() == ErrorKind::NotFound => {
        debug!(path = %self.path.display(), "account registry missing, treating as empty");
        return Ok(Vec::new());
      }
      Err(error) => return Err(Error::storage(&self.path)(error)),
    };

    let mut accounts = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
      let line = line.map_err(Error::storage(&self.path))?;

      if line.trim().is_empty() {
        continue;
      }

      match Account::parse(index + 1, &line) {
        Ok(account) => accounts.push(account),
        Err(error) => warn!(path = %self.path.display(), %error, "skipping account line"),
      }
    }

    Ok(accounts)
  }

  pub(crate) fn contains(&self, username: &str) -> Result<bool, Error> {
    Ok(
      self
        .accounts()?
        .iter()
        .any(|account| account.username == username),
    )
  }

  pub(crate) fn authenticate(&self, username: &str, credential: &str) -> Result<bool, Error> {
    Ok(
      self
        .accounts()?
        .iter()
        .any(|account| account.username == username && account.credential == credential),
    )
  }

  pub(crate) fn usernames(&self) -> Result<Vec<String>, Error> {
    let mut seen = HashSet::new();

    Ok(
      self
        .accounts()?
        .into_iter()
        .filter(|account| seen.insert(account.username.clone()))
        .map(|account| account.username)
        .collect(),
    )
  }

  pub(crate) fn append(&self, account: &Account) -> Result<(), Error> {
    let mut file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(&self.path)
      .map_err(Error::storage(&self.path))?;

    writeln!(file, "{account}").map_err(Error::storage(&self.path))?;

    file.sync_all().map_err(Error::storage(&self.path))?;

    info!(username = %account.username, "registered account");

    Ok(())
  }
}
