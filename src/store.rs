use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Store {
  accounts: AccountStore,
  ledger: Ledger,
  root: PathBuf,
}

impl Store {
  pub(crate) const ACCOUNTS_FILE: &'static str = "users.txt";
  pub(crate) const SCORES_DIR: &'static str = "scores";

  pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
    let root = root.into();

    Self {
      accounts: AccountStore::new(root.join(Self::ACCOUNTS_FILE)),
      ledger: Ledger::new(root.join(Self::SCORES_DIR)),
      root,
    }
  }

  pub(crate) fn initialize(&self) -> Result<(), Error> {
    fs::create_dir_all(self.ledger.dir()).map_err(Error::storage(self.ledger.dir()))?;

    let _lock = self.lock(LockMode::Exclusive)?;

    OpenOptions::new()
      .create(true)
      .append(true)
      .open(self.accounts.path())
      .map_err(Error::storage(self.accounts.path()))?;

    debug!(root = %self.root.display(), "initialized store");

    Ok(())
  }

  /// Adds an account and its empty ledger. Blank fields, unsafe characters
  /// and taken usernames are rejected without touching the registry.
  pub(crate) fn register_user(&self, username: &str, credential: &str) -> Result<(), Error> {
    let account = Account::new(username, credential)?;

    let _lock = self.lock(LockMode::Exclusive)?;

    if self.accounts.contains(username)? {
      info!(username, "rejected registration of existing username");
      return Err(Error::UsernameTaken {
        username: username.to_owned(),
      });
    }

    self.accounts.append(&account)?;
    self.ledger.create(username)?;

    Ok(())
  }

  pub(crate) fn user_exists(&self, username: &str) -> Result<bool, Error> {
    let _lock = self.lock(LockMode::Shared)?;
    self.accounts.contains(username)
  }

  pub(crate) fn login_user(&self, username: &str, credential: &str) -> Result<bool, Error> {
    let _lock = self.lock(LockMode::Shared)?;
    self.accounts.authenticate(username, credential)
  }

  pub(crate) fn save_score(
    &self,
    username: &str,
    wpm: f64,
    accuracy: f64,
    duration_seconds: u32,
  ) -> Result<ScoreRecord, Error> {
    let _lock = self.lock(LockMode::Exclusive)?;
    self.ledger.save_score(username, wpm, accuracy, duration_seconds)
  }

  pub(crate) fn user_scores(&self, username: &str) -> Result<Vec<ScoreRecord>, Error> {
    let _lock = self.lock(LockMode::Shared)?;
    self.ledger.scores(username)
  }

  pub(crate) fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, Error> {
    let _lock = self.lock(LockMode::Shared)?;
    leaderboard::build(&self.accounts, &self.ledger)
  }

  fn lock(&self, mode: LockMode) -> Result<StoreLock, Error> {
    StoreLock::acquire(&self.root, mode)
  }
}
