use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Session {
  username: String,
}

impl Session {
  pub(crate) fn login(store: &Store, username: &str, credential: &str) -> Result<Self, Error> {
    if !store.login_user(username, credential)? {
      warn!(username, "login failed");
      return Err(Error::InvalidCredentials);
    }

    info!(username, "logged in");

    Ok(Self {
      username: username.to_owned(),
    })
  }

  pub(crate) fn username(&self) -> &str {
    &self.username
  }

  pub(crate) fn record(
    &self,
    store: &Store,
    wpm: f64,
    accuracy: f64,
    duration_seconds: u32,
  ) -> Result<ScoreRecord, Error> {
    store.save_score(&self.username, wpm, accuracy, duration_seconds)
  }

  pub(crate) fn scores(&self, store: &Store) -> Result<Vec<ScoreRecord>, Error> {
    store.user_scores(&self.username)
  }

  pub(crate) fn summary(&self, store: &Store) -> Result<Summary, Error> {
    Ok(Summary::new(&self.scores(store)?))
  }

  pub(crate) fn progress(&self, store: &Store) -> Result<Progress, Error> {
    Ok(Progress::new(&self.scores(store)?))
  }
}
