use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Ledger {
  dir: PathBuf,
}

impl Ledger {
  pub(crate) fn new(dir: PathBuf) -> Self {
    Self { dir }
  }

  pub(crate) fn dir(&self) -> &Path {
    &self.dir
  }

  pub(crate) fn path(&self, username: &str) -> PathBuf {
    self.dir.join(format!("{username}.txt"))
  }

  pub(crate) fn create(&self, username: &str) -> Result<(), Error> {
    let path = self.path(username);

    OpenOptions::new()
      .create(true)
      .append(true)
      .open(&path)
      .map_err(Error::storage(&path))?;

    debug!(path = %path.display(), "created score ledger");

    Ok(())
  }

  pub(crate) fn save_score(
    &self,
    username: &str,
    wpm: f64,
    accuracy: f64,
    duration_seconds: u32,
  ) -> Result<ScoreRecord, Error> {
    Account::validate_username(username)?;

    let record = ScoreRecord::new(
      username,
      wpm,
      accuracy,
      duration_seconds,
      Local::now().date_naive(),
    )?;

    self.append(&record)?;

    Ok(record)
  }

  pub(crate) fn append(&self, record: &ScoreRecord) -> Result<(), Error> {
    let path = self.path(&record.username);

    let mut file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(&path)
      .map_err(Error::storage(&path))?;

    writeln!(file, "{record}").map_err(Error::storage(&path))?;

    file.sync_all().map_err(Error::storage(&path))?;

    info!(
      username = %record.username,
      wpm = record.wpm,
      accuracy = record.accuracy,
      duration_seconds = record.duration_seconds,
      "saved score"
    );

    Ok(())
  }

  /// Records in append order. A user who has never saved a score has an
  /// empty ledger, not an error. Malformed lines are logged and skipped.
  pub(crate) fn scores(&self, username: &str) -> Result<Vec<ScoreRecord>, Error> {
    Account::validate_username(username)?;

    let path = self.path(username);

    let file = match File::open(&path) {
      Ok(file) => file,
      Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
      Err(error) => return Err(Error::storage(&path)(error)),
    };

    let mut scores = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
      let line = line.map_err(Error::storage(&path))?;

      if line.trim().is_empty() {
        continue;
      }

      match ScoreRecord::parse(username, index + 1, &line) {
        Ok(record) => scores.push(record),
        Err(error) => warn!(path = %path.display(), %error, "skipping score line"),
      }
    }

    Ok(scores)
  }
}
