use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LeaderboardEntry {
  pub(crate) attempts: usize,
  pub(crate) best_wpm: f64,
  pub(crate) username: String,
}

/// Ranks every registered account by best WPM, highest first. Accounts
/// without scores rank at 0. Equal scores are ordered by username.
pub(crate) fn build(accounts: &AccountStore, ledger: &Ledger) -> Result<Vec<LeaderboardEntry>, Error> {
  let mut entries = accounts
    .usernames()?
    .into_iter()
    .map(|username| {
      let scores = ledger.scores(&username)?;

      Ok(LeaderboardEntry {
        attempts: statistics::total_attempts(&scores),
        best_wpm: statistics::best_wpm(&scores),
        username,
      })
    })
    .collect::<Result<Vec<LeaderboardEntry>, Error>>()?;

  entries.sort_by(|a, b| {
    b.best_wpm
      .total_cmp(&a.best_wpm)
      .then_with(|| a.username.cmp(&b.username))
  });

  Ok(entries)
}
