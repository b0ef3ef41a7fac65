use super::*;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  #[clap(about = "Show best and average WPM, accuracy, attempts and streak")]
  Dashboard(Credentials),
  #[clap(about = "List every recorded attempt, oldest first")]
  History(Credentials),
  #[clap(about = "Rank all users by best WPM")]
  Leaderboard {
    #[clap(long, short, help = "Mark this user's row and show their stats")]
    username: Option<String>,
  },
  #[clap(about = "Check a username and password")]
  Login(Credentials),
  #[clap(about = "List the available test durations")]
  Modes,
  #[clap(about = "Show improvement, consistency and daily averages")]
  Progress(Credentials),
  #[clap(about = "Save the result of a finished typing test")]
  Record {
    #[clap(flatten)]
    credentials: Credentials,
    #[clap(long)]
    wpm: f64,
    #[clap(long)]
    accuracy: f64,
    #[clap(long, help = "Test length in seconds")]
    duration: u32,
  },
  #[clap(about = "Create a new account")]
  Register(Credentials),
}

impl Subcommand {
  pub(crate) fn uses_store(&self) -> bool {
    !matches!(self, Self::Modes)
  }

  pub(crate) fn run(self, store: &Store, out: &mut impl Write) -> Result {
    match self {
      Self::Dashboard(credentials) => {
        let session = credentials.login(store)?;
        report::dashboard(out, &session, &session.summary(store)?)?;
      }
      Self::History(credentials) => {
        let session = credentials.login(store)?;
        report::history(out, &session.scores(store)?)?;
      }
      Self::Leaderboard { username } => {
        report::leaderboard(out, &store.leaderboard()?, username.as_deref())?;

        if let Some(username) = username {
          report::viewer_stats(out, &Summary::new(&store.user_scores(&username)?))?;
        }
      }
      Self::Login(credentials) => {
        let session = credentials.login(store)?;
        writeln!(out, "Login successful. Welcome back, {}!", session.username())?;
      }
      Self::Modes => report::test_modes(out)?,
      Self::Progress(credentials) => {
        let session = credentials.login(store)?;
        report::progress(out, &session.progress(store)?)?;
      }
      Self::Record {
        credentials,
        wpm,
        accuracy,
        duration,
      } => {
        let session = credentials.login(store)?;
        let record = session.record(store, wpm, accuracy, duration)?;
        writeln!(
          out,
          "Saved {:.1} WPM at {:.1}% accuracy over {}s on {}",
          record.wpm, record.accuracy, record.duration_seconds, record.date
        )?;
      }
      Self::Register(credentials) => {
        credentials.register(store)?;
        writeln!(out, "Registration successful. Please log in.")?;
      }
    }

    out.flush()?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::iter, tempfile::TempDir};

  fn store() -> (TempDir, Store) {
    let root = TempDir::new().unwrap();
    let store = Store::new(root.path());
    store.initialize().unwrap();
    (root, store)
  }

  #[derive(Parser)]
  struct Command {
    #[clap(subcommand)]
    subcommand: Subcommand,
  }

  fn run(store: &Store, args: &[&str]) -> Result<String> {
    let command = Command::try_parse_from(iter::once("wpm-ledger").chain(args.iter().copied()))?;

    let mut out = Vec::new();
    command.subcommand.run(store, &mut out)?;

    Ok(String::from_utf8(out)?)
  }

  #[test]
  fn register_record_and_report() {
    let (_root, store) = store();

    assert!(
      run(&store, &["register", "-u", "ada", "-p", "lovelace"])
        .unwrap()
        .contains("Registration successful")
    );

    assert!(
      run(&store, &["login", "-u", "ada", "-p", "lovelace"])
        .unwrap()
        .contains("Welcome back, ada")
    );

    for wpm in ["40", "60"] {
      run(
        &store,
        &[
          "record", "-u", "ada", "-p", "lovelace", "--wpm", wpm, "--accuracy", "95", "--duration",
          "30",
        ],
      )
      .unwrap();
    }

    let dashboard = run(&store, &["dashboard", "-u", "ada", "-p", "lovelace"]).unwrap();

    assert!(dashboard.contains("Best WPM: 60.0"));
    assert!(dashboard.contains("Average WPM: 50.0"));
    assert!(dashboard.contains("Attempts: 2"));

    let progress = run(&store, &["progress", "-u", "ada", "-p", "lovelace"]).unwrap();

    assert!(progress.contains("+50.0% improvement"));

    let history = run(&store, &["history", "-u", "ada", "-p", "lovelace"]).unwrap();

    assert_eq!(history.lines().count(), 2);

    let leaderboard = run(&store, &["leaderboard", "-u", "ada"]).unwrap();

    assert!(leaderboard.contains("ada (you)"));
    assert!(leaderboard.contains("60.0 WPM"));
    assert!(
      leaderboard.contains("Your Stats: Best WPM: 60.0 | Average WPM: 50.0 | Total Attempts: 2")
    );

    assert!(!run(&store, &["leaderboard"]).unwrap().contains("Your Stats"));
  }

  #[test]
  fn wrong_password_is_rejected() {
    let (_root, store) = store();

    run(&store, &["register", "-u", "ada", "-p", "lovelace"]).unwrap();

    let error = run(&store, &["dashboard", "-u", "ada", "-p", "babbage"]).unwrap_err();

    assert!(matches!(
      error.downcast_ref::<Error>(),
      Some(Error::InvalidCredentials)
    ));
  }

  #[test]
  fn record_rejects_negative_wpm() {
    let (_root, store) = store();

    run(&store, &["register", "-u", "ada", "-p", "lovelace"]).unwrap();

    let error = run(
      &store,
      &[
        "record",
        "-u",
        "ada",
        "-p",
        "lovelace",
        "--wpm=-3",
        "--accuracy",
        "95",
        "--duration",
        "30",
      ],
    )
    .unwrap_err();

    assert!(matches!(
      error.downcast_ref::<Error>(),
      Some(Error::InvalidScore { .. })
    ));

    assert!(store.user_scores("ada").unwrap().is_empty());
  }

  #[test]
  fn empty_leaderboard_and_modes() {
    let (_root, store) = store();

    assert!(run(&store, &["leaderboard"]).unwrap().contains("No players yet"));
    assert_eq!(run(&store, &["modes"]).unwrap(), "15s\n30s\n60s\n");
  }

  #[test]
  fn only_modes_skips_the_store() {
    let modes = Command::try_parse_from(["wpm-ledger", "modes"]).unwrap();
    assert!(!modes.subcommand.uses_store());

    let leaderboard = Command::try_parse_from(["wpm-ledger", "leaderboard"]).unwrap();
    assert!(leaderboard.subcommand.uses_store());
  }
}
