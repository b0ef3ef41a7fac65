use {
  self::{
    account_store::{Account, AccountStore},
    arguments::Arguments,
    credentials::Credentials,
    error::Error,
    leaderboard::LeaderboardEntry,
    ledger::Ledger,
    lock::{LockMode, StoreLock},
    score_record::ScoreRecord,
    session::Session,
    statistics::{Progress, Summary},
    store::Store,
    subcommand::Subcommand,
  },
  chrono::{Local, NaiveDate},
  clap::{Args, Parser},
  crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
  },
  fs2::FileExt,
  std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    fmt::{self, Display, Formatter},
    fs::{self, File, OpenOptions},
    io::{self, BufRead, BufReader, ErrorKind, Write, stdout},
    path::{Path, PathBuf},
    process,
  },
  tracing::{debug, info, warn},
  tracing_subscriber::{EnvFilter, fmt as log_fmt},
};

mod account_store;
mod arguments;
mod credentials;
mod error;
mod leaderboard;
mod ledger;
mod lock;
mod report;
mod score_record;
mod session;
mod statistics;
mod store;
mod subcommand;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  log_fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
