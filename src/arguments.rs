use super::*;

#[derive(Debug, Parser)]
#[clap(version, about = "Track typing test scores, progress and rankings")]
pub(crate) struct Arguments {
  #[clap(long, env = "WPM_LEDGER_DATA_DIR", default_value = "user_data")]
  data_dir: PathBuf,
  #[clap(subcommand)]
  subcommand: Subcommand,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    self.run_with(&mut stdout().lock())
  }

  fn run_with(self, out: &mut impl Write) -> Result {
    let store = Store::new(self.data_dir);

    if self.subcommand.uses_store() {
      store.initialize()?;
    }

    self.subcommand.run(&store, out)
  }
}
