use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScoreRecord {
  pub(crate) accuracy: f64,
  pub(crate) date: NaiveDate,
  pub(crate) duration_seconds: u32,
  pub(crate) username: String,
  pub(crate) wpm: f64,
}

impl ScoreRecord {
  const DATE_FORMAT: &'static str = "%Y-%m-%d";
  const FIELDS: usize = 4;

  pub(crate) fn new(
    username: &str,
    wpm: f64,
    accuracy: f64,
    duration_seconds: u32,
    date: NaiveDate,
  ) -> Result<Self, Error> {
    if !wpm.is_finite() {
      return Err(Error::InvalidScore {
        reason: "wpm must be a finite number",
      });
    }

    if wpm < 0.0 {
      return Err(Error::InvalidScore {
        reason: "wpm must not be negative",
      });
    }

    if !accuracy.is_finite() {
      return Err(Error::InvalidScore {
        reason: "accuracy must be a finite number",
      });
    }

    Ok(Self {
      accuracy,
      date,
      duration_seconds,
      username: username.to_owned(),
      wpm,
    })
  }

  /// Parses a `wpm,accuracy,duration,date` ledger line. `line_number` is
  /// one-based and only used for error reporting.
  pub(crate) fn parse(username: &str, line_number: usize, line: &str) -> Result<Self, Error> {
    let corrupt = |reason: String| Error::CorruptRecord {
      line: line_number,
      reason,
    };

    let fields = line.trim().split(',').collect::<Vec<&str>>();

    let [wpm, accuracy, duration, date] = fields[..] else {
      return Err(corrupt(format!(
        "expected {} fields, found {}",
        Self::FIELDS,
        fields.len()
      )));
    };

    let wpm = wpm
      .parse::<f64>()
      .map_err(|error| corrupt(format!("wpm `{wpm}`: {error}")))?;

    let accuracy = accuracy
      .parse::<f64>()
      .map_err(|error| corrupt(format!("accuracy `{accuracy}`: {error}")))?;

    let duration_seconds = duration
      .parse::<u32>()
      .map_err(|error| corrupt(format!("duration `{duration}`: {error}")))?;

    let date = NaiveDate::parse_from_str(date, Self::DATE_FORMAT)
      .map_err(|error| corrupt(format!("date `{date}`: {error}")))?;

    if !wpm.is_finite() || !accuracy.is_finite() {
      return Err(corrupt("non-finite wpm or accuracy".into()));
    }

    if wpm < 0.0 {
      return Err(corrupt(format!("negative wpm {wpm}")));
    }

    Ok(Self {
      accuracy,
      date,
      duration_seconds,
      username: username.to_owned(),
      wpm,
    })
  }
}

impl Display for ScoreRecord {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{:.1},{:.1},{},{}",
      one_decimal(self.wpm),
      one_decimal(self.accuracy),
      self.duration_seconds,
      self.date.format(Self::DATE_FORMAT)
    )
  }
}

// Ties round away from zero, so 62.25 is written as 62.3.
fn one_decimal(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}
