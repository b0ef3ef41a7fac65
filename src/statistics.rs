use super::*;

const IMPROVEMENT_WINDOW: usize = 5;
const CONSISTENCY_TOLERANCE: f64 = 0.1;

pub(crate) fn best_wpm(scores: &[ScoreRecord]) -> f64 {
  scores
    .iter()
    .map(|record| record.wpm)
    .reduce(f64::max)
    .unwrap_or(0.0)
}

pub(crate) fn average_wpm(scores: &[ScoreRecord]) -> f64 {
  mean(scores.iter().map(|record| record.wpm))
}

pub(crate) fn average_accuracy(scores: &[ScoreRecord]) -> f64 {
  mean(scores.iter().map(|record| record.accuracy))
}

pub(crate) fn total_attempts(scores: &[ScoreRecord]) -> usize {
  scores.len()
}

/// Number of distinct days with at least one attempt. Days need not be
/// consecutive.
pub(crate) fn streak(scores: &[ScoreRecord]) -> usize {
  scores
    .iter()
    .map(|record| record.date)
    .collect::<BTreeSet<NaiveDate>>()
    .len()
}

/// Percentage change in average WPM between the first and the last
/// `min(5, len / 2)` attempts.
pub(crate) fn improvement(scores: &[ScoreRecord]) -> f64 {
  if scores.len() < 2 {
    return 0.0;
  }

  let window = IMPROVEMENT_WINDOW.min(scores.len() / 2);

  let first = average_wpm(&scores[..window]);
  let last = average_wpm(&scores[scores.len() - window..]);

  if first == 0.0 {
    return 0.0;
  }

  (last - first) / first * 100.0
}

/// Percentage of attempts whose WPM is within 10% of the average WPM.
pub(crate) fn consistency(scores: &[ScoreRecord]) -> f64 {
  if scores.is_empty() {
    return 0.0;
  }

  let average = average_wpm(scores);

  let consistent = scores
    .iter()
    .filter(|record| (record.wpm - average).abs() <= average * CONSISTENCY_TOLERANCE)
    .count();

  consistent as f64 * 100.0 / scores.len() as f64
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DailyPoint {
  pub(crate) accuracy: f64,
  pub(crate) date: NaiveDate,
  pub(crate) wpm: f64,
}

pub(crate) fn daily_averages(scores: &[ScoreRecord]) -> Vec<DailyPoint> {
  let mut days = BTreeMap::<NaiveDate, (f64, f64, usize)>::new();

  for record in scores {
    let (wpm, accuracy, count) = days.entry(record.date).or_default();
    *wpm += record.wpm;
    *accuracy += record.accuracy;
    *count += 1;
  }

  days
    .into_iter()
    .map(|(date, (wpm, accuracy, count))| DailyPoint {
      accuracy: accuracy / count as f64,
      date,
      wpm: wpm / count as f64,
    })
    .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
  let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

  if count == 0 {
    0.0
  } else {
    sum / count as f64
  }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Summary {
  pub(crate) attempts: usize,
  pub(crate) average_accuracy: f64,
  pub(crate) average_wpm: f64,
  pub(crate) best_wpm: f64,
  pub(crate) streak: usize,
}

impl Summary {
  pub(crate) fn new(scores: &[ScoreRecord]) -> Self {
    Self {
      attempts: total_attempts(scores),
      average_accuracy: average_accuracy(scores),
      average_wpm: average_wpm(scores),
      best_wpm: best_wpm(scores),
      streak: streak(scores),
    }
  }
}

impl Display for Summary {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Best WPM: {:.1} | Average WPM: {:.1} | Accuracy: {:.1}% | Attempts: {} | Streak: {} days",
      self.best_wpm, self.average_wpm, self.average_accuracy, self.attempts, self.streak
    )
  }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Progress {
  pub(crate) attempts: usize,
  pub(crate) average_wpm: f64,
  pub(crate) best_wpm: f64,
  pub(crate) consistency: f64,
  pub(crate) daily: Vec<DailyPoint>,
  pub(crate) improvement: f64,
}

impl Progress {
  pub(crate) fn new(scores: &[ScoreRecord]) -> Self {
    Self {
      attempts: total_attempts(scores),
      average_wpm: average_wpm(scores),
      best_wpm: best_wpm(scores),
      consistency: consistency(scores),
      daily: daily_averages(scores),
      improvement: improvement(scores),
    }
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.attempts == 0
  }
}
