use super::*;

const BAD: Color = Color::Rgb { r: 0xf8, g: 0x71, b: 0x71 };
const BRONZE: Color = Color::Rgb { r: 0xcd, g: 0x7f, b: 0x32 };
const GOLD: Color = Color::Rgb { r: 0xff, g: 0xd7, b: 0x00 };
const GOOD: Color = Color::Rgb { r: 0x4a, g: 0xde, b: 0x80 };
const HIGHLIGHT: Color = Color::Rgb { r: 0xe2, g: 0xb7, b: 0x14 };
const MUTED: Color = Color::Rgb { r: 0x64, g: 0x66, b: 0x69 };
const SILVER: Color = Color::Rgb { r: 0xc0, g: 0xc0, b: 0xc0 };

pub(crate) const TEST_MODES: [u32; 3] = [15, 30, 60];

fn paint(out: &mut impl Write, color: Color, text: impl Display) -> io::Result<()> {
  queue!(out, SetForegroundColor(color), Print(text), ResetColor)
}

pub(crate) fn dashboard(out: &mut impl Write, session: &Session, summary: &Summary) -> io::Result<()> {
  writeln!(out, "Welcome back, {}!", session.username())?;
  writeln!(out, "{summary}")
}

pub(crate) fn history(out: &mut impl Write, scores: &[ScoreRecord]) -> io::Result<()> {
  if scores.is_empty() {
    paint(out, MUTED, "No attempts recorded yet.")?;
    return writeln!(out);
  }

  for record in scores {
    writeln!(
      out,
      "{}  {:>6.1} WPM  {:>5.1}%  {:>3}s",
      record.date, record.wpm, record.accuracy, record.duration_seconds
    )?;
  }

  Ok(())
}

pub(crate) fn leaderboard(
  out: &mut impl Write,
  entries: &[LeaderboardEntry],
  viewer: Option<&str>,
) -> io::Result<()> {
  if entries.is_empty() {
    paint(out, MUTED, "No players yet. Be the first!")?;
    return writeln!(out);
  }

  for (index, entry) in entries.iter().enumerate() {
    let rank = index + 1;

    let (medal, color) = match rank {
      1 => ("🥇", GOLD),
      2 => ("🥈", SILVER),
      3 => ("🥉", BRONZE),
      _ => ("  ", MUTED),
    };

    let name = if viewer == Some(entry.username.as_str()) {
      format!("{} (you)", entry.username)
    } else {
      entry.username.clone()
    };

    paint(out, color, format!("{medal} #{rank:<3}"))?;
    write!(out, " {name:<24}")?;
    paint(out, HIGHLIGHT, format!("{:>7.1} WPM", entry.best_wpm))?;
    paint(out, MUTED, format!("  {} attempts", entry.attempts))?;
    writeln!(out)?;
  }

  Ok(())
}

pub(crate) fn viewer_stats(out: &mut impl Write, summary: &Summary) -> io::Result<()> {
  writeln!(out)?;
  paint(
    out,
    HIGHLIGHT,
    format!(
      "Your Stats: Best WPM: {:.1} | Average WPM: {:.1} | Total Attempts: {}",
      summary.best_wpm, summary.average_wpm, summary.attempts
    ),
  )?;
  writeln!(out)
}

pub(crate) fn progress(out: &mut impl Write, progress: &Progress) -> io::Result<()> {
  writeln!(out, "Total tests: {}", progress.attempts)?;

  if progress.is_empty() {
    paint(out, MUTED, "No data yet. Take your first test!")?;
    return writeln!(out);
  }

  writeln!(out, "Best WPM: {:.1} WPM", progress.best_wpm)?;
  writeln!(out, "Average WPM: {:.1} WPM", progress.average_wpm)?;

  paint(
    out,
    if progress.improvement >= 0.0 { GOOD } else { BAD },
    format!("{:+.1}% improvement", progress.improvement),
  )?;
  writeln!(out)?;

  writeln!(out, "{:.0}% consistent", progress.consistency)?;

  writeln!(out)?;
  writeln!(out, "{:<6} {:>8} {:>9}", "Day", "WPM", "Accuracy")?;

  for point in &progress.daily {
    writeln!(
      out,
      "{:<6} {:>8.1} {:>8.1}%",
      point.date.format("%m/%d"),
      point.wpm,
      point.accuracy
    )?;
  }

  Ok(())
}

pub(crate) fn test_modes(out: &mut impl Write) -> io::Result<()> {
  for seconds in TEST_MODES {
    writeln!(out, "{seconds}s")?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  fn record(wpm: f64, day: u32) -> ScoreRecord {
    ScoreRecord::new(
      "ada",
      wpm,
      95.0,
      30,
      NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
    )
    .unwrap()
  }

  fn entry(username: &str, best_wpm: f64, attempts: usize) -> LeaderboardEntry {
    LeaderboardEntry {
      attempts,
      best_wpm,
      username: username.into(),
    }
  }

  #[test]
  fn leaderboard_decorates_podium_and_viewer() {
    let output = render(|out| {
      leaderboard(
        out,
        &[
          entry("b", 50.0, 2),
          entry("a", 30.0, 5),
          entry("d", 20.0, 1),
          entry("c", 0.0, 0),
        ],
        Some("a"),
      )
    });

    let lines = output.lines().collect::<Vec<&str>>();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("🥇 #1"));
    assert!(lines[0].contains("50.0 WPM"));
    assert!(lines[1].contains("🥈 #2"));
    assert!(lines[1].contains("a (you)"));
    assert!(lines[1].contains("5 attempts"));
    assert!(lines[2].contains("🥉 #3"));
    assert!(lines[3].contains("#4"));
    assert!(!lines[3].contains("(you)"));
  }

  #[test]
  fn empty_leaderboard() {
    assert!(render(|out| leaderboard(out, &[], None)).contains("No players yet"));
  }

  #[test]
  fn viewer_stats_line() {
    let scores = vec![record(40.0, 3), record(55.0, 4), record(61.0, 5)];

    let output = render(|out| viewer_stats(out, &Summary::new(&scores)));

    assert!(
      output.contains("Your Stats: Best WPM: 61.0 | Average WPM: 52.0 | Total Attempts: 3")
    );
  }

  #[test]
  fn progress_empty_state() {
    let output = render(|out| progress(out, &Progress::new(&[])));

    assert!(output.contains("Total tests: 0"));
    assert!(output.contains("Take your first test"));
    assert!(!output.contains("improvement"));
  }

  #[test]
  fn progress_lists_days() {
    let scores = vec![record(40.0, 3), record(50.0, 3), record(60.0, 4)];

    let output = render(|out| progress(out, &Progress::new(&scores)));

    assert!(output.contains("Total tests: 3"));
    assert!(output.contains("+50.0% improvement"));
    assert!(output.contains("02/03"));
    assert!(output.contains("02/04"));
    assert!(output.contains("45.0"));
  }

  #[test]
  fn progress_shows_decline() {
    let scores = vec![record(60.0, 3), record(45.0, 4)];

    assert!(render(|out| progress(out, &Progress::new(&scores))).contains("-25.0% improvement"));
  }

  #[test]
  fn history_lines() {
    let output = render(|out| history(out, &[record(40.0, 3), record(52.5, 9)]));

    assert_eq!(output.lines().count(), 2);
    assert!(output.lines().next().unwrap().starts_with("2024-02-03"));
    assert!(output.contains("52.5 WPM"));
  }

  #[test]
  fn history_empty() {
    assert!(render(|out| history(out, &[])).contains("No attempts recorded yet."));
  }

  #[test]
  fn modes() {
    assert_eq!(render(|out| test_modes(out)), "15s\n30s\n60s\n");
  }
}
