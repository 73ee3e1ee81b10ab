use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::challenge::DailyChallenge;
use crate::core::Classifier;
use crate::game::{progress_percent, Advance, Difficulty, GameSession, Stopwatch, TimerPhase};
use crate::learning;
use crate::state::AppState;
use crate::types::{Verdict, VerdictKind};

/// URLs longer than this are shortened for display.
const DISPLAY_WIDTH: usize = 96;

fn shorten(url: &str) -> String {
    if url.chars().count() <= DISPLAY_WIDTH {
        return url.to_string();
    }
    let head: String = url.chars().take(DISPLAY_WIDTH - 3).collect();
    format!("{}...", head)
}

fn label(verdict: &Verdict) -> &'static str {
    match verdict.kind() {
        VerdictKind::Accepted => "SAFE",
        VerdictKind::Suspicious => "PHISHING",
        _ => "INVALID",
    }
}

/// Multi-line text rendering of a verdict.
pub fn format_verdict(url: &str, verdict: &Verdict) -> String {
    let mut out = format!("[{}] {}\n  {}\n", label(verdict), shorten(url), verdict.message);
    for detail in &verdict.details {
        out.push_str(&format!("  - {}\n", detail));
    }
    if let Some(parts) = &verdict.parsed_components {
        out.push_str(&format!("  Protocol: {}\n", parts.scheme));
        out.push_str(&format!("  Host: {}\n", parts.host));
        out.push_str(&format!("  Path: {}\n", parts.path));
    }
    out
}

pub fn run_check<W: Write>(
    out: &mut W,
    state: &mut AppState,
    classifier: &Classifier,
    urls: &[String],
    json: bool,
) -> Result<()> {
    for url in urls {
        let verdict = state.scan(classifier, url);
        if json {
            writeln!(out, "{}", serde_json::to_string(&verdict)?)?;
        } else {
            write!(out, "{}", format_verdict(url.trim(), &verdict))?;
        }
    }
    Ok(())
}

/// Tally of a batch run by verdict kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub safe: usize,
    pub suspicious: usize,
    pub invalid: usize,
}

impl BatchSummary {
    fn add(&mut self, verdict: &Verdict) {
        match verdict.kind() {
            VerdictKind::Accepted => self.safe += 1,
            VerdictKind::Suspicious => self.suspicious += 1,
            _ => self.invalid += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.safe + self.suspicious + self.invalid
    }
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    url: &'a str,
    result: Verdict,
}

pub fn run_batch<W: Write>(
    out: &mut W,
    classifier: &Classifier,
    contents: &str,
    json: bool,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let mut entries = Vec::new();

    for url in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let verdict = classifier.classify(url);
        summary.add(&verdict);
        if json {
            entries.push(BatchEntry { url, result: verdict });
        } else {
            // Suspicious lines name the rules that fired.
            let note = match verdict.kind() {
                VerdictKind::Accepted => String::new(),
                VerdictKind::Suspicious => {
                    format!("[{}]", classifier.rules().matching_ids(url).join(", "))
                }
                _ => verdict.details.first().cloned().unwrap_or_default(),
            };
            writeln!(out, "{:<8} {}  {}", label(&verdict), shorten(url), note)?;
        }
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        writeln!(
            out,
            "\n{} checked: {} safe, {} suspicious, {} invalid",
            summary.total(),
            summary.safe,
            summary.suspicious,
            summary.invalid
        )?;
    }
    tracing::info!(total = summary.total(), suspicious = summary.suspicious, "batch complete");
    Ok(summary)
}

pub fn run_history<W: Write>(out: &mut W, state: &mut AppState, clear: bool) -> Result<()> {
    if clear {
        state.history.clear();
        writeln!(out, "Scan history cleared.")?;
        return Ok(());
    }
    if state.history.is_empty() {
        writeln!(out, "No scans yet. Try `url-guardian check <URL>`.")?;
        return Ok(());
    }
    for record in state.history.iter() {
        let when = record.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        writeln!(out, "{}  {:<8} {}", when, label(&record.result), shorten(&record.url))?;
    }
    writeln!(out, "\n{} of {} recent scans safe", state.history.safe_count(), state.history.len())?;
    Ok(())
}

pub fn run_profile<W: Write>(out: &mut W, state: &AppState) -> Result<()> {
    let p = &state.profile;
    writeln!(out, "{} (level {})", p.username, p.level)?;
    writeln!(out, "  Streak:       {} (best {})", p.streak, p.best_streak)?;
    writeln!(out, "  Accuracy:     {}%", p.accuracy)?;
    writeln!(out, "  Scans:        {}", p.scans)?;
    writeln!(out, "  Games:        {}", p.games)?;
    writeln!(out, "  Success rate: {}%", p.success_rate)?;
    writeln!(out, "  Badges:       {}", p.badges.join(", "))?;
    for module in learning::modules() {
        writeln!(out, "  {:<20} {:>3}%", module.title, p.module_progress(module.id))?;
    }
    Ok(())
}

fn title_case(difficulty: Difficulty) -> String {
    let name = difficulty.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Read a 1-based choice; `None` on end of input.
fn read_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W, max: usize) -> Result<Option<usize>> {
    loop {
        write!(out, "Your pick (1-{}): ", max)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(Some(n)),
            _ => writeln!(out, "Please enter a number between 1 and {}.", max)?,
        }
    }
}

/// Interactive quiz over `input`/`out`.
pub fn run_play<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    state: &mut AppState,
    difficulty: Difficulty,
    stage_time_limit_secs: u64,
) -> Result<()> {
    let mut game = GameSession::start(difficulty);
    let budget = Duration::from_secs(stage_time_limit_secs);

    writeln!(out, "Find the invalid URL! Level: {}", title_case(difficulty))?;

    while !game.is_finished() {
        let options = game.options();
        writeln!(
            out,
            "\nStage {}/{}   Score: {}",
            game.stage_index() + 1,
            game.stage_count(),
            game.score()
        )?;
        for (i, url) in options.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, shorten(url))?;
        }

        let stopwatch = Stopwatch::start();
        let Some(pick) = read_choice(input, out, options.len())? else {
            writeln!(out, "\nGame abandoned. Score: {}", game.score())?;
            return Ok(());
        };
        let elapsed = stopwatch.elapsed();

        let outcome = game.answer(&options[pick - 1], elapsed)?;
        let hurry = match TimerPhase::for_elapsed(elapsed) {
            TimerPhase::Normal => "",
            TimerPhase::Warning => " (hurry up!)",
            TimerPhase::Danger => " (time is running out!)",
        };
        writeln!(
            out,
            "Answered in {:.1}s, {:.0}% of the {}s budget{}",
            elapsed.as_secs_f64(),
            progress_percent(elapsed, budget),
            budget.as_secs(),
            hurry
        )?;

        if outcome.correct {
            state.profile.record_correct_answer();
            writeln!(out, "Correct! +{} points", outcome.points)?;
        } else {
            writeln!(out, "Incorrect! The invalid URL was: {}", shorten(&outcome.correct_url))?;
        }
        writeln!(out, "  {}", outcome.explanation)?;

        if let Advance::Finished { score } = game.next_stage()? {
            writeln!(out, "\nGame Over! Final Score: {}", score)?;
            writeln!(
                out,
                "Congratulations! You scored {} points ({}/{} correct).",
                score,
                game.correct_answers(),
                game.stage_count()
            )?;
        }
    }
    Ok(())
}

pub fn run_learn<W: Write>(out: &mut W, state: &mut AppState, module: Option<&str>) -> Result<()> {
    match module {
        Some(id) => {
            let module = state.open_module(id)?;
            write!(out, "{}", module.render())?;
            writeln!(out, "\nProgress: {}%", state.profile.module_progress(module.id))?;
        }
        None => {
            writeln!(out, "Learning modules:")?;
            for module in learning::modules() {
                writeln!(
                    out,
                    "  {:<10} {:<20} {:>3}%",
                    module.id,
                    module.title,
                    state.profile.module_progress(module.id)
                )?;
            }
        }
    }
    Ok(())
}

pub fn run_challenge<W: Write>(out: &mut W, state: &mut AppState, answer: Option<&str>) -> Result<()> {
    let challenge = DailyChallenge::default();

    let Some(answer) = answer else {
        writeln!(out, "Daily challenge: {}", challenge.prompt())?;
        for (i, option) in challenge.options().iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, option)?;
        }
        writeln!(out, "Current streak: {}", state.profile.streak)?;
        return Ok(());
    };

    // Accept an option number as well as the URL itself.
    let choice = match answer.trim().parse::<usize>() {
        Ok(n) if (1..=challenge.options().len()).contains(&n) => challenge.options()[n - 1].clone(),
        _ => answer.trim().to_string(),
    };

    let outcome = state.answer_challenge(&challenge, &choice)?;
    writeln!(out, "{}", outcome.message)?;
    writeln!(out, "Streak: {} (best {})", state.profile.streak, state.profile.best_streak)?;
    Ok(())
}
