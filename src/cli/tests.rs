use super::*;
use crate::core::Classifier;
use crate::state::AppState;
use clap::Parser;
use std::io::Cursor;

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn parse_check_with_json() {
    let cli = Cli::try_parse_from(["url-guardian", "check", "https://a.com", "https://b.com", "--json"]).unwrap();
    match cli.command {
        CliCommand::Check { urls, json } => {
            assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
            assert!(json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn parse_check_requires_url() {
    assert!(Cli::try_parse_from(["url-guardian", "check"]).is_err());
}

#[test]
fn parse_play_difficulty() {
    let cli = Cli::try_parse_from(["url-guardian", "play", "--difficulty", "hard"]).unwrap();
    match cli.command {
        CliCommand::Play { difficulty } => assert_eq!(difficulty, Some(Difficulty::Hard)),
        other => panic!("unexpected command: {:?}", other),
    }
    assert!(Cli::try_parse_from(["url-guardian", "play", "-d", "expert"]).is_err());
}

#[test]
fn check_records_history() {
    let mut state = AppState::default();
    let mut buf = Vec::new();
    let urls = vec!["https://www.github.com".to_string(), "https://evil.tk".to_string()];

    run_check(&mut buf, &mut state, &Classifier::new(), &urls, false).unwrap();

    let text = output(buf);
    assert!(text.contains("[SAFE] https://www.github.com"));
    assert!(text.contains("[PHISHING] https://evil.tk"));
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history.latest().unwrap().url, "https://evil.tk");
}

#[test]
fn check_json_output() {
    let mut state = AppState::default();
    let mut buf = Vec::new();
    run_check(&mut buf, &mut state, &Classifier::new(), &["".to_string()], true).unwrap();

    let json: serde_json::Value = serde_json::from_str(output(buf).trim()).unwrap();
    assert_eq!(json["isValid"], false);
    assert_eq!(json["message"], "Please enter a URL");
}

#[test]
fn batch_summary_counts() {
    let contents = "https://www.github.com\n\nftp://example.com\nhttps://paypal.verify.com/login.php\n";
    let mut buf = Vec::new();
    let summary = run_batch(&mut buf, &Classifier::new(), contents, false).unwrap();

    assert_eq!(summary, BatchSummary { safe: 1, suspicious: 1, invalid: 1 });
    let text = output(buf);
    assert!(text.contains("3 checked: 1 safe, 1 suspicious, 1 invalid"));
    assert!(text.contains("https://paypal.verify.com/login.php  [brand-mimicry, login-php]"));
    assert!(text.contains("ftp://example.com  URL should start with http:// or https://"));
}

#[test]
fn batch_json_is_array() {
    let mut buf = Vec::new();
    run_batch(&mut buf, &Classifier::new(), "https://www.github.com\n", true).unwrap();

    let json: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
    assert_eq!(json[0]["url"], "https://www.github.com");
    assert_eq!(json[0]["result"]["parsedURL"]["hostname"], "www.github.com");
}

#[test]
fn history_clear() {
    let mut state = AppState::default();
    state.scan(&Classifier::new(), "https://www.github.com");

    let mut buf = Vec::new();
    run_history(&mut buf, &mut state, false).unwrap();
    let text = output(buf);
    assert!(text.contains("https://www.github.com"));
    assert!(text.contains("1 of 1 recent scans safe"));

    let mut buf = Vec::new();
    run_history(&mut buf, &mut state, true).unwrap();
    assert!(state.history.is_empty());
}

#[test]
fn play_abandoned_on_eof() {
    let mut state = AppState::default();
    let mut input = Cursor::new(Vec::<u8>::new());
    let mut buf = Vec::new();

    run_play(&mut input, &mut buf, &mut state, Difficulty::Easy, 15).unwrap();
    assert!(output(buf).contains("Game abandoned. Score: 0"));
}

#[test]
fn play_full_game() {
    let mut state = AppState::default();
    // Out-of-range and non-numeric picks are re-prompted.
    let mut input = Cursor::new(b"9\nabc\n1\n1\n1\n1\n1\n".to_vec());
    let mut buf = Vec::new();

    run_play(&mut input, &mut buf, &mut state, Difficulty::Medium, 15).unwrap();

    let text = output(buf);
    assert!(text.contains("Level: Medium"));
    assert!(text.contains("Please enter a number between 1 and 4."));
    assert!(text.contains("Game Over! Final Score:"));
    assert_eq!(text.matches("Stage ").count(), 5);
}

#[test]
fn learn_updates_progress() {
    let mut state = AppState::default();
    let mut buf = Vec::new();
    run_learn(&mut buf, &mut state, Some("browsing")).unwrap();

    let text = output(buf);
    assert!(text.contains("Secure Browsing"));
    assert!(text.contains("Progress: 25%"));
    assert!(run_learn(&mut Vec::<u8>::new(), &mut state, Some("nope")).is_err());
}

#[test]
fn challenge_by_number() {
    let mut state = AppState::default();
    let mut buf = Vec::new();
    run_challenge(&mut buf, &mut state, Some("1")).unwrap();

    assert!(output(buf).starts_with("Correct!"));
    assert_eq!(state.profile.streak, 13);
}

#[test]
fn challenge_listing() {
    let mut state = AppState::default();
    let mut buf = Vec::new();
    run_challenge(&mut buf, &mut state, None).unwrap();

    let text = output(buf);
    assert!(text.contains("1. https://secure-paypal.com/login"));
    assert_eq!(state.profile.streak, 12);
}

#[test]
fn long_urls_are_shortened() {
    let url = format!("https://example.com/{}", "a".repeat(10_000));
    let text = format_verdict(&url, &Classifier::new().classify(&url));
    assert!(text.lines().next().unwrap().len() < 120);
}
