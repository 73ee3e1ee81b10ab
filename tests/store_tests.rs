//! Integration tests for persisted application state.

use std::fs;

use url_guardian::challenge::DailyChallenge;
use url_guardian::*;

#[test]
fn test_scan_session_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::at(dir.path().join("urlGuardianData.json"));
    let classifier = Classifier::new();

    let mut state = store.load(10).unwrap();
    state.scan(&classifier, "https://www.github.com");
    state.scan(&classifier, "https://paypal.verify.com/login.php");
    state.scan(&classifier, "   ");
    state.open_module("phishing").unwrap();
    store.save(&state).unwrap();

    let loaded = store.load(10).unwrap();
    assert_eq!(loaded.history.len(), 2);
    assert_eq!(loaded.history.latest().unwrap().url, "https://paypal.verify.com/login.php");
    assert!(loaded.history.latest().unwrap().result.is_suspicious);
    assert_eq!(loaded.history.safe_count(), 1);
    assert_eq!(loaded.profile.scans, UserProfile::default().scans + 2);
    assert_eq!(loaded.profile.module_progress("phishing"), 25);
    assert_eq!(loaded, state);
}

#[test]
fn test_smaller_limit_trims_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::at(dir.path().join("data.json"));

    let mut state = AppState::with_history_limit(10);
    for i in 0..8 {
        state.scan(&Classifier::new(), &format!("https://site{}.example.com", i));
    }
    store.save(&state).unwrap();

    let loaded = store.load(3).unwrap();
    let urls: Vec<&str> = loaded.history.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["https://site7.example.com", "https://site6.example.com", "https://site5.example.com"]
    );
}

#[test]
fn test_document_without_profile_uses_default_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, r#"{ "scanHistory": [] }"#).unwrap();

    let state = Store::at(&path).load(10).unwrap();
    assert!(state.history.is_empty());
    assert_eq!(state.profile, UserProfile::default());
}

#[test]
fn test_corrupt_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Store::at(&path).load(10).unwrap_err();
    assert!(matches!(err, GuardianError::Json(_)));
}

#[test]
fn test_challenge_streak_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::at(dir.path().join("data.json"));
    let challenge = DailyChallenge::default();

    let mut state = AppState::default();
    let wrong = challenge
        .options()
        .iter()
        .find(|o| o.as_str() != challenge.answer())
        .unwrap()
        .clone();
    let outcome = state.answer_challenge(&challenge, &wrong).unwrap();
    assert!(!outcome.correct);
    store.save(&state).unwrap();

    let loaded = store.load(10).unwrap();
    assert_eq!(loaded.profile.streak, 0);
    assert_eq!(loaded.profile.best_streak, UserProfile::default().best_streak);
}
