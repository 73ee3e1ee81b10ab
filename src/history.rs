//! Bounded, newest-first history of scanned URLs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Verdict;

/// Number of scans kept unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// One scanned URL and the verdict it received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub result: Verdict,
}

impl ScanRecord {
    pub fn new(url: impl Into<String>, result: Verdict) -> Self {
        Self {
            url: url.into(),
            timestamp: Utc::now(),
            result,
        }
    }
}

/// Scan history, most recent scan first.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanHistory {
    records: Vec<ScanRecord>,
    limit: usize,
}

impl Default for ScanHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl ScanHistory {
    /// Empty history that keeps at most `limit` records (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Rebuild a history from stored records, newest first.
    pub fn from_records(mut records: Vec<ScanRecord>, limit: usize) -> Self {
        let limit = limit.max(1);
        records.truncate(limit);
        Self { records, limit }
    }

    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    /// Insert a record at the front, evicting the oldest beyond the limit.
    pub fn push(&mut self, record: ScanRecord) {
        self.records.insert(0, record);
        self.records.truncate(self.limit);
    }

    /// Record a verdict for `url` with the current time.
    pub fn record(&mut self, url: impl Into<String>, result: Verdict) {
        self.push(ScanRecord::new(url, result));
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScanRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&ScanRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Count of records whose verdict was accepted.
    pub fn safe_count(&self) -> usize {
        self.records.iter().filter(|r| r.result.is_safe()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;

    #[test]
    fn test_newest_first() {
        let mut history = ScanHistory::default();
        history.record("https://a.com", classify("https://a.com"));
        history.record("https://b.com", classify("https://b.com"));

        let urls: Vec<&str> = history.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://b.com", "https://a.com"]);
        assert_eq!(history.latest().unwrap().url, "https://b.com");
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = ScanHistory::default();
        for i in 0..12 {
            let url = format!("https://site{}.com", i);
            history.record(url.clone(), classify(&url));
        }

        assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(history.latest().unwrap().url, "https://site11.com");
        assert_eq!(history.iter().last().unwrap().url, "https://site2.com");
    }

    #[test]
    fn test_zero_limit_keeps_one() {
        let mut history = ScanHistory::with_limit(0);
        history.record("https://a.com", classify("https://a.com"));
        history.record("https://b.com", classify("https://b.com"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_safe_count_and_clear() {
        let mut history = ScanHistory::default();
        history.record("https://www.github.com", classify("https://www.github.com"));
        history.record("https://evil.tk", classify("https://evil.tk"));
        assert_eq!(history.safe_count(), 1);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_from_records_applies_limit() {
        let records: Vec<ScanRecord> = (0..4)
            .map(|i| ScanRecord::new(format!("https://s{}.com", i), classify("")))
            .collect();
        let history = ScanHistory::from_records(records, 3);
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().unwrap().url, "https://s0.com");
    }

    #[test]
    fn test_record_json_shape() {
        let record = ScanRecord::new("https://www.github.com", classify("https://www.github.com"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["url"], "https://www.github.com");
        assert_eq!(json["result"]["isValid"], true);
        assert!(json["timestamp"].is_string());
    }
}
