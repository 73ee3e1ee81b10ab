//! Daily "spot the phishing URL" challenge.

use crate::error::GuardianError;

/// One multiple-choice challenge with a single phishing answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyChallenge {
    prompt: String,
    options: Vec<String>,
    answer: String,
    explanation: String,
}

/// Result of answering a challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeOutcome {
    pub correct: bool,
    pub message: String,
}

impl Default for DailyChallenge {
    fn default() -> Self {
        Self::new(
            "Which of these URLs is the phishing attempt?",
            vec![
                "https://secure-paypal.com/login".to_string(),
                "https://www.paypal.com/signin".to_string(),
                "https://www.paypal.com/myaccount/summary".to_string(),
            ],
            "https://secure-paypal.com/login",
            "This is a phishing URL that mimics the real PayPal site.",
        )
    }
}

impl DailyChallenge {
    pub fn new(prompt: &str, options: Vec<String>, answer: &str, explanation: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            options,
            answer: answer.to_string(),
            explanation: explanation.to_string(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Check a chosen URL against the answer.
    pub fn check(&self, choice: &str) -> Result<ChallengeOutcome, GuardianError> {
        let choice = choice.trim();
        if !self.options.iter().any(|o| o == choice) {
            return Err(GuardianError::UnknownOption(choice.to_string()));
        }

        let outcome = if choice == self.answer {
            ChallengeOutcome {
                correct: true,
                message: format!("Correct! {}", self.explanation),
            }
        } else {
            ChallengeOutcome {
                correct: false,
                message: format!("Incorrect. The phishing URL is \"{}\".", self.answer),
            }
        };
        Ok(outcome)
    }
}
