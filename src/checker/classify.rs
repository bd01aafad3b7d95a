// src/checker/classify.rs
// =============================================================================
// Turns the raw outcome of a probe into a verdict.
//
// The rule is deliberately narrow:
//   - HTTP 404                -> Broken
//   - any transport failure   -> Broken
//   - every other status code -> NotBroken (200, 301, 403, 500, ...)
// =============================================================================

use reqwest::StatusCode;
use serde::Serialize;
use std::fmt;

/// What happened when we probed a URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// The server answered with this HTTP status code
    Status(u16),
    /// The request never produced a response; holds a description of why
    Error(String),
}

impl Outcome {
    /// Short code shown in reports: the status number or the error text
    pub fn display_code(&self) -> String {
        match self {
            Outcome::Status(code) => code.to_string(),
            Outcome::Error(message) => message.clone(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_code())
    }
}

/// Binary classification of an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Broken,
    NotBroken,
}

/// Classifies a probe outcome. Pure, never fails.
pub fn classify(outcome: &Outcome) -> Verdict {
    match outcome {
        Outcome::Status(code) if *code == StatusCode::NOT_FOUND.as_u16() => Verdict::Broken,
        Outcome::Status(_) => Verdict::NotBroken,
        Outcome::Error(_) => Verdict::Broken,
    }
}
