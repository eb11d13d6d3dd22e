//! # Test Result Reports
//!
//! A probe reports every finished test as a single `<test-id>:<exit code>`
//! pair, e.g. `2f1d0b8e-3c4a-4d6e-9f70-1a2b3c4d5e6f:137`. This module turns
//! those pairs into typed [`TestResult`]s and tallies them per [`State`].
//!
//! Parsing is strict about the test id (it must be a UUID) and lenient about
//! the exit code: the code goes through the registry, so an unknown or
//! garbled code becomes `MISSING` rather than an error.

use crate::codes::ExitCode;
use crate::error::{Result, VerdictError};
use crate::state::{classify, State};
use crate::symbol::Vocabulary;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub test_id: Uuid,
    pub code: ExitCode,
    pub state: State,
}

impl TestResult {
    pub fn new(test_id: Uuid, code: ExitCode) -> Self {
        Self {
            test_id,
            code,
            state: classify(code),
        }
    }
}

impl FromStr for TestResult {
    type Err = VerdictError;

    fn from_str(s: &str) -> Result<Self> {
        let line = s.trim();
        let (test, code) = line
            .split_once(':')
            .ok_or_else(|| VerdictError::invalid_result(line, "expected <test-id>:<exit code>"))?;
        let test_id = Uuid::parse_str(test.trim())
            .map_err(|e| VerdictError::invalid_result(line, format!("bad test id ({})", e)))?;
        Ok(TestResult::new(test_id, ExitCode::resolve(code.trim())))
    }
}

/// Per-state tally of a batch of results.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportSummary {
    pub results: Vec<TestResult>,
    /// One entry per state, in scan order, including empty buckets.
    pub counts: Vec<(State, usize)>,
    /// Human-readable reasons for every line that could not be parsed.
    pub rejected: Vec<String>,
}

impl ReportSummary {
    pub fn count(&self, state: State) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == state)
            .map_or(0, |(_, n)| *n)
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Share of decided results (protected or unprotected) that were protected.
    pub fn protection_rate(&self) -> Option<f64> {
        let protected = self.count(State::Protected);
        let decided = protected + self.count(State::Unprotected);
        if decided == 0 {
            None
        } else {
            Some(protected as f64 / decided as f64)
        }
    }
}

/// Parses result lines and tallies them. Blank lines and `#` comments are
/// skipped; malformed lines are recorded in `rejected` without aborting.
pub fn summarize<I, S>(lines: I) -> ReportSummary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = ReportSummary {
        counts: State::members().iter().map(|s| (*s, 0)).collect(),
        ..Default::default()
    };

    for (number, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<TestResult>() {
            Ok(result) => {
                if let Some((_, n)) = summary.counts.iter_mut().find(|(s, _)| *s == result.state) {
                    *n += 1;
                }
                summary.results.push(result);
            }
            Err(e) => {
                debug!(line = number + 1, error = %e, "rejected result line");
                summary.rejected.push(format!("line {}: {}", number + 1, e));
            }
        }
    }

    summary
}
