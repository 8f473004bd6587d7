//! Drives a whole input list through the relation checker on one shared
//! browser session, then persists the verdict sequence as a CSV report.

use crate::checker::RelationChecker;
use crate::error::ProbeError;
use crate::report;
use crate::session::{BrowserSession, SentimentOracle, SutConfig};
use crate::verdict::TestVerdict;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Pause between inputs so the tool under test is not hammered.
pub const DEFAULT_DELAY_MS: u64 = 800;
pub const DEFAULT_OUTPUT: &str = "emphasis_results.csv";

#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub sut: SutConfig,
    pub delay: Duration,
    pub output: PathBuf,
    /// Fixed emphasis word for every input; random per input when `None`.
    pub emphasis_word: Option<String>,
    pub seed: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            sut: SutConfig::default(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            output: PathBuf::from(DEFAULT_OUTPUT),
            emphasis_word: None,
            seed: None,
        }
    }
}

pub struct BatchRunner {
    config: RunnerConfig,
}

impl BatchRunner {
    pub fn new(config: RunnerConfig) -> Self {
        BatchRunner { config }
    }

    /// Run the relation over every input on one browser session.
    ///
    /// Session-start failure is the only fatal error. The session is released
    /// exactly once after the loop; the loop itself cannot fail, so release
    /// happens on every path past `open`. A report-write failure is logged
    /// and the in-memory verdicts are returned regardless.
    pub async fn run(&self, inputs: &[String]) -> Result<Vec<TestVerdict>, ProbeError> {
        let mut session = BrowserSession::open(self.config.sut.clone()).await?;
        info!(count = inputs.len(), "session open, starting batch");

        let verdicts = self.run_with_oracle(&mut session, inputs).await;
        session.close().await;

        match report::write_report(&self.config.output, &verdicts) {
            Ok(()) => info!(path = %self.config.output.display(), rows = verdicts.len(), "report written"),
            Err(e) => {
                warn!(path = %self.config.output.display(), error = %e, "report write failed; verdicts kept in memory")
            }
        }

        Ok(verdicts)
    }

    /// The sequential per-input loop, generic over the predict backend.
    ///
    /// Infallible: per-input failures are already downgraded to error
    /// verdicts by the checker. Every input yields exactly one verdict, in
    /// input order.
    pub async fn run_with_oracle<O: SentimentOracle>(
        &self,
        oracle: &mut O,
        inputs: &[String],
    ) -> Vec<TestVerdict> {
        let mut checker =
            RelationChecker::new(self.config.emphasis_word.clone(), self.config.seed);
        let mut verdicts = Vec::with_capacity(inputs.len());

        for text in inputs {
            info!(input = %text, "testing input");
            let verdict = checker.check(oracle, text).await;
            verdicts.push(verdict);
            sleep(self.config.delay).await;
        }

        verdicts
    }
}

/// Load input sentences from a file, one per line, skipping blank lines.
pub fn load_inputs(path: &Path) -> io::Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}
