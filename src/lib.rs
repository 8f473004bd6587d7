//! Metamorphic test harness for a black-box sentiment-analysis web tool.
//!
//! The relation under test: inserting an emphasis adverb into an input
//! sentence must not change the tool's predicted sentiment label. The crate
//! drives the tool's web UI through a WebDriver endpoint, applies the
//! emphasis transformation, compares the two predictions, and records one
//! verdict per input into a CSV report.

pub mod checker;
pub mod cli;
pub mod error;
pub mod report;
pub mod runner;
pub mod session;
pub mod transform;
pub mod verdict;
pub mod webdriver;

pub use checker::RelationChecker;
pub use error::ProbeError;
pub use runner::{BatchRunner, RunnerConfig};
pub use session::{BrowserSession, SentimentOracle, SutConfig};
pub use verdict::{labels_agree, TestVerdict, VerdictStatus};
