use crate::runner::{RunnerConfig, DEFAULT_DELAY_MS, DEFAULT_OUTPUT};
use crate::session::{
    SutConfig, DEFAULT_ANALYZE_SELECTOR, DEFAULT_INPUT_SELECTOR, DEFAULT_RESULT_SELECTOR,
    DEFAULT_SUT_URL, DEFAULT_WAIT_SECS, DEFAULT_WEBDRIVER_URL,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "sentiprobe")]
#[command(version = "0.3.0")]
#[command(about = "Checks that inserting an emphasis adverb never flips a sentiment tool's label")]
pub struct Args {
    /// File with input sentences, one per line (built-in sample set when omitted)
    #[arg(long)]
    pub inputs: Option<PathBuf>,

    /// Run the browser with a visible window instead of headless
    #[arg(long)]
    pub headed: bool,

    /// Fixed emphasis word for every input (random from the built-in set when omitted)
    #[arg(long)]
    pub word: Option<String>,

    /// Seed for the emphasis-word RNG, for reproducible batches
    #[arg(long)]
    pub seed: Option<u64>,

    /// CSV report path (overwritten each run)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Sentiment tool URL
    #[arg(long, default_value = DEFAULT_SUT_URL)]
    pub url: String,

    /// WebDriver endpoint, e.g. a local chromedriver
    #[arg(long, default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver_url: String,

    /// CSS selector of the tool's text input
    #[arg(long, default_value = DEFAULT_INPUT_SELECTOR)]
    pub input_selector: String,

    /// CSS selector of the analyze control
    #[arg(long, default_value = DEFAULT_ANALYZE_SELECTOR)]
    pub analyze_selector: String,

    /// CSS selector of the result element
    #[arg(long, default_value = DEFAULT_RESULT_SELECTOR)]
    pub result_selector: String,

    /// Page-load / element wait deadline in seconds
    #[arg(long, default_value_t = DEFAULT_WAIT_SECS)]
    pub timeout_secs: u64,

    /// Pause between inputs in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,
}

impl Args {
    pub fn runner_config(&self) -> RunnerConfig {
        RunnerConfig {
            sut: SutConfig {
                url: self.url.clone(),
                webdriver_url: self.webdriver_url.clone(),
                input_selector: self.input_selector.clone(),
                analyze_selector: self.analyze_selector.clone(),
                result_selector: self.result_selector.clone(),
                wait: Duration::from_secs(self.timeout_secs),
                headless: !self.headed,
            },
            delay: Duration::from_millis(self.delay_ms),
            output: self.output.clone(),
            emphasis_word: self.word.clone(),
            seed: self.seed,
        }
    }
}
