use clap::Parser;
use colored::*;
use sentiprobe::cli::Args;
use sentiprobe::runner::{load_inputs, BatchRunner};
use sentiprobe::verdict::{TestVerdict, VerdictStatus};
use tracing_subscriber::EnvFilter;

/// Built-in sample set, used when no input file is given.
fn sample_inputs() -> Vec<String> {
    [
        "I love this movie",
        "The product was outstanding and exceeded expectations",
        "I do not like this restaurant",
        "The service was okay but the food was great",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn verdict_marker(verdict: &TestVerdict) -> ColoredString {
    match (verdict.status, verdict.passed) {
        (VerdictStatus::Error, _) => "ERROR".bright_yellow(),
        (_, Some(true)) => "PASS".bright_green(),
        _ => "FAIL".bright_red(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let inputs = match &args.inputs {
        Some(path) => load_inputs(path)
            .map_err(|e| format!("failed to read inputs from {}: {}", path.display(), e))?,
        None => sample_inputs(),
    };
    if inputs.is_empty() {
        return Err("no input sentences to test".into());
    }

    let runner = BatchRunner::new(args.runner_config());
    let verdicts = runner.run(&inputs).await?;

    for verdict in &verdicts {
        println!(
            "{} {}",
            verdict_marker(verdict),
            serde_json::to_string(verdict)?
        );
    }

    let passed = verdicts.iter().filter(|v| v.passed == Some(true)).count();
    let errors = verdicts
        .iter()
        .filter(|v| v.status == VerdictStatus::Error)
        .count();
    println!(
        "{} {}/{} passed, {} errors",
        "summary:".bold(),
        passed,
        verdicts.len(),
        errors
    );

    Ok(())
}
