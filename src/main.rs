use anyhow::{Context, Result};

use library_fees::processors;

const DEFAULT_CHECKOUT_LOG: &str = "data/book_returns_short.csv";
const DEFAULT_FEES_REPORT: &str = "book_fees.csv";

/// Usage: `library-fees [CHECKOUT_LOG] [FEES_REPORT]`
///
/// Writes the fees report and prints it to the stdout.
#[tokio::main]
async fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let mut args = std::env::args().skip(1);
  let input = args.next().unwrap_or_else(|| DEFAULT_CHECKOUT_LOG.to_string());
  let output = args.next().unwrap_or_else(|| DEFAULT_FEES_REPORT.to_string());

  processors::fees_report(&input, &output).await?;

  let report = tokio::fs::read_to_string(&output)
    .await
    .with_context(|| format!("Failed to read the fees report {}", output))?;
  println!("{}", report);
  Ok(())
}
