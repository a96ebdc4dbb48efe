//! Processors put together a reader, a ledger and a writer to produce fees reports.

pub mod simple;

use std::path::Path;

use anyhow::{Context, Result};

use crate::fees::InMemoryFeesLedger;
use crate::io::{CsvCheckoutLogReader, CsvFeesReportWriter};

/// Computes the late fees of every patron from the CSV checkout log at `input`
/// and writes them as a CSV report into `output`, replacing it if it exists.
///
/// The report is kept in memory until the whole log has been processed,
/// so `output` is left untouched when the log can't be processed.
pub async fn fees_report<I, O>(input: I, output: O) -> Result<()>
where
  I: AsRef<Path>,
  O: AsRef<Path>,
{
  let (input, output) = (input.as_ref(), output.as_ref());

  let file = tokio::fs::File::open(input)
    .await
    .with_context(|| format!("Failed to open the checkout log {}", input.display()))?;

  let mut report = Vec::<u8>::new();
  simple::run(
    CsvCheckoutLogReader::new(file),
    InMemoryFeesLedger::default(),
    CsvFeesReportWriter::new(&mut report),
  )
  .await
  .with_context(|| format!("Failed to process the checkout log {}", input.display()))?;

  tokio::fs::write(output, report)
    .await
    .with_context(|| format!("Failed to write the fees report {}", output.display()))?;

  log::info!("Fees report written into {}", output.display());
  Ok(())
}
