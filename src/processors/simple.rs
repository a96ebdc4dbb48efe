use anyhow::Result;
use tokio_stream::StreamExt;

use crate::fees::FeesLedger;
use crate::io::{CheckoutLogReader, FeesReportWriter};

/// This is a simple processor of checkout logs that
/// - reads checkout records from a [`CheckoutLogReader`]
/// - charges the late fees using a [`FeesLedger`]
/// - writes a report including the fees of every patron using a [`FeesReportWriter`]
///
/// The idea is that all those components can be replaced with different implementations.
///
/// Fees are money, so the report is all or nothing: the first error from the reader
/// or the ledger aborts the processing and nothing gets written.
pub async fn run<R, L, W>(
  mut checkout_log_reader: R,
  mut fees_ledger: L,
  mut fees_report_writer: W,
) -> Result<()>
where
  R: CheckoutLogReader,
  L: FeesLedger,
  W: FeesReportWriter,
{
  let mut records = checkout_log_reader.read_records();
  let mut num_records = 0usize;

  while let Some(maybe_record) = records.next().await {
    fees_ledger.record(maybe_record?).await?;
    num_records += 1;
  }

  log::info!("Processed {} checkout records", num_records);

  fees_report_writer
    .write_fees_report(fees_ledger.fees_report())
    .await
}
