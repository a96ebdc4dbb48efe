use anyhow::Result;
use async_trait::async_trait;
use tokio::io::AsyncWrite;
use tokio_stream::StreamExt;

use super::report::HEADER;
use crate::fees::FeeReport;

/// Interface for a fees report writer
#[async_trait(?Send)]
pub trait FeesReportWriter {
  /// Write the fees provided by the [`Iterator`] and return whether the operation was successful or not.
  async fn write_fees_report<'a, T>(&'a mut self, report: T) -> Result<()>
  where
    T: Iterator<Item = FeeReport> + 'a;
}

/// An implementation of [`FeesReportWriter`] for the CSV format.
///
/// The header is always written, even when there are no fees to report.
pub struct CsvFeesReportWriter<W>(W);

impl<W> CsvFeesReportWriter<W>
where
  W: AsyncWrite + Unpin + Send + Sync,
{
  pub fn new(writer: W) -> Self {
    Self(writer)
  }
}

#[async_trait(?Send)]
impl<W> FeesReportWriter for CsvFeesReportWriter<W>
where
  W: AsyncWrite + Unpin + Send + Sync,
{
  async fn write_fees_report<'a, T>(&'a mut self, report: T) -> Result<()>
  where
    T: Iterator<Item = FeeReport> + 'a,
  {
    let mut report = Box::pin(tokio_stream::iter(report.map(super::report::FeeReport::from)));

    let mut serializer = csv_async::AsyncWriterBuilder::new()
      .has_headers(false)
      .create_serializer(&mut self.0);
    serializer.serialize(HEADER).await?;
    while let Some(fee_report) = report.next().await {
      serializer.serialize(fee_report).await?;
    }
    serializer.flush().await?;
    Ok(())
  }
}
