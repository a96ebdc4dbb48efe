use std::convert::TryFrom;

use anyhow::{bail, Context, Result};
use csv_async::StringRecord;
use tokio::io::AsyncRead;
use tokio_stream::{Stream, StreamExt};

use super::record::COLUMNS;
use crate::fees::CheckoutRecord;

/// Interface to read checkout records from an external source
pub trait CheckoutLogReader {
  /// Read checkout records and return an [`Stream`] of possibly successful records.
  /// Each item yielded by the stream is either `Ok` if the record was read successfully,
  /// or `Err` if there was any kind of problem (like wrong format).
  fn read_records<'a>(
    &'a mut self,
  ) -> Box<dyn Stream<Item = Result<CheckoutRecord>> + Unpin + 'a>;
}

/// Implementation of [`CheckoutLogReader`] for the CSV format.
///
/// The header line is optional. The first row is only skipped when it contains the column names.
pub struct CsvCheckoutLogReader<R>(R);

impl<R> CsvCheckoutLogReader<R>
where
  R: AsyncRead + Unpin + Send + Sync,
{
  pub fn new(reader: R) -> Self {
    Self(reader)
  }
}

impl<R> CheckoutLogReader for CsvCheckoutLogReader<R>
where
  R: AsyncRead + Unpin + Send + Sync,
{
  fn read_records<'a>(
    &'a mut self,
  ) -> Box<dyn Stream<Item = Result<CheckoutRecord>> + Unpin + 'a> {
    Box::new(
      csv_async::AsyncReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv_async::Trim::All)
        .create_reader(&mut self.0)
        .into_records()
        .filter(|maybe_record| !matches!(maybe_record, Ok(record) if is_header(record)))
        .map(|maybe_record| {
          maybe_record
            .map_err(anyhow::Error::from)
            .and_then(|record| {
              parse_record(&record).with_context(|| match record.position() {
                Some(position) => format!("Invalid checkout record at line {}", position.line()),
                None => "Invalid checkout record".to_string(),
              })
            })
        }),
    )
  }
}

fn is_header(record: &StringRecord) -> bool {
  let is_header = record.position().map_or(false, |position| position.record() == 0)
    && record.len() == COLUMNS.len()
    && record
      .iter()
      .zip(COLUMNS.iter())
      .all(|(field, column)| field.eq_ignore_ascii_case(column));
  if is_header {
    log::debug!("Skipping the header of the checkout log");
  }
  is_header
}

fn parse_record(record: &StringRecord) -> Result<CheckoutRecord> {
  if record.len() != COLUMNS.len() {
    bail!("Expected {} columns but found {}", COLUMNS.len(), record.len());
  }
  let record = record.deserialize::<super::record::CheckoutRecord>(None)?;
  CheckoutRecord::try_from(record).map_err(anyhow::Error::from)
}
