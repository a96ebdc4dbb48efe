use std::convert::TryFrom;

use serde::Deserialize;
use thiserror::Error;

use crate::dates::{self, DateError};
use crate::fees;

/// Columns of a checkout log, in the order they are expected.
pub const COLUMNS: [&str; 6] = [
  "book_uid",
  "isbn_13",
  "patron_id",
  "date_checkout",
  "date_due",
  "date_returned",
];

/// Format of the dates found in a checkout log (`mm/dd/yyyy`).
pub const LOG_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
  #[error("Invalid {field}")]
  InvalidDate {
    field: &'static str,
    #[source]
    source: DateError,
  },
}

/// A deserializable checkout record
#[derive(Debug, Deserialize)]
pub struct CheckoutRecord {
  book_uid: String,
  isbn_13: String,
  patron_id: String,
  date_checkout: String,
  date_due: String,
  date_returned: String,
}

impl TryFrom<CheckoutRecord> for fees::CheckoutRecord {
  type Error = RecordError;

  /// Conversion from a deserializable record into one that can be used by the domain logic.
  fn try_from(record: CheckoutRecord) -> Result<Self, Self::Error> {
    Ok(fees::CheckoutRecord {
      date_due: parse_log_date("date_due", &record.date_due)?,
      date_returned: parse_log_date("date_returned", &record.date_returned)?,
      book_uid: record.book_uid,
      isbn_13: record.isbn_13,
      patron_id: record.patron_id,
      date_checkout: record.date_checkout,
    })
  }
}

fn parse_log_date(field: &'static str, value: &str) -> Result<chrono::NaiveDate, RecordError> {
  dates::parse_date(value, LOG_DATE_FORMAT)
    .map_err(|source| RecordError::InvalidDate { field, source })
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::fees::ymd;

  fn checkout_record(date_due: &str, date_returned: &str) -> CheckoutRecord {
    CheckoutRecord {
      book_uid: "b-1".to_string(),
      isbn_13: "978-3-16-148410-0".to_string(),
      patron_id: "P1".to_string(),
      date_checkout: "12/18/2020".to_string(),
      date_due: date_due.to_string(),
      date_returned: date_returned.to_string(),
    }
  }

  #[test]
  fn fees_checkout_record_try_from() {
    let record = fees::CheckoutRecord::try_from(checkout_record("01/01/2021", "01/05/2021"));

    assert_eq!(
      record,
      Ok(fees::CheckoutRecord {
        book_uid: "b-1".to_string(),
        isbn_13: "978-3-16-148410-0".to_string(),
        patron_id: "P1".to_string(),
        date_checkout: "12/18/2020".to_string(),
        date_due: ymd(2021, 1, 1),
        date_returned: ymd(2021, 1, 5),
      })
    );
  }

  #[test]
  fn fees_checkout_record_try_from_invalid_dates() {
    let cases = vec![
      (checkout_record("2021-01-01", "01/05/2021"), "date_due"),
      (checkout_record("13/01/2021", "01/05/2021"), "date_due"),
      (checkout_record("01/01/2021", ""), "date_returned"),
      (checkout_record("01/01/2021", "02/30/2021"), "date_returned"),
      (checkout_record("01/01/2021", "01/05/21"), "date_returned"),
    ];

    for (input, expected_field) in cases {
      let result = fees::CheckoutRecord::try_from(input);
      assert!(
        matches!(&result, Err(RecordError::InvalidDate { field, .. }) if *field == expected_field),
        "unexpected result: {:?}",
        result
      );
    }
  }
}
