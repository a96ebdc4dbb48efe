use chrono::NaiveDate;

/// Alias for a patron ID
pub type PatronId = String;

/// A book checkout as recorded in the library log.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRecord {
  pub book_uid: String,
  pub isbn_13: String,
  pub patron_id: PatronId,
  /// Kept as found in the log, it is not used to compute fees.
  pub date_checkout: String,
  pub date_due: NaiveDate,
  pub date_returned: NaiveDate,
}

impl CheckoutRecord {
  /// Whole days between the due date and the return date, negative when returned early.
  pub fn days_late(&self) -> i64 {
    self
      .date_returned
      .signed_duration_since(self.date_due)
      .num_days()
  }
}

#[cfg(test)]
pub(crate) fn record(patron_id: &str, date_due: NaiveDate, date_returned: NaiveDate) -> CheckoutRecord {
  CheckoutRecord {
    book_uid: "b-1".to_string(),
    isbn_13: "978-0-00-000000-2".to_string(),
    patron_id: patron_id.to_string(),
    date_checkout: "12/18/2020".to_string(),
    date_due,
    date_returned,
  }
}

#[cfg(test)]
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
