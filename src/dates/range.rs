use chrono::{Days, NaiveDate};

use super::{parse_date, DateError, Result, ISO_DATE_FORMAT};

/// An [`Iterator`] over consecutive calendar days.
///
/// The whole range is validated on construction, so it always yields exactly the requested number of days.
#[derive(Debug, Clone)]
pub struct DateRange {
  next: NaiveDate,
  remaining: usize,
}

impl DateRange {
  pub fn new(start: NaiveDate, days: usize) -> Result<Self> {
    if days > 1 {
      start
        .checked_add_days(Days::new(days as u64 - 1))
        .ok_or(DateError::OutOfRange { start, days })?;
    }
    Ok(Self {
      next: start,
      remaining: days,
    })
  }

  /// Same as [`DateRange::new`] but taking a `yyyy-mm-dd` start date.
  pub fn parse(start: &str, days: usize) -> Result<Self> {
    parse_date(start, ISO_DATE_FORMAT).and_then(|start| Self::new(start, days))
  }
}

impl Iterator for DateRange {
  type Item = NaiveDate;

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let current = self.next;
    self.remaining -= 1;
    if self.remaining > 0 {
      // the constructor checked that the last day exists
      self.next = current.succ_opt()?;
    }
    Some(current)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl ExactSizeIterator for DateRange {}

/// Returns `days` consecutive dates starting at the `yyyy-mm-dd` date `start`.
pub fn date_range(start: &str, days: usize) -> Result<Vec<NaiveDate>> {
  DateRange::parse(start, days).map(Iterator::collect)
}

/// Pairs every value with a day of the range starting at `start`, one day per value.
pub fn add_date_range<T>(values: Vec<T>, start: &str) -> Result<Vec<(NaiveDate, T)>> {
  let dates = DateRange::parse(start, values.len())?;
  Ok(dates.zip(values).collect())
}
