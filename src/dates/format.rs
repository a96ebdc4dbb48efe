use super::{parse_date, Result, DISPLAY_DATE_FORMAT, ISO_DATE_FORMAT};

/// Re-formats every `yyyy-mm-dd` date into `dd Mon yyyy` (like `01 Jan 2001`), preserving the order.
///
/// Fails on the first element that is not a valid date in the expected format.
pub fn reformat_dates<S: AsRef<str>>(dates: &[S]) -> Result<Vec<String>> {
  dates
    .iter()
    .map(|date| {
      parse_date(date.as_ref(), ISO_DATE_FORMAT)
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
    })
    .collect()
}
