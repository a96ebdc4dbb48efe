//! Small helpers to work with calendar dates written as text.
//!
//! [`reformat_dates`] rewrites ISO dates into a human friendly form, [`date_range`] and the lazy
//! [`DateRange`] generate consecutive days, and [`add_date_range`] pairs a list of values with them.

mod format;
mod range;

use thiserror::Error;

pub use format::reformat_dates;
pub use range::{add_date_range, date_range, DateRange};

/// Format of the dates accepted by the helpers in this module (`yyyy-mm-dd`).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format produced by [`reformat_dates`] (`dd Mon yyyy`, like `01 Jan 2001`).
pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

pub type Result<T> = core::result::Result<T, DateError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DateError {
  #[error("Invalid date '{input}', expected format '{format}'")]
  Parse {
    input: String,
    format: &'static str,
    #[source]
    source: Option<chrono::ParseError>,
  },

  #[error("Range of {days} days starting at {start} goes beyond the supported dates")]
  OutOfRange { start: chrono::NaiveDate, days: usize },
}

pub(crate) fn parse_date(input: &str, format: &'static str) -> Result<chrono::NaiveDate> {
  let parse_error = |source| DateError::Parse {
    input: input.to_string(),
    format,
    source,
  };
  if !has_shape(input, format) {
    return Err(parse_error(None));
  }
  chrono::NaiveDate::parse_from_str(input, format).map_err(|err| parse_error(Some(err)))
}

/// Checks the layout of `input` against `format` before handing it to chrono, which is lenient
/// with years (`21`, `+2021`) and padding. Only `%Y` (4 digits), `%m` and `%d` (1 or 2 digits)
/// and literal characters are supported.
fn has_shape(input: &str, format: &str) -> bool {
  let mut rest = input.as_bytes();
  let mut spec = format.as_bytes().iter();

  while let Some(&byte) = spec.next() {
    let (min_digits, max_digits) = match byte {
      b'%' => match spec.next() {
        Some(b'Y') => (4, 4),
        Some(b'm') | Some(b'd') => (1, 2),
        _ => return false,
      },
      literal => match rest.split_first() {
        Some((first, tail)) if *first == literal => {
          rest = tail;
          continue;
        }
        _ => return false,
      },
    };
    let digits = rest
      .iter()
      .take(max_digits)
      .take_while(|byte| byte.is_ascii_digit())
      .count();
    if digits < min_digits {
      return false;
    }
    rest = &rest[digits..];
  }

  rest.is_empty()
}
