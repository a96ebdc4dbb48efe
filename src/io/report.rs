use rust_decimal::Decimal;
use serde::Serialize;

use crate::fees::{self, PatronId};

const FEE_DECIMALS: u32 = 2;

/// The header of a fees report, in the same order as the fields of [`FeeReport`]
pub const HEADER: (&str, &str) = ("patron_id", "late_fees");

/// A report on the fees of a patron used to serialize into a CSV file
#[derive(Debug, PartialEq, Serialize)]
pub struct FeeReport {
  patron_id: PatronId,
  late_fees: Decimal,
}

impl From<fees::FeeReport> for FeeReport {
  /// A conversion between the domain representation of a fee report into a serializable structure
  fn from(fee_report: fees::FeeReport) -> Self {
    FeeReport {
      patron_id: fee_report.patron_id,
      late_fees: with_fee_precision(fee_report.late_fees),
    }
  }
}

/// Fees are always rendered with exactly two decimals, `1` becomes `1.00`.
fn with_fee_precision(value: Decimal) -> Decimal {
  let mut value = value.round_dp(FEE_DECIMALS);
  if value.is_zero() {
    value = Decimal::ZERO;
  }
  value.rescale(FEE_DECIMALS);
  value
}
