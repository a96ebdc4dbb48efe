use async_trait::async_trait;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use thiserror::Error;

use super::{
  policy::{LateFeePolicy, PolicyError},
  record::{CheckoutRecord, PatronId},
};

pub type Result<T> = core::result::Result<T, FeesLedgerError>;

/// Possible errors while charging fees. The ledger is left unchanged when they happen.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FeesLedgerError {
  #[error(transparent)]
  Policy(#[from] PolicyError),

  #[error("Late fees of patron {0} are too large")]
  FeesOverflow(PatronId),
}

/// Interface implemented by the late fees ledgers
#[async_trait]
pub trait FeesLedger {
  /// Charge the late fee for a checkout record to its patron and return the amount charged.
  /// The operation is `async` to allow ledgers backed by external systems (database, file system, ...)
  async fn record(&mut self, record: CheckoutRecord) -> Result<Decimal>;
  /// It will return an [`Iterator`] of [`FeeReport`], one per patron seen so far.
  fn fees_report(&self) -> FeesReportIter<'_>;
}

/// Implementation of the [`FeesLedger`] that accumulates the fees in memory.
///
/// Patrons are reported in the order they were first recorded.
#[derive(Debug, Default)]
pub struct InMemoryFeesLedger {
  policy: LateFeePolicy,
  fees: IndexMap<PatronId, Decimal>,
}

impl InMemoryFeesLedger {
  pub fn new(policy: LateFeePolicy) -> Self {
    Self {
      policy,
      fees: IndexMap::new(),
    }
  }

  fn fees_report_iter(&self) -> impl Iterator<Item = FeeReport> + '_ {
    self
      .fees
      .iter()
      .map(|(patron_id, late_fees)| FeeReport::new(patron_id.clone(), *late_fees))
  }
}

#[async_trait]
impl FeesLedger for InMemoryFeesLedger {
  async fn record(&mut self, record: CheckoutRecord) -> Result<Decimal> {
    let days_late = record.days_late();
    let fee = self.policy.fee_for(days_late)?;
    log::debug!(
      "Book {} returned by patron {} {} days late, fee {}",
      record.book_uid,
      record.patron_id,
      days_late.max(0),
      fee
    );
    let total = self
      .fees
      .get(&record.patron_id)
      .copied()
      .unwrap_or(Decimal::ZERO)
      .checked_add(fee)
      .ok_or_else(|| FeesLedgerError::FeesOverflow(record.patron_id.clone()))?;
    self.fees.insert(record.patron_id, total);
    Ok(fee)
  }

  fn fees_report(&self) -> FeesReportIter<'_> {
    FeesReportIter::new(self.fees_report_iter())
  }
}

/// Late fees accumulated by a patron, used to export the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeeReport {
  pub patron_id: PatronId,
  pub late_fees: Decimal,
}

impl FeeReport {
  pub fn new(patron_id: PatronId, late_fees: Decimal) -> Self {
    Self {
      patron_id,
      late_fees,
    }
  }
}

pub struct FeesReportIter<'a>(Box<dyn Iterator<Item = FeeReport> + 'a>);

impl<'a> FeesReportIter<'a> {
  pub(crate) fn new<T>(iter: T) -> Self
  where
    T: Iterator<Item = FeeReport> + 'a,
  {
    Self(Box::new(iter))
  }
}

impl<'a> Iterator for FeesReportIter<'a> {
  type Item = FeeReport;

  fn next(&mut self) -> Option<Self::Item> {
    self.0.next()
  }
}
