//! This module contains the domain logic to compute late fees
//!
//! The [`InMemoryFeesLedger`] is an implementation of a [`FeesLedger`] that keeps the fees of every patron in memory,
//! charging them according to a [`LateFeePolicy`].
//

mod ledger;
mod policy;
mod record;

pub use ledger::{FeeReport, FeesLedger, FeesLedgerError, FeesReportIter, InMemoryFeesLedger};
pub use policy::{LateFeePolicy, PolicyError};
pub use record::{CheckoutRecord, PatronId};

#[cfg(test)]
pub(crate) use ledger::Result as LedgerResult;
#[cfg(test)]
pub(crate) use record::{record, ymd};
