use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PolicyError {
  #[error("Invalid negative daily rate: {0}")]
  NegativeDailyRate(Decimal),

  #[error("Fee for {days_late} days late at {daily_rate} per day is too large")]
  FeeOverflow { daily_rate: Decimal, days_late: i64 },
}

/// How much is charged for late returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LateFeePolicy {
  daily_rate: Decimal,
}

impl LateFeePolicy {
  pub fn new(daily_rate: Decimal) -> Result<Self, PolicyError> {
    if daily_rate < Decimal::ZERO {
      Err(PolicyError::NegativeDailyRate(daily_rate))
    } else {
      Ok(Self { daily_rate })
    }
  }

  pub fn daily_rate(&self) -> Decimal {
    self.daily_rate
  }

  /// Books returned on time (or early) are free.
  pub fn fee_for(&self, days_late: i64) -> Result<Decimal, PolicyError> {
    if days_late > 0 {
      self
        .daily_rate
        .checked_mul(Decimal::from(days_late))
        .ok_or(PolicyError::FeeOverflow {
          daily_rate: self.daily_rate,
          days_late,
        })
    } else {
      Ok(Decimal::ZERO)
    }
  }
}

impl Default for LateFeePolicy {
  /// A quarter per day late.
  fn default() -> Self {
    Self {
      daily_rate: Decimal::new(25, 2),
    }
  }
}
