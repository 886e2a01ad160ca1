//! Period - Half-open date range used for listings and monthly batches

use crate::errors::DomainResult;
use crate::validation::check_period;
use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A date range whose start is strictly before its end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl Period {
    /// Create period, failing with `IncorrectDates` unless `from < to`
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> DomainResult<Self> {
        check_period(from, to)?;
        Ok(Self { from, to })
    }

    /// Calendar month (UTC) containing `date`
    pub fn month_of(date: DateTime<Utc>) -> Self {
        let from = Utc
            .with_ymd_and_hms(date.year(), date.month(), 1, 0, 0, 0)
            .single()
            .unwrap_or(date);
        let to = from
            .checked_add_months(Months::new(1))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { from, to }
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.from <= date && date < self.to
    }
}
