//! Billing month value object.
//!
//! Payments are billed per calendar month, written `YYYY-MM`.
//! A `BillingMonth` can only hold a well-formed month.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{MONTH_FORMAT, MONTH_PATTERN};
use crate::error::{DomainError, DomainResult};

static MONTH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(MONTH_PATTERN).expect("month pattern is a valid regex"));

/// A calendar month in `YYYY-MM` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BillingMonth(String);

impl BillingMonth {
    /// Parse a `YYYY-MM` month.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        if !MONTH_REGEX.is_match(value) {
            return Err(DomainError::invalid_field(
                "month",
                format!("'{}' is not a month in YYYY-MM form", value),
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// Month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(MONTH_FORMAT).to_string())
    }

    /// Month containing the given instant (UTC).
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self::from_date(at.date_naive())
    }

    /// Current month (UTC).
    pub fn current() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::parse_from_str(&format!("{}-01", self.0), "%Y-%m-%d")
            .unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        let first = self.first_day();
        let (year, month) = if first.month() == 12 {
            (first.year() + 1, 1)
        } else {
            (first.year(), first.month() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|next| next.pred_opt())
            .unwrap_or(first)
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BillingMonth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BillingMonth {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BillingMonth> for String {
    fn from(month: BillingMonth) -> Self {
        month.0
    }
}
