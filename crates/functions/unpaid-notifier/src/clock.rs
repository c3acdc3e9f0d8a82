//! Source of the billing month checked by the job.

use domain::BillingMonth;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Supplies the month to check at invocation time.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait MonthClock: Send + Sync {
    fn current_month(&self) -> BillingMonth;
}

/// Current UTC month
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl MonthClock for SystemClock {
    fn current_month(&self) -> BillingMonth {
        BillingMonth::current()
    }
}

/// Always the same month (manual reruns, tests)
#[derive(Debug, Clone)]
pub struct FixedClock(pub BillingMonth);

impl MonthClock for FixedClock {
    fn current_month(&self) -> BillingMonth {
        self.0.clone()
    }
}
