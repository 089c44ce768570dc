//! Per-hop deadline budgets.
//!
//! Each hop of a quotation request is bounded by its own [`Budget`]:
//!
//! - requester → service: 300ms, measured by the requester
//! - service → upstream API: 200ms
//! - service → database: 10ms
//!
//! The budgets are independent. Nothing ties them arithmetically, so the
//! latency the requester observes can exceed any single inner budget once
//! network and processing overhead stack across hops.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

pub const REQUESTER_BUDGET: Duration = Duration::from_millis(300);
pub const UPSTREAM_BUDGET: Duration = Duration::from_millis(200);
pub const PERSISTENCE_BUDGET: Duration = Duration::from_millis(10);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{label} deadline of {limit:?} exceeded")]
pub struct DeadlineExceeded {
    pub label: &'static str,
    pub limit: Duration,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetError {
    #[error("{0} budget must be greater than zero")]
    Zero(&'static str),
}

/// A named maximum wait for one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Budget {
    label: &'static str,
    limit: Duration,
}

impl Budget {
    pub const fn new(label: &'static str, limit: Duration) -> Self {
        Self { label, limit }
    }

    pub const fn requester() -> Self {
        Self::new("requester", REQUESTER_BUDGET)
    }

    pub const fn upstream() -> Self {
        Self::new("upstream", UPSTREAM_BUDGET)
    }

    pub const fn persistence() -> Self {
        Self::new("persistence", PERSISTENCE_BUDGET)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.limit.is_zero() {
            return Err(BudgetError::Zero(self.label));
        }
        Ok(())
    }

    /// Drives `fut` to completion or drops it once the budget elapses.
    ///
    /// The clock starts when this is called, not when `fut` was built.
    /// Logging the expiry is left to the caller, which knows the hop.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, DeadlineExceeded>
    where
        F: Future,
    {
        tokio::time::timeout(self.limit, fut)
            .await
            .map_err(|_| DeadlineExceeded {
                label: self.label,
                limit: self.limit,
            })
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn default_budgets_match_hop_limits() {
        assert_eq!(Budget::requester().limit(), Duration::from_millis(300));
        assert_eq!(Budget::upstream().limit(), Duration::from_millis(200));
        assert_eq!(Budget::persistence().limit(), Duration::from_millis(10));
    }

    #[test]
    fn zero_budget_is_rejected() {
        let b = Budget::new("upstream", Duration::ZERO);
        assert_eq!(b.validate(), Err(BudgetError::Zero("upstream")));
        assert!(Budget::persistence().validate().is_ok());
    }

    #[tokio::test]
    async fn run_returns_output_within_budget() {
        let b = Budget::new("fast", Duration::from_millis(200));
        let out = b.run(async { 42 }).await;
        assert_eq!(out, Ok(42));
    }

    #[tokio::test]
    async fn run_cancels_slow_future() {
        let b = Budget::new("slow", Duration::from_millis(20));
        let err = b
            .run(tokio::time::sleep(Duration::from_millis(500)))
            .await
            .unwrap_err();

        assert_eq!(err.label, "slow");
        assert_eq!(err.limit, Duration::from_millis(20));
        assert_eq!(err.to_string(), "slow deadline of 20ms exceeded");
    }

    #[tokio::test]
    #[traced_test]
    async fn expiry_is_reported_not_logged() {
        let b = Budget::new("persistence", Duration::from_millis(5));
        let res = b.run(tokio::time::sleep(Duration::from_millis(200))).await;

        assert!(res.is_err());
        assert!(!logs_contain("deadline"));
    }
}
