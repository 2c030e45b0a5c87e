//! Batch Join
//!
//! All-settle join for bulk operations: every dispatched future runs to
//! completion, failures included, before the batch is considered done.
//! Futures are polled concurrently through [`FuturesUnordered`], so each
//! per-item future applies its own result as soon as it resolves.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};

use crate::error::ApiError;
use crate::model::TodoId;

/// Drive every future to completion and collect the outcomes in completion
/// order. Never returns early on a failed outcome.
pub async fn settle_all<I, F>(ops: I) -> Vec<F::Output>
where
    I: IntoIterator<Item = F>,
    F: Future,
{
    ops.into_iter().collect::<FuturesUnordered<_>>().collect().await
}

/// Per-item outcome of a bulk operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: Vec<TodoId>,
    pub failed: Vec<(TodoId, ApiError)>,
    /// Todos that already matched the target and were not sent
    pub skipped: usize,
}

impl BatchReport {
    pub(crate) fn from_outcomes(
        outcomes: Vec<(TodoId, Result<(), ApiError>)>,
        skipped: usize,
    ) -> Self {
        let mut report = BatchReport { skipped, ..Default::default() };
        for (id, outcome) in outcomes {
            match outcome {
                Ok(()) => report.succeeded.push(id),
                Err(err) => report.failed.push((id, err)),
            }
        }
        report
    }

    /// Number of requests actually sent
    pub fn dispatched(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_settle_all_waits_for_failures_too() {
        let ops = (1..=4u32).map(|id| async move {
            tokio::task::yield_now().await;
            if id % 2 == 0 {
                (id, Err(ApiError::Status { status: 500 }))
            } else {
                (id, Ok(()))
            }
        });

        let report = BatchReport::from_outcomes(settle_all(ops).await, 1);

        let mut ok = report.succeeded.clone();
        ok.sort();
        assert_eq!(ok, vec![1, 3]);
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.dispatched(), 4);
        assert_eq!(report.skipped, 1);
        assert!(!report.is_clean());
    }

    #[tokio::test]
    async fn test_settle_all_empty() {
        let outcomes: Vec<()> = settle_all(Vec::<std::future::Ready<()>>::new()).await;
        assert!(outcomes.is_empty());
    }
}
