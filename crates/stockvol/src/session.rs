//! Latest-wins application of comparison refreshes.
//!
//! Fetches in flight are not cancelled when the symbol or ranges change.
//! Instead every refresh takes a monotonically increasing ticket at issue
//! time, and a completed refresh is applied to the held state only when no
//! newer ticket has been issued since. A stale result is discarded, never
//! written over fresher state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use stockvol_core::{Period, Symbol};
use tokio::sync::RwLock;
use tracing::debug;

use crate::report::Comparison;
use crate::service::ComparisonService;

/// Issue-time tag of one refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// What happened to a completed refresh.
#[derive(Clone, Debug, PartialEq)]
pub enum RefreshOutcome {
    /// The result was applied to the session state.
    Applied(Arc<Comparison>),
    /// A newer refresh was issued meanwhile; this result was discarded.
    Superseded,
}

/// Holds the latest applied comparison and arbitrates racing refreshes.
///
/// There is exactly one writer per logical update cycle: the refresh whose
/// ticket is still current when it completes.
#[derive(Debug)]
pub struct ComparisonSession {
    service: ComparisonService,
    issued: AtomicU64,
    current: RwLock<Option<Arc<Comparison>>>,
}

impl ComparisonSession {
    /// Creates a session around a comparison service.
    #[must_use]
    pub fn new(service: ComparisonService) -> Self {
        Self {
            service,
            issued: AtomicU64::new(0),
            current: RwLock::new(None),
        }
    }

    /// Takes the next refresh ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Applies a completed comparison unless a newer ticket was issued.
    pub async fn apply(&self, ticket: Ticket, comparison: Comparison) -> RefreshOutcome {
        if self.issued.load(Ordering::SeqCst) != ticket.0 {
            debug!(ticket = ticket.0, "Discarding superseded refresh");
            return RefreshOutcome::Superseded;
        }
        let comparison = Arc::new(comparison);
        *self.current.write().await = Some(Arc::clone(&comparison));
        RefreshOutcome::Applied(comparison)
    }

    /// Runs one full refresh: take a ticket, fetch both periods, apply
    /// latest-wins.
    pub async fn refresh(
        &self,
        symbol: &Symbol,
        period_one: Period,
        period_two: Period,
    ) -> RefreshOutcome {
        let ticket = self.begin();
        let comparison = self.service.compare(symbol, period_one, period_two).await;
        self.apply(ticket, comparison).await
    }

    /// The most recently applied comparison, if any refresh completed.
    pub async fn latest(&self) -> Option<Arc<Comparison>> {
        self.current.read().await.clone()
    }
}
