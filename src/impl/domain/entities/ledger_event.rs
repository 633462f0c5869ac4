use std::sync::Arc;

use super::{metrics::LedgerMetrics, owner::OwnerId, snapshot::LedgerSnapshot};

/// Notification emitted by the ledger store whenever its observable state
/// changes.
#[derive(Debug, Clone)]
pub enum LedgerEvent {
    /// A freshly fetched snapshot became current. `metrics` were derived from
    /// exactly this snapshot.
    SnapshotReplaced {
        owner: OwnerId,
        snapshot: Arc<LedgerSnapshot>,
        metrics: LedgerMetrics,
    },
    /// A refresh failed; the previous snapshot (if any) is still current.
    FetchFailed { owner: OwnerId },
    /// A write was rejected; nothing was applied locally.
    MutationFailed { owner: OwnerId },
    /// The owner signed out or was switched; the snapshot is gone.
    Cleared,
}
