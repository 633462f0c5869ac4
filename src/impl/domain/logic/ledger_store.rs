use std::sync::Arc;

use fractic_server_error::ServerError;
use futures::{stream, Stream};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use crate::{
    domain::repositories::ledger_repository::LedgerRepository,
    entities::{
        InventoryItemId, InventoryItemPatch, LedgerEvent, LedgerMetrics, LedgerSnapshot,
        LoadState, OwnerId, RefreshOutcome, SyncError, TransactionId, TransactionPatch,
    },
    errors::{NotSignedIn, OwnerMismatch},
};

/// Events buffered per subscriber before the oldest are dropped.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Holds the backend-truth snapshot for the active owner.
///
/// The store is the only writer of the snapshot. Writes never touch it
/// directly: they go to the backend and are followed by a refresh, so the
/// snapshot only ever contains what the backend returned.
///
/// Every fetch is tagged with a sequence number when dispatched. A response
/// is applied only if no other fetch (or identity change) was dispatched
/// after it; anything older is dropped.
pub struct LedgerStore<R: LedgerRepository> {
    repository: Arc<R>,
    state: Mutex<StoreState>,
    events: broadcast::Sender<LedgerEvent>,
}

#[derive(Debug)]
struct StoreState {
    owner: Option<OwnerId>,
    snapshot: Option<Arc<LedgerSnapshot>>,
    load_state: LoadState,
    last_error: Option<SyncError>,
    /// Sequence number of the most recently dispatched fetch.
    latest_seq: u64,
    /// Set while the most recently dispatched fetch has not come back.
    pending_seq: Option<u64>,
}

/// Consistent view of the store at one instant.
#[derive(Debug, Clone)]
pub struct StoreStatus {
    pub owner: Option<OwnerId>,
    pub snapshot: Option<Arc<LedgerSnapshot>>,
    pub load_state: LoadState,
    pub last_error: Option<SyncError>,
}

/// Receives store events until dropped.
pub struct LedgerSubscription {
    receiver: broadcast::Receiver<LedgerEvent>,
}

impl StoreState {
    fn new() -> Self {
        Self {
            owner: None,
            snapshot: None,
            load_state: LoadState::Unloaded,
            last_error: None,
            latest_seq: 0,
            pending_seq: None,
        }
    }

    /// State to return to once nothing is in flight.
    fn settled(&self) -> LoadState {
        match self.snapshot {
            Some(_) => LoadState::Loaded,
            None => LoadState::Unloaded,
        }
    }

    fn require_owner(&self, owner: &OwnerId) -> Result<(), ServerError> {
        match &self.owner {
            Some(active) if active == owner => Ok(()),
            Some(active) => Err(OwnerMismatch::new(owner.as_str(), active.as_str())),
            None => Err(NotSignedIn::new()),
        }
    }
}

impl<R: LedgerRepository> LedgerStore<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_event_capacity(repository, DEFAULT_EVENT_CAPACITY)
    }

    pub fn with_event_capacity(repository: Arc<R>, capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity);
        Self {
            repository,
            state: Mutex::new(StoreState::new()),
            events,
        }
    }

    pub fn subscribe(&self) -> LedgerSubscription {
        LedgerSubscription {
            receiver: self.events.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    pub async fn status(&self) -> StoreStatus {
        let state = self.state.lock().await;
        StoreStatus {
            owner: state.owner.clone(),
            snapshot: state.snapshot.clone(),
            load_state: state.load_state,
            last_error: state.last_error,
        }
    }

    pub async fn snapshot(&self) -> Option<Arc<LedgerSnapshot>> {
        self.state.lock().await.snapshot.clone()
    }

    /// Metrics for the current snapshot, derived on every call.
    pub async fn metrics(&self) -> Option<LedgerMetrics> {
        self.snapshot()
            .await
            .map(|snapshot| LedgerMetrics::compute(&snapshot))
    }

    pub async fn load_state(&self) -> LoadState {
        self.state.lock().await.load_state
    }

    pub async fn owner(&self) -> Option<OwnerId> {
        self.state.lock().await.owner.clone()
    }

    // Reads.
    // ---

    /// Replace the snapshot with a fresh one for `owner`.
    ///
    /// Refreshing for a different owner than the active one switches identity:
    /// the previous owner's snapshot is discarded before the fetch starts.
    /// On failure the previous snapshot stays in place.
    pub async fn refresh(&self, owner: &OwnerId) -> Result<RefreshOutcome, ServerError> {
        let seq = self.dispatch_fetch(owner).await;
        self.fetch_and_apply(owner, seq).await
    }

    /// Forget the active owner and everything fetched for them. Fetches still
    /// in flight are dropped when they come back.
    pub async fn sign_out(&self) {
        let mut state = self.state.lock().await;
        if let Some(owner) = state.owner.take() {
            info!(owner = %owner, "Signing out, discarding snapshot");
        }
        state.latest_seq += 1;
        state.pending_seq = None;
        state.snapshot = None;
        state.load_state = LoadState::Unloaded;
        state.last_error = None;
        self.emit(LedgerEvent::Cleared);
    }

    // Writes.
    // ---

    pub async fn update_inventory_item(
        &self,
        id: InventoryItemId,
        patch: &InventoryItemPatch,
        owner: &OwnerId,
    ) -> Result<RefreshOutcome, ServerError> {
        self.begin_mutation(owner).await?;
        debug!(owner = %owner, item = %id, "Updating inventory item");
        let result = self
            .repository
            .update_inventory_item(id, patch, owner)
            .await;
        self.finish_mutation(owner, result).await?;
        self.refetch_after_mutation(owner).await
    }

    pub async fn delete_inventory_item(
        &self,
        id: InventoryItemId,
        owner: &OwnerId,
    ) -> Result<RefreshOutcome, ServerError> {
        self.begin_mutation(owner).await?;
        debug!(owner = %owner, item = %id, "Deleting inventory item");
        let result = self.repository.delete_inventory_item(id, owner).await;
        self.finish_mutation(owner, result).await?;
        self.refetch_after_mutation(owner).await
    }

    pub async fn update_transaction(
        &self,
        id: &TransactionId,
        patch: &TransactionPatch,
        owner: &OwnerId,
    ) -> Result<RefreshOutcome, ServerError> {
        self.begin_mutation(owner).await?;
        debug!(owner = %owner, transaction = %id, "Updating transaction");
        let result = self.repository.update_transaction(id, patch, owner).await;
        self.finish_mutation(owner, result).await?;
        self.refetch_after_mutation(owner).await
    }

    pub async fn delete_transaction(
        &self,
        id: &TransactionId,
        owner: &OwnerId,
    ) -> Result<RefreshOutcome, ServerError> {
        self.begin_mutation(owner).await?;
        debug!(owner = %owner, transaction = %id, "Deleting transaction");
        let result = self.repository.delete_transaction(id, owner).await;
        self.finish_mutation(owner, result).await?;
        self.refetch_after_mutation(owner).await
    }

    // Internals.
    // ---

    /// Fetch for `owner` under sequence number `seq` and apply the result
    /// unless a newer fetch was dispatched meanwhile.
    async fn fetch_and_apply(
        &self,
        owner: &OwnerId,
        seq: u64,
    ) -> Result<RefreshOutcome, ServerError> {
        debug!(owner = %owner, seq, "Fetching dashboard snapshot");

        let result = self.repository.fetch_snapshot(owner).await;

        let mut state = self.state.lock().await;
        if seq != state.latest_seq {
            debug!(
                owner = %owner,
                seq,
                latest = state.latest_seq,
                "Dropping superseded snapshot response"
            );
            return Ok(RefreshOutcome::Superseded);
        }
        state.pending_seq = None;

        match result {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                let metrics = LedgerMetrics::compute(&snapshot);
                info!(
                    owner = %owner,
                    seq,
                    items = snapshot.inventory.len(),
                    transactions = snapshot.transactions.len(),
                    "Snapshot replaced"
                );
                state.snapshot = Some(snapshot.clone());
                state.load_state = LoadState::Loaded;
                state.last_error = None;
                self.emit(LedgerEvent::SnapshotReplaced {
                    owner: owner.clone(),
                    snapshot,
                    metrics,
                });
                Ok(RefreshOutcome::Applied)
            }
            Err(e) => {
                warn!(owner = %owner, seq, "Snapshot fetch failed, keeping previous snapshot");
                state.load_state = state.settled();
                state.last_error = Some(SyncError::Fetch);
                self.emit(LedgerEvent::FetchFailed {
                    owner: owner.clone(),
                });
                Err(e)
            }
        }
    }

    /// Refetch after a confirmed write. Never switches identity: if `owner`
    /// signed out or was replaced while the write was in flight, nothing is
    /// fetched.
    async fn refetch_after_mutation(
        &self,
        owner: &OwnerId,
    ) -> Result<RefreshOutcome, ServerError> {
        let seq = {
            let mut state = self.state.lock().await;
            if state.require_owner(owner).is_err() {
                debug!(owner = %owner, "Owner no longer active, skipping refetch");
                return Ok(RefreshOutcome::Superseded);
            }
            state.latest_seq += 1;
            state.pending_seq = Some(state.latest_seq);
            state.load_state = LoadState::Loading;
            state.latest_seq
        };
        self.fetch_and_apply(owner, seq).await
    }

    async fn dispatch_fetch(&self, owner: &OwnerId) -> u64 {
        let mut state = self.state.lock().await;
        if state.owner.as_ref() != Some(owner) {
            if let Some(previous) = state.owner.replace(owner.clone()) {
                info!(from = %previous, to = %owner, "Owner changed, discarding snapshot");
                state.snapshot = None;
                state.last_error = None;
                self.emit(LedgerEvent::Cleared);
            }
        }
        state.latest_seq += 1;
        state.pending_seq = Some(state.latest_seq);
        state.load_state = LoadState::Loading;
        state.latest_seq
    }

    async fn begin_mutation(&self, owner: &OwnerId) -> Result<(), ServerError> {
        let mut state = self.state.lock().await;
        state.require_owner(owner)?;
        state.load_state = LoadState::Loading;
        Ok(())
    }

    async fn finish_mutation(
        &self,
        owner: &OwnerId,
        result: Result<(), ServerError>,
    ) -> Result<(), ServerError> {
        let Err(e) = result else {
            return Ok(());
        };
        warn!(owner = %owner, "Mutation rejected, snapshot left unchanged");
        let mut state = self.state.lock().await;
        if state.owner.as_ref() == Some(owner) {
            if state.pending_seq.is_none() {
                state.load_state = state.settled();
            }
            state.last_error = Some(SyncError::Mutation);
            self.emit(LedgerEvent::MutationFailed {
                owner: owner.clone(),
            });
        }
        Err(e)
    }

    fn emit(&self, event: LedgerEvent) {
        // Sending only fails when nobody is subscribed.
        if let Err(broadcast::error::SendError(event)) = self.events.send(event) {
            debug!(?event, "No subscribers for ledger event");
        }
    }
}

impl LedgerSubscription {
    /// Next event, or `None` once the store is gone. A subscriber that falls
    /// behind skips to the oldest event still buffered.
    pub async fn recv(&mut self) -> Option<LedgerEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Ledger subscriber lagged, skipping events");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Events as a stream, ending when the store is gone.
    pub fn into_stream(self) -> impl Stream<Item = LedgerEvent> {
        stream::unfold(self, |mut subscription| async move {
            let event = subscription.recv().await?;
            Some((event, subscription))
        })
    }

    /// Next event if one is already buffered.
    pub fn try_recv(&mut self) -> Option<LedgerEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "Ledger subscriber lagged, skipping events");
                }
                Err(_) => return None,
            }
        }
    }
}
