use super::{
    inventory_item::{InventoryItem, InventoryItemId},
    transaction::{Transaction, TransactionId},
};

/// Everything the backend knows about one owner at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSnapshot {
    pub inventory: Vec<InventoryItem>,
    pub transactions: Vec<Transaction>,
}

/// Lifecycle of the store's snapshot for the active owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
}

/// Last failure observed by the store, cleared by the next successful
/// refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncError {
    Fetch,
    Mutation,
}

/// Outcome of a refresh that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The fetched snapshot replaced the previous one.
    Applied,
    /// A newer refresh (or an identity change) was dispatched while this one
    /// was in flight, so its response was dropped.
    Superseded,
}

// --

impl LedgerSnapshot {
    pub fn inventory_item(&self, id: InventoryItemId) -> Option<&InventoryItem> {
        self.inventory.iter().find(|i| i.id == id)
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty() && self.transactions.is_empty()
    }
}
