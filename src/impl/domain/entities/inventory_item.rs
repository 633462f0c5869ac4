use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InventoryItemId(pub i64);

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub item_name: String,
    /// Non-negative, in `unit`.
    pub quantity: f64,
    pub unit: String,
    /// Set by the backend on every mutation.
    pub last_updated: DateTime<Utc>,
}

/// Full-field overwrite of an inventory item, as sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItemPatch {
    pub item_name: String,
    pub quantity: f64,
    pub unit: String,
}

// --

impl std::fmt::Display for InventoryItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
