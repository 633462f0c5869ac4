use super::inventory_item::InventoryItemId;

/// Items below this quantity are shown as low on stock, whatever their unit.
pub const LOW_STOCK_THRESHOLD: f64 = 10.0;

/// Summary figures derived from a single snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerMetrics {
    pub cash_in_hand: f64,
    pub low_stock_items: Vec<InventoryItemId>,
}
