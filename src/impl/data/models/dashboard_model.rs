use crate::entities::LedgerSnapshot;

use super::{inventory_item_model::InventoryItemModel, transaction_model::TransactionModel};

/// `GET /api/dashboard`. Either list may be missing or null.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct DashboardModel {
    #[serde(default)]
    inventory: Option<Vec<InventoryItemModel>>,
    #[serde(default)]
    transactions: Option<Vec<TransactionModel>>,
}

impl Into<LedgerSnapshot> for DashboardModel {
    fn into(self) -> LedgerSnapshot {
        LedgerSnapshot {
            inventory: self
                .inventory
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            transactions: self
                .transactions
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
