use crate::entities::{InventoryItem, InventoryItemId, InventoryItemPatch};

use super::timestamp_model::TimestampModel;

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct InventoryItemModel {
    id: i64,
    item_name: String,
    quantity: f64,
    unit: String,
    last_updated: TimestampModel,
}

#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct InventoryItemPatchModel<'a> {
    item_name: &'a str,
    quantity: f64,
    unit: &'a str,
}

impl Into<InventoryItem> for InventoryItemModel {
    fn into(self) -> InventoryItem {
        InventoryItem {
            id: InventoryItemId(self.id),
            item_name: self.item_name,
            quantity: self.quantity,
            unit: self.unit,
            last_updated: self.last_updated.into(),
        }
    }
}

impl<'a> From<&'a InventoryItemPatch> for InventoryItemPatchModel<'a> {
    fn from(patch: &'a InventoryItemPatch) -> Self {
        Self {
            item_name: &patch.item_name,
            quantity: patch.quantity,
            unit: &patch.unit,
        }
    }
}
