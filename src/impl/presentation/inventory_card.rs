use crate::{
    entities::{InventoryItem, InventoryItemId, TextKey},
    logic::is_low_stock,
};

use super::{
    icon_classifier::classify,
    utils::{capitalize, format_quantity},
    view_context::ViewContext,
};

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryCardView {
    pub id: InventoryItemId,
    pub icon: &'static str,
    pub title: String,
    /// "5 kg".
    pub quantity: String,
    pub low_stock: bool,
    /// "Updated: 14:30".
    pub updated: String,
}

impl InventoryCardView {
    pub fn new(item: &InventoryItem, ctx: &ViewContext) -> Self {
        Self {
            id: item.id,
            icon: classify(&item.item_name),
            title: capitalize(&item.item_name),
            quantity: format!("{} {}", format_quantity(item.quantity), item.unit),
            low_stock: is_low_stock(item),
            updated: format!(
                "{}: {}",
                ctx.t(TextKey::Updated),
                ctx.clock_time(&item.last_updated)
            ),
        }
    }

    pub(crate) fn render_text(&self) -> String {
        format!(
            "{} {:<16} {:>10}{}  ({})",
            self.icon,
            self.title,
            self.quantity,
            if self.low_stock { " !" } else { "  " },
            self.updated
        )
    }
}
