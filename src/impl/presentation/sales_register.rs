use crate::entities::{TextKey, Transaction, TransactionId};

use super::{
    icon_classifier::classify,
    utils::{format_amount, format_quantity},
    view_context::ViewContext,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SalesRegisterRow {
    pub id: TransactionId,
    pub date: String,
    pub time: String,
    pub is_sale: bool,
    /// "SOLD to Aslam" or "STOCK IN".
    pub action: String,
    pub item: String,
    pub quantity: String,
    /// "Rs 100" or "-".
    pub rate: String,
    /// "Rs 1,200" or "-".
    pub total: String,
}

impl SalesRegisterRow {
    pub fn new(tx: &Transaction, ctx: &ViewContext) -> Self {
        let is_sale = tx.transaction_type.is_sale();
        let action = if is_sale {
            let buyer = tx
                .buyer_name
                .as_deref()
                .unwrap_or_else(|| ctx.t(TextKey::Counter));
            format!("{} {}", ctx.t(TextKey::SoldTo), buyer)
        } else {
            ctx.t(TextKey::StockIn).to_string()
        };
        Self {
            id: tx.id.clone(),
            date: ctx.calendar_date(&tx.created_at),
            time: ctx.clock_time(&tx.created_at),
            is_sale,
            action,
            item: format!("{} {}", classify(&tx.item_name), tx.item_name),
            quantity: format!("{} {}", format_quantity(tx.quantity), tx.unit),
            rate: money_or_dash(tx.rate),
            total: money_or_dash(tx.total_amount),
        }
    }

    pub(crate) fn render_text(&self) -> String {
        format!(
            "{} {}  {:<20} {:<18} {:>10} {:>10} {:>14}",
            self.date, self.time, self.action, self.item, self.quantity, self.rate, self.total
        )
    }
}

/// Zero is shown like a missing value.
fn money_or_dash(amount: Option<f64>) -> String {
    match amount {
        Some(a) if a != 0.0 => format_amount(a),
        _ => "-".to_string(),
    }
}

/// Rows for the register, newest first.
pub fn sales_register(transactions: &[Transaction], ctx: &ViewContext) -> Vec<SalesRegisterRow> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
        .into_iter()
        .map(|tx| SalesRegisterRow::new(tx, ctx))
        .collect()
}
