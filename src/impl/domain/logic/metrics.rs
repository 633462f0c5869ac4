use crate::entities::{
    InventoryItem, LedgerMetrics, LedgerSnapshot, Transaction, LOW_STOCK_THRESHOLD,
};

/// Money taken in through sales. Transactions without a total count as 0.
///
/// Amounts are added smallest first so the result does not depend on the
/// order the backend returned the transactions in.
pub fn cash_in_hand(transactions: &[Transaction]) -> f64 {
    let mut amounts: Vec<f64> = transactions
        .iter()
        .filter(|tx| tx.transaction_type.is_sale())
        .filter_map(|tx| tx.total_amount)
        .collect();
    amounts.sort_by(f64::total_cmp);
    amounts.into_iter().fold(0.0, |acc, amount| acc + amount)
}

pub fn is_low_stock(item: &InventoryItem) -> bool {
    item.quantity < LOW_STOCK_THRESHOLD
}

impl LedgerMetrics {
    pub fn compute(snapshot: &LedgerSnapshot) -> Self {
        Self {
            cash_in_hand: cash_in_hand(&snapshot.transactions),
            low_stock_items: snapshot
                .inventory
                .iter()
                .filter(|item| is_low_stock(item))
                .map(|item| item.id)
                .collect(),
        }
    }

    pub fn is_low_stock(&self, item: &InventoryItem) -> bool {
        self.low_stock_items.contains(&item.id)
    }
}
