use crate::{
    entities::{LedgerMetrics, LoadState, SyncError, TextKey},
    logic::ledger_store::StoreStatus,
};

use super::{
    inventory_card::InventoryCardView,
    sales_register::{sales_register, SalesRegisterRow},
    utils::format_amount,
    view_context::ViewContext,
};

/// Everything on the dashboard screen, already translated and formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub title: &'static str,
    pub owner: Option<String>,
    pub sign_out: &'static str,
    pub cash_in_hand_label: &'static str,
    pub cash_in_hand: String,
    pub is_loading: bool,
    /// Shown above the data after a failed refresh or write.
    pub notice: Option<&'static str>,
    pub stock_header: &'static str,
    pub cards: Vec<InventoryCardView>,
    /// Replaces the cards when there are none.
    pub stock_placeholder: Option<&'static str>,
    pub transactions_header: &'static str,
    pub rows: Vec<SalesRegisterRow>,
    pub transactions_placeholder: Option<&'static str>,
}

impl DashboardView {
    pub fn compose(status: &StoreStatus, ctx: &ViewContext) -> Self {
        let metrics = status
            .snapshot
            .as_deref()
            .map(LedgerMetrics::compute)
            .unwrap_or_default();
        let (cards, rows) = match status.snapshot.as_deref() {
            Some(snapshot) => (
                snapshot
                    .inventory
                    .iter()
                    .map(|item| InventoryCardView::new(item, ctx))
                    .collect(),
                sales_register(&snapshot.transactions, ctx),
            ),
            None => (Vec::new(), Vec::new()),
        };
        let waiting_for_first_load =
            status.snapshot.is_none() && status.load_state == LoadState::Loading;

        let stock_placeholder = match (cards.is_empty(), waiting_for_first_load) {
            (false, _) => None,
            (true, true) => Some(ctx.t(TextKey::Loading)),
            (true, false) => Some(ctx.t(TextKey::NoStock)),
        };
        let transactions_placeholder = rows
            .is_empty()
            .then(|| ctx.t(TextKey::NoTransactions));

        Self {
            title: ctx.t(TextKey::Title),
            owner: status.owner.as_ref().map(|o| o.to_string()),
            sign_out: ctx.t(TextKey::SignOut),
            cash_in_hand_label: ctx.t(TextKey::CashInHand),
            cash_in_hand: format_amount(metrics.cash_in_hand),
            is_loading: status.load_state == LoadState::Loading,
            notice: status.last_error.map(|e| match e {
                SyncError::Fetch => ctx.t(TextKey::StaleData),
                SyncError::Mutation => ctx.t(TextKey::MutationFailed),
            }),
            stock_header: ctx.t(TextKey::StockHeader),
            cards,
            stock_placeholder,
            transactions_header: ctx.t(TextKey::TransactionsHeader),
            rows,
            transactions_placeholder,
        }
    }

    /// Plain-text rendering, for terminals and logs.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("=== {} ===", self.title));
        if let Some(owner) = &self.owner {
            out.push_str(&format!("  [{}]", owner));
        }
        out.push('\n');
        if let Some(notice) = self.notice {
            out.push_str(&format!("! {}\n", notice));
        }
        out.push_str(&format!(
            "{}: {}\n\n",
            self.cash_in_hand_label, self.cash_in_hand
        ));

        out.push_str(&format!("--- {} ---\n", self.stock_header));
        match self.stock_placeholder {
            Some(placeholder) => out.push_str(&format!("{}\n", placeholder)),
            None => self.cards.iter().for_each(|card| {
                out.push_str(&card.render_text());
                out.push('\n');
            }),
        }
        out.push('\n');

        out.push_str(&format!("--- {} ---\n", self.transactions_header));
        match self.transactions_placeholder {
            Some(placeholder) => out.push_str(&format!("{}\n", placeholder)),
            None => self.rows.iter().for_each(|row| {
                out.push_str(&row.render_text());
                out.push('\n');
            }),
        }

        out
    }
}
