use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Sale,
    Purchase,
    Adjustment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub transaction_type: TransactionType,
    pub item_name: String,
    pub quantity: f64,
    pub unit: String,
    /// Price per unit.
    pub rate: Option<f64>,
    pub total_amount: Option<f64>,
    /// Only meaningful for sales.
    pub buyer_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Full-field overwrite of a transaction, as sent to the backend.
///
/// `total_amount` is derived from `quantity` and `rate` when the patch is
/// built, so edited records always satisfy `total = quantity * rate`. The
/// backend may recompute it; whatever it stores is what the next refresh
/// shows.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionPatch {
    pub item_name: String,
    pub quantity: f64,
    pub unit: String,
    pub rate: Option<f64>,
    pub total_amount: Option<f64>,
    pub buyer_name: Option<String>,
}

// --

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        TransactionId(s.to_string())
    }
}

impl TransactionType {
    pub fn is_sale(&self) -> bool {
        matches!(self, TransactionType::Sale)
    }
}
