use crate::entities::{Transaction, TransactionId, TransactionPatch, TransactionType};

use super::timestamp_model::TimestampModel;

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum TransactionTypeModel {
    Sale,
    Purchase,
    Adjustment,
}

/// Some backends hand out numeric ids; they are opaque either way.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(untagged)]
pub(crate) enum TransactionIdModel {
    Text(String),
    Numeric(i64),
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct TransactionModel {
    id: TransactionIdModel,
    transaction_type: TransactionTypeModel,
    item_name: String,
    quantity: f64,
    unit: String,
    #[serde(default)]
    rate: Option<f64>,
    #[serde(default)]
    total_amount: Option<f64>,
    #[serde(default)]
    buyer_name: Option<String>,
    created_at: TimestampModel,
}

#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct TransactionPatchModel<'a> {
    item_name: &'a str,
    quantity: f64,
    unit: &'a str,
    rate: Option<f64>,
    total_amount: Option<f64>,
    buyer_name: Option<&'a str>,
}

impl Into<TransactionType> for TransactionTypeModel {
    fn into(self) -> TransactionType {
        match self {
            TransactionTypeModel::Sale => TransactionType::Sale,
            TransactionTypeModel::Purchase => TransactionType::Purchase,
            TransactionTypeModel::Adjustment => TransactionType::Adjustment,
        }
    }
}

impl Into<TransactionId> for TransactionIdModel {
    fn into(self) -> TransactionId {
        match self {
            TransactionIdModel::Text(s) => TransactionId(s),
            TransactionIdModel::Numeric(n) => TransactionId(n.to_string()),
        }
    }
}

impl Into<Transaction> for TransactionModel {
    fn into(self) -> Transaction {
        Transaction {
            id: self.id.into(),
            transaction_type: self.transaction_type.into(),
            item_name: self.item_name,
            quantity: self.quantity,
            unit: self.unit,
            rate: self.rate,
            total_amount: self.total_amount,
            buyer_name: self.buyer_name.filter(|b| !b.trim().is_empty()),
            created_at: self.created_at.into(),
        }
    }
}

impl<'a> From<&'a TransactionPatch> for TransactionPatchModel<'a> {
    fn from(patch: &'a TransactionPatch) -> Self {
        Self {
            item_name: &patch.item_name,
            quantity: patch.quantity,
            unit: &patch.unit,
            rate: patch.rate,
            total_amount: patch.total_amount,
            buyer_name: patch.buyer_name.as_deref(),
        }
    }
}
