use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::UnknownLocale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde_derive::Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    /// Roman-script Urdu.
    #[serde(rename = "ur")]
    Urdu,
}

/// Every translatable string. Dictionaries match on this exhaustively, so a
/// key cannot exist in one language and be missing from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    SignOut,
    CashInHand,
    StockHeader,
    Loading,
    NoStock,
    TransactionsHeader,
    NoTransactions,
    Unit,
    /// Caption of the unit field in edit forms.
    UnitLabel,
    Updated,
    SoldTo,
    StockIn,
    Counter,
    Item,
    Qty,
    Rate,
    Total,
    Action,
    Time,
    BuyerName,
    Edit,
    Delete,
    Save,
    Cancel,
    EditItemTitle,
    EditTransactionTitle,
    ConfirmDelete,
    StaleData,
    MutationFailed,
}

// --

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Urdu];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Urdu => "ur",
        }
    }

    /// The other language, for a two-way toggle.
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::English => Locale::Urdu,
            Locale::Urdu => Locale::English,
        }
    }
}

impl FromStr for Locale {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::English),
            "ur" => Ok(Locale::Urdu),
            _ => Err(UnknownLocale::new(s)),
        }
    }
}

impl TextKey {
    pub const ALL: [TextKey; 30] = [
        TextKey::Title,
        TextKey::SignOut,
        TextKey::CashInHand,
        TextKey::StockHeader,
        TextKey::Loading,
        TextKey::NoStock,
        TextKey::TransactionsHeader,
        TextKey::NoTransactions,
        TextKey::Unit,
        TextKey::UnitLabel,
        TextKey::Updated,
        TextKey::SoldTo,
        TextKey::StockIn,
        TextKey::Counter,
        TextKey::Item,
        TextKey::Qty,
        TextKey::Rate,
        TextKey::Total,
        TextKey::Action,
        TextKey::Time,
        TextKey::BuyerName,
        TextKey::Edit,
        TextKey::Delete,
        TextKey::Save,
        TextKey::Cancel,
        TextKey::EditItemTitle,
        TextKey::EditTransactionTitle,
        TextKey::ConfirmDelete,
        TextKey::StaleData,
        TextKey::MutationFailed,
    ];
}
