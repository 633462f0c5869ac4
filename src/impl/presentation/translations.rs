use crate::entities::{Locale, TextKey};

/// Strings for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dictionary {
    locale: Locale,
}

pub fn translate(locale: Locale) -> Dictionary {
    Dictionary { locale }
}

impl Dictionary {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: TextKey) -> &'static str {
        match self.locale {
            Locale::English => english(key),
            Locale::Urdu => urdu(key),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (TextKey, &'static str)> + '_ {
        TextKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Mandi Ledger",
        TextKey::SignOut => "Sign Out",
        TextKey::CashInHand => "Estimated Cash (Today)",
        TextKey::StockHeader => "Current Stock",
        TextKey::Loading => "Loading stock...",
        TextKey::NoStock => "No stock items found.",
        TextKey::TransactionsHeader => "Recent Transactions",
        TextKey::NoTransactions => "No transactions yet.",
        TextKey::Unit => "kg",
        TextKey::UnitLabel => "Unit",
        TextKey::Updated => "Updated",
        TextKey::SoldTo => "SOLD to",
        TextKey::StockIn => "STOCK IN",
        TextKey::Counter => "Counter",
        TextKey::Item => "Item",
        TextKey::Qty => "Qty",
        TextKey::Rate => "Rate",
        TextKey::Total => "Total",
        TextKey::Action => "Action",
        TextKey::Time => "Time",
        TextKey::BuyerName => "Buyer",
        TextKey::Edit => "Edit",
        TextKey::Delete => "Delete",
        TextKey::Save => "Save",
        TextKey::Cancel => "Cancel",
        TextKey::EditItemTitle => "Edit Stock",
        TextKey::EditTransactionTitle => "Edit Transaction",
        TextKey::ConfirmDelete => "Delete this record?",
        TextKey::StaleData => "Could not refresh, showing last known data.",
        TextKey::MutationFailed => "Could not save the change. Please try again.",
    }
}

fn urdu(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Mandi Khata",
        TextKey::SignOut => "Log Out",
        TextKey::CashInHand => "Aaj Ki Kamai (Andazan)",
        TextKey::StockHeader => "Maujooda Maal",
        TextKey::Loading => "Maal check ho raha hai...",
        TextKey::NoStock => "Koi maal nahi mila.",
        TextKey::TransactionsHeader => "Haaliya Len-Den",
        TextKey::NoTransactions => "Abhi koi soda nahi hua.",
        TextKey::Unit => "kilo",
        TextKey::UnitLabel => "Paimana",
        TextKey::Updated => "Update hua",
        TextKey::SoldTo => "BECHA",
        TextKey::StockIn => "AAYA",
        TextKey::Counter => "Counter",
        TextKey::Item => "Cheez",
        TextKey::Qty => "Miqdaar",
        TextKey::Rate => "Rate",
        TextKey::Total => "Total",
        TextKey::Action => "Amal",
        TextKey::Time => "Waqt",
        TextKey::BuyerName => "Khareedar",
        TextKey::Edit => "Badlein",
        TextKey::Delete => "Mitayein",
        TextKey::Save => "Mehfooz Karein",
        TextKey::Cancel => "Wapas",
        TextKey::EditItemTitle => "Maal Badlein",
        TextKey::EditTransactionTitle => "Soda Badlein",
        TextKey::ConfirmDelete => "Kya yeh record mitana hai?",
        TextKey::StaleData => "Naya data nahi mila, purana dikhaya ja raha hai.",
        TextKey::MutationFailed => "Tabdeeli mehfooz nahi hui. Dobara koshish karein.",
    }
}
