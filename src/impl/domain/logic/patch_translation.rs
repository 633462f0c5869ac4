use fractic_server_error::ServerError;

use crate::{
    entities::{InventoryItemPatch, Patch, TransactionPatch},
    errors::{MissingRequiredField, NegativeValue},
};

pub const ITEM_NAME: &str = "item_name";
pub const QUANTITY: &str = "quantity";
pub const UNIT: &str = "unit";
pub const RATE: &str = "rate";
pub const BUYER_NAME: &str = "buyer_name";

impl InventoryItemPatch {
    /// Interpret a submitted edit form as an inventory overwrite.
    pub fn from_patch(patch: &Patch) -> Result<Self, ServerError> {
        Ok(Self {
            item_name: required_text(patch, ITEM_NAME)?,
            quantity: non_negative(QUANTITY, required_number(patch, QUANTITY)?)?,
            unit: required_text(patch, UNIT)?,
        })
    }
}

impl TransactionPatch {
    /// Interpret a submitted edit form as a transaction overwrite.
    ///
    /// The total is recomputed from quantity and rate; a transaction without
    /// a rate keeps `fallback_total` (its current total), since there is
    /// nothing to derive a new one from.
    pub fn from_patch(patch: &Patch, fallback_total: Option<f64>) -> Result<Self, ServerError> {
        let quantity = non_negative(QUANTITY, required_number(patch, QUANTITY)?)?;
        let rate = patch
            .number(RATE)
            .map(|r| non_negative(RATE, r))
            .transpose()?;
        let total_amount = match rate {
            Some(rate) => Some(quantity * rate),
            None => fallback_total,
        };
        let buyer_name = patch
            .text(BUYER_NAME)
            .filter(|s| !s.trim().is_empty())
            .map(String::from);
        Ok(Self {
            item_name: required_text(patch, ITEM_NAME)?,
            quantity,
            unit: required_text(patch, UNIT)?,
            rate,
            total_amount,
            buyer_name,
        })
    }
}

/// Text is taken as submitted: the form trims what the user typed, and
/// untouched values go back exactly as stored.
fn required_text(patch: &Patch, field: &str) -> Result<String, ServerError> {
    patch
        .text(field)
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
        .ok_or_else(|| MissingRequiredField::new(field))
}

fn required_number(patch: &Patch, field: &str) -> Result<f64, ServerError> {
    patch
        .number(field)
        .ok_or_else(|| MissingRequiredField::new(field))
}

fn non_negative(field: &str, value: f64) -> Result<f64, ServerError> {
    if value < 0.0 {
        return Err(NegativeValue::new(field, value));
    }
    Ok(value)
}
