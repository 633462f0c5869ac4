use crate::{
    entities::{FieldDescriptor, FieldValue, FormField, InventoryItem, TextKey, Transaction},
    logic::{
        edit_protocol::EditForm,
        patch_translation::{BUYER_NAME, ITEM_NAME, QUANTITY, RATE, UNIT},
    },
};

use super::view_context::ViewContext;

/// Edit form pre-filled with the item's current values.
pub fn inventory_item_form(item: &InventoryItem, ctx: &ViewContext) -> EditForm {
    EditForm::new(
        ctx.t(TextKey::EditItemTitle),
        vec![
            FormField::new(
                FieldDescriptor::text(ITEM_NAME, ctx.t(TextKey::Item)),
                FieldValue::Text(item.item_name.clone()),
            ),
            FormField::new(
                FieldDescriptor::number(QUANTITY, ctx.t(TextKey::Qty)),
                FieldValue::Number(Some(item.quantity)),
            ),
            FormField::new(
                FieldDescriptor::text(UNIT, ctx.t(TextKey::UnitLabel)),
                FieldValue::Text(item.unit.clone()),
            ),
        ],
    )
}

/// Edit form pre-filled with the transaction's current values. The buyer
/// field is only offered for sales.
pub fn transaction_form(tx: &Transaction, ctx: &ViewContext) -> EditForm {
    let mut fields = vec![
        FormField::new(
            FieldDescriptor::text(ITEM_NAME, ctx.t(TextKey::Item)),
            FieldValue::Text(tx.item_name.clone()),
        ),
        FormField::new(
            FieldDescriptor::number(QUANTITY, ctx.t(TextKey::Qty)),
            FieldValue::Number(Some(tx.quantity)),
        ),
        FormField::new(
            FieldDescriptor::text(UNIT, ctx.t(TextKey::UnitLabel)),
            FieldValue::Text(tx.unit.clone()),
        ),
        FormField::new(
            FieldDescriptor::number(RATE, ctx.t(TextKey::Rate)).optional(),
            FieldValue::Number(tx.rate),
        ),
    ];
    if tx.transaction_type.is_sale() {
        fields.push(FormField::new(
            FieldDescriptor::text(BUYER_NAME, ctx.t(TextKey::BuyerName)).optional(),
            FieldValue::Text(tx.buyer_name.clone().unwrap_or_default()),
        ));
    }
    EditForm::new(ctx.t(TextKey::EditTransactionTitle), fields)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};

    use super::*;
    use crate::entities::{
        InventoryItemId, InventoryItemPatch, Locale, TransactionId, TransactionPatch,
        TransactionType,
    };

    fn sale() -> Transaction {
        Transaction {
            id: TransactionId::from("t-1"),
            transaction_type: TransactionType::Sale,
            item_name: "Tomato".into(),
            quantity: 4.0,
            unit: "kg".into(),
            rate: Some(60.0),
            total_amount: Some(240.0),
            buyer_name: Some("Aslam".into()),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn unchanged_item_form_reproduces_item() {
        let item = InventoryItem {
            id: InventoryItemId(1),
            item_name: " red onion ".into(),
            quantity: 5.0,
            unit: "kg".into(),
            last_updated: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        };
        let form = inventory_item_form(&item, &ViewContext::default());
        let patch = InventoryItemPatch::from_patch(&form.submit().unwrap()).unwrap();
        assert_eq!(
            patch,
            InventoryItemPatch {
                item_name: item.item_name,
                quantity: item.quantity,
                unit: item.unit,
            }
        );
    }

    #[test]
    fn unchanged_sale_form_reproduces_sale() {
        let tx = sale();
        let form = transaction_form(&tx, &ViewContext::default());
        let patch = TransactionPatch::from_patch(&form.submit().unwrap(), tx.total_amount).unwrap();
        assert_eq!(patch.item_name, tx.item_name);
        assert_eq!(patch.quantity, tx.quantity);
        assert_eq!(patch.rate, tx.rate);
        assert_eq!(patch.total_amount, tx.total_amount);
        assert_eq!(patch.buyer_name, tx.buyer_name);
    }

    #[test]
    fn editing_quantity_recomputes_total() {
        let tx = sale();
        let mut form = transaction_form(&tx, &ViewContext::default());
        form.set_input(QUANTITY, "10").unwrap();
        let patch = TransactionPatch::from_patch(&form.submit().unwrap(), tx.total_amount).unwrap();
        assert_eq!(patch.total_amount, Some(600.0));
    }

    #[test]
    fn fields_are_captioned_in_active_language() {
        let ctx = ViewContext::new(Locale::Urdu, ViewContext::default().utc_offset);
        let form = transaction_form(&sale(), &ctx);
        let label = |name: &str| {
            form.fields()
                .iter()
                .find(|f| f.name() == name)
                .map(|f| f.descriptor.label.clone())
        };
        assert_eq!(label(UNIT).as_deref(), Some("Paimana"));
        assert_eq!(label(QUANTITY).as_deref(), Some("Miqdaar"));

        let form = transaction_form(&sale(), &ViewContext::default());
        assert_eq!(
            form.fields()
                .iter()
                .find(|f| f.name() == UNIT)
                .map(|f| f.descriptor.label.as_str()),
            Some("Unit")
        );
    }

    #[test]
    fn purchases_have_no_buyer_field() {
        let mut tx = sale();
        tx.transaction_type = TransactionType::Purchase;
        let form = transaction_form(&tx, &ViewContext::default());
        assert!(form.fields().iter().all(|f| f.name() != BUYER_NAME));
        assert_eq!(form.title(), "Edit Transaction");
    }
}
