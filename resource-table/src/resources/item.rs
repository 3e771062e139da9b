//! Inventory items, scoped by category.

use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::api::RemoteResource;
use crate::error::ValidationErrors;
use crate::model::Column;
use crate::model::FormData;
use crate::model::Resource;
use crate::model::Schema;
use crate::model::Value;
use crate::table::Predicate;

static SCHEMA: Schema = Schema {
    kind: "item",
    label: "Item",
    plural: "items",
    columns: &[
        Column::new("id", "ID"),
        Column::new("name", "Name").sortable(),
        Column::new("barcode", "Barcode"),
        Column::new("price", "Price").sortable(),
        Column::new("quantity", "Quantity").sortable(),
        Column::new("category", "Category"),
        Column::new("is_active", "Status").sortable(),
        Column::new("last_inventory_update", "Last Updated").sortable(),
    ],
    filter_fields: &["name", "barcode", "price", "category", "quantity"],
};

/// A stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(rename = "category")]
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub barcode: Option<String>,
    pub price: Decimal,
    pub quantity: i64,
    pub is_active: bool,
    #[serde(default)]
    pub is_hidden: bool,
    /// Temporary items expire and have their quantity reset periodically.
    #[serde(default)]
    pub is_temporary: bool,
    #[serde(default)]
    pub expiry_hours: Option<u32>,
    #[serde(default)]
    pub auto_reset_quantity: bool,
    #[serde(default)]
    pub last_quantity_reset: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_inventory_update: Option<DateTime<Utc>>,
}

impl Item {
    /// Returns `true` if `quantity` units can be sold right now.
    pub fn is_available(&self, quantity: i64) -> bool {
        self.is_active && self.quantity >= quantity
    }
}

impl Resource for Item {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id),
            "name" => Value::from(&self.name),
            "barcode" => Value::from(self.barcode.as_deref()),
            "price" => Value::from(self.price),
            "quantity" => Value::from(self.quantity),
            "category" => Value::from(self.category_id),
            "is_active" => Value::from(self.is_active),
            "is_hidden" => Value::from(self.is_hidden),
            "is_temporary" => Value::from(self.is_temporary),
            "last_inventory_update" => Value::from(self.last_inventory_update),
            _ => Value::Null,
        }
    }

    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl RemoteResource for Item {
    type Form = ItemForm;

    const COLLECTION_PATH: &'static str = "/api/category/{scope}/items/";
}

/// Add/edit payload for [`Item`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemForm {
    pub name: String,
    pub barcode: Option<String>,
    pub price: Decimal,
    pub quantity: i64,
    pub is_active: bool,
    pub is_hidden: bool,
    pub is_temporary: bool,
    pub expiry_hours: Option<u32>,
    pub auto_reset_quantity: bool,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            barcode: None,
            price: Decimal::ZERO,
            quantity: 0,
            is_active: true,
            is_hidden: false,
            is_temporary: false,
            expiry_hours: None,
            auto_reset_quantity: false,
        }
    }
}

impl From<&Item> for ItemForm {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            barcode: item.barcode.clone(),
            price: item.price,
            quantity: item.quantity,
            is_active: item.is_active,
            is_hidden: item.is_hidden,
            is_temporary: item.is_temporary,
            expiry_hours: item.expiry_hours,
            auto_reset_quantity: item.auto_reset_quantity,
        }
    }
}

impl FormData for ItemForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        if self.price.is_sign_negative() {
            errors.add("price", "price cannot be negative");
        }
        if self.quantity < 0 {
            errors.add("quantity", "quantity cannot be negative");
        }
        if self.is_temporary && self.expiry_hours.is_none_or(|h| h == 0) {
            errors.add("expiry_hours", "temporary items need an expiry");
        }
        errors.into_result()
    }
}

/// Tab of the item screen: regular stock or temporary items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemTab {
    #[default]
    Regular,
    Temporary,
}

impl ItemTab {
    pub fn matches(self, item: &Item) -> bool {
        match self {
            ItemTab::Regular => !item.is_temporary,
            ItemTab::Temporary => item.is_temporary,
        }
    }

    /// Table predicate showing only this tab's items.
    pub fn predicate(self) -> Predicate<Item> {
        Arc::new(move |item| self.matches(item))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn item() -> Item {
        serde_json::from_value(json!({
            "id": 7,
            "category": 4,
            "name": "Milk",
            "barcode": "0001",
            "price": "12.50",
            "quantity": 3,
            "is_active": true,
            "is_hidden": false,
            "last_inventory_update": "2024-05-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_backend_record() {
        let item = item();
        assert_eq!(item.category_id, 4);
        assert_eq!(item.price, Decimal::new(1250, 2));
        assert!(!item.is_temporary);
        assert!(item.last_quantity_reset.is_none());
    }

    #[test]
    fn test_fields() {
        let item = item();
        assert_eq!(item.field("name"), Value::from("Milk"));
        assert_eq!(item.field("category").to_text(), "4");
        assert!(item.field("nope").is_null());
    }

    #[test]
    fn test_availability() {
        let mut item = item();
        assert!(item.is_available(3));
        assert!(!item.is_available(4));
        item.is_active = false;
        assert!(!item.is_available(1));
    }

    #[test]
    fn test_tab_predicate() {
        let mut temporary = item();
        temporary.is_temporary = true;

        let regular = ItemTab::Regular.predicate();
        assert!(regular(&item()));
        assert!(!regular(&temporary));
        assert!(ItemTab::Temporary.predicate()(&temporary));
    }

    #[test]
    fn test_validate() {
        let form = ItemForm::from(&item());
        assert!(form.validate().is_ok());

        let form = ItemForm {
            name: " ".into(),
            is_temporary: true,
            quantity: -1,
            ..ItemForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.for_field("name").count(), 1);
        assert_eq!(errors.for_field("quantity").count(), 1);
        assert_eq!(errors.for_field("expiry_hours").count(), 1);
    }

    #[test]
    fn test_form_serializes_snake_case() {
        let value = serde_json::to_value(ItemForm::from(&item())).unwrap();
        assert_eq!(value["is_active"], json!(true));
        assert_eq!(value["auto_reset_quantity"], json!(false));
    }
}
