//! Sales orders, scoped by location.

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

static SCHEMA: Schema = Schema {
    kind: "order",
    label: "Order",
    plural: "orders",
    columns: &[
        Column::new("id", "Order ID").sortable(),
        Column::new("customer_name", "Customer").sortable(),
        Column::new("customer_phone", "Phone"),
        Column::new("customer_email", "Email"),
        Column::new("total_amount", "Total Amount").sortable(),
        Column::new("status", "Status").sortable(),
        Column::new("payment_status", "Payment Status").sortable(),
        Column::new("created_at", "Created").sortable(),
    ],
    filter_fields: &["id", "customer_name", "customer_phone", "customer_email"],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: i64,
    pub quantity: i64,
    pub unit_price: Decimal,
}

impl OrderLine {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(rename = "location", alias = "location_id")]
    pub location_id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Order {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id),
            "customer_name" => Value::from(&self.customer_name),
            "customer_phone" => Value::from(&self.customer_phone),
            "customer_email" => Value::from(&self.customer_email),
            "total_amount" => Value::from(self.total_amount),
            "status" => Value::from(&self.status),
            "payment_status" => Value::from(self.payment_status.as_str()),
            "created_at" => Value::from(self.created_at),
            _ => Value::Null,
        }
    }

    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl RemoteResource for Order {
    type Form = OrderForm;

    const COLLECTION_PATH: &'static str = "/api/location/{scope}/orders/";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderForm {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub items: Vec<OrderLine>,
    pub payment_status: PaymentStatus,
}

impl OrderForm {
    /// Sum of the line subtotals.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderLine::subtotal).sum()
    }
}

impl FormData for OrderForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.items.is_empty() {
            errors.add("items", "an order needs at least one item");
        }
        for (index, line) in self.items.iter().enumerate() {
            if line.quantity <= 0 {
                errors.add(format!("items[{index}].quantity"), "quantity must be positive");
            }
            if line.unit_price.is_sign_negative() {
                errors.add(format!("items[{index}].unit_price"), "price cannot be negative");
            }
        }
        errors.into_result()
    }
}
