//! Business expenses and their structured filters.

use std::sync::Arc;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::api::RemoteResource;
use crate::api::UpdateMethod;
use crate::error::ValidationErrors;
use crate::model::Column;
use crate::model::FormData;
use crate::model::Resource;
use crate::model::Schema;
use crate::model::Value;
use crate::table::Predicate;

/// Payment methods offered by the expense form.
pub const PAYMENT_METHODS: [&str; 7] = [
    "Cash",
    "Credit Card",
    "Debit Card",
    "Bank Transfer",
    "Check",
    "Mobile Payment",
    "Other",
];

/// Frequencies of recurring expenses.
pub const RECURRING_FREQUENCIES: [&str; 4] = ["daily", "weekly", "monthly", "yearly"];

static SCHEMA: Schema = Schema {
    kind: "expense",
    label: "Expense",
    plural: "expenses",
    columns: &[
        Column::new("id", "ID"),
        Column::new("name", "Name").sortable(),
        Column::new("amount", "Amount").sortable(),
        Column::new("description", "Description"),
        Column::new("expense_date", "Date").sortable(),
        Column::new("payment_method", "Payment Method").sortable(),
        Column::new("receipt_number", "Receipt"),
        Column::new("is_recurring", "Recurring").sortable(),
        Column::new("recurring_frequency", "Frequency"),
        Column::new("recurring_end_date", "Ends").sortable(),
    ],
    filter_fields: &["name", "description", "receipt_number", "payment_method"],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    #[serde(rename = "business", default)]
    pub business_id: Option<i64>,
    #[serde(rename = "location", default)]
    pub location_id: Option<i64>,
    #[serde(rename = "category", default)]
    pub category_id: Option<i64>,
    pub name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub payment_method: String,
    #[serde(default)]
    pub receipt_number: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurring_frequency: Option<String>,
    #[serde(default)]
    pub recurring_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Expense {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id),
            "name" => Value::from(&self.name),
            "amount" => Value::from(self.amount),
            "description" => Value::from(self.description.as_deref()),
            "expense_date" => Value::from(self.expense_date),
            "payment_method" => Value::from(&self.payment_method),
            "receipt_number" => Value::from(self.receipt_number.as_deref()),
            "is_recurring" => Value::from(self.is_recurring),
            "recurring_frequency" => Value::from(self.recurring_frequency.as_deref()),
            "recurring_end_date" => Value::from(self.recurring_end_date),
            "category" => Value::from(self.category_id),
            "location" => Value::from(self.location_id),
            _ => Value::Null,
        }
    }

    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl RemoteResource for Expense {
    type Form = ExpenseForm;

    const COLLECTION_PATH: &'static str = "/api/inventory/business/{scope}/expenses/";
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Patch;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: Decimal,
    pub description: Option<String>,
    #[serde(rename = "category")]
    pub category_id: Option<i64>,
    #[serde(rename = "location")]
    pub location_id: Option<i64>,
    pub expense_date: NaiveDate,
    pub payment_method: String,
    pub receipt_number: Option<String>,
    pub is_recurring: bool,
    pub recurring_frequency: Option<String>,
    pub recurring_end_date: Option<NaiveDate>,
}

impl FormData for ExpenseForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.require("payment_method", &self.payment_method);

        if self.amount <= Decimal::ZERO {
            errors.add("amount", "amount must be greater than zero");
        }

        if self.is_recurring {
            match self.recurring_frequency.as_deref() {
                Some(f) if RECURRING_FREQUENCIES.contains(&f) => {}
                _ => errors.add("recurring_frequency", "recurring expenses need a frequency"),
            }
        }

        if let Some(end) = self.recurring_end_date
            && end < self.expense_date
        {
            errors.add("recurring_end_date", "end date is before the expense date");
        }

        errors.into_result()
    }
}

/// Structured expense filters, ANDed with the table's text filter.
///
/// Unset criteria match everything. Amount and date bounds are inclusive.
///
/// # Example
///
/// ```ignore
/// let filters = ExpenseFilters::new()
///     .with_recurring(true)
///     .with_min_amount(Decimal::new(100, 0));
/// table.set_predicate(filters.into_predicate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilters {
    pub category_id: Option<i64>,
    pub location_id: Option<i64>,
    pub is_recurring: Option<bool>,
    pub payment_method: Option<String>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_location(mut self, location_id: i64) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn with_recurring(mut self, is_recurring: bool) -> Self {
        self.is_recurring = Some(is_recurring);
        self
    }

    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    pub fn with_min_amount(mut self, amount: Decimal) -> Self {
        self.min_amount = Some(amount);
        self
    }

    pub fn with_max_amount(mut self, amount: Decimal) -> Self {
        self.max_amount = Some(amount);
        self
    }

    /// Restricts to expenses dated within `start..=end`.
    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Returns `true` if no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        self.category_id.is_none_or(|c| expense.category_id == Some(c))
            && self.location_id.is_none_or(|l| expense.location_id == Some(l))
            && self.is_recurring.is_none_or(|r| expense.is_recurring == r)
            && self
                .payment_method
                .as_deref()
                .is_none_or(|m| expense.payment_method == m)
            && self.min_amount.is_none_or(|min| expense.amount >= min)
            && self.max_amount.is_none_or(|max| expense.amount <= max)
            && self.start_date.is_none_or(|start| expense.expense_date >= start)
            && self.end_date.is_none_or(|end| expense.expense_date <= end)
    }

    pub fn into_predicate(self) -> Predicate<Expense> {
        Arc::new(move |expense| self.matches(expense))
    }
}
