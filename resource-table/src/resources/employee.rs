//! Store employees.

use chrono::DateTime;
use chrono::NaiveDate;
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
    kind: "employee",
    label: "Employee",
    plural: "employees",
    columns: &[
        Column::new("id", "ID"),
        Column::new("full_name", "Name").sortable(),
        Column::new("email", "Email").sortable(),
        Column::new("phone", "Phone"),
        Column::new("position", "Position").sortable(),
        Column::new("hire_date", "Hire Date").sortable(),
        Column::new("salary", "Salary").sortable(),
        Column::new("employment_status", "Status").sortable(),
    ],
    filter_fields: &["full_name", "email", "phone", "position"],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(rename = "store")]
    pub store_id: i64,
    #[serde(rename = "location", default)]
    pub location_id: Option<i64>,
    pub full_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    pub is_active: bool,
    #[serde(default)]
    pub salary: Option<Decimal>,
    #[serde(default)]
    pub employment_status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Employee {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id),
            "full_name" => Value::from(&self.full_name),
            "email" => Value::from(&self.email),
            "phone" => Value::from(&self.phone),
            "position" => Value::from(&self.position),
            "hire_date" => Value::from(self.hire_date),
            "salary" => Value::from(self.salary),
            "employment_status" => Value::from(&self.employment_status),
            "is_active" => Value::from(self.is_active),
            _ => Value::Null,
        }
    }

    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl RemoteResource for Employee {
    type Form = EmployeeForm;

    const COLLECTION_PATH: &'static str = "/api/store/{scope}/employees/";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeForm {
    #[serde(rename = "location")]
    pub location_id: Option<i64>,
    pub full_name: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    pub hire_date: Option<NaiveDate>,
    pub is_active: bool,
    pub salary: Option<Decimal>,
    pub employment_status: String,
}

impl FormData for EmployeeForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("full_name", &self.full_name);
        errors.require("email", &self.email);
        if self.salary.is_some_and(|s| s.is_sign_negative()) {
            errors.add("salary", "salary cannot be negative");
        }
        errors.into_result()
    }
}
