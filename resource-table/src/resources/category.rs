//! Item categories, scoped by location.

use chrono::DateTime;
use chrono::Utc;
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
    kind: "category",
    label: "Category",
    plural: "categories",
    columns: &[
        Column::new("id", "ID"),
        Column::new("name", "Name").sortable(),
        Column::new("description", "Description"),
        Column::new("is_active", "Status").sortable(),
        Column::new("is_hidden", "Hidden").sortable(),
    ],
    filter_fields: &["name", "description"],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "location")]
    pub location_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Category {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id),
            "name" => Value::from(&self.name),
            "description" => Value::from(self.description.as_deref()),
            "is_active" => Value::from(self.is_active),
            "is_hidden" => Value::from(self.is_hidden),
            "created_at" => Value::from(self.created_at),
            "updated_at" => Value::from(self.updated_at),
            _ => Value::Null,
        }
    }

    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl RemoteResource for Category {
    type Form = CategoryForm;

    const COLLECTION_PATH: &'static str = "/api/location/{scope}/categories/";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryForm {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_hidden: bool,
}

impl FormData for CategoryForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.into_result()
    }
}
