//! Store locations (branches), scoped by store.

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
    kind: "location",
    label: "Location",
    plural: "locations",
    columns: &[
        Column::new("id", "ID"),
        Column::new("name", "Name").sortable(),
        Column::new("address", "Address").sortable(),
        Column::new("contact_number", "Phone Number"),
        Column::new("is_active", "Status").sortable(),
    ],
    filter_fields: &["name", "address", "contact_number"],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    #[serde(rename = "store")]
    pub store_id: i64,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub contact_number: String,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Location {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id),
            "name" => Value::from(&self.name),
            "address" => Value::from(&self.address),
            "contact_number" => Value::from(&self.contact_number),
            "is_active" => Value::from(self.is_active),
            _ => Value::Null,
        }
    }

    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl RemoteResource for Location {
    type Form = LocationForm;

    const COLLECTION_PATH: &'static str = "/api/store/{scope}/locations/";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationForm {
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub is_active: bool,
}

impl FormData for LocationForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.require("address", &self.address);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let form = LocationForm {
            name: "Main Branch".into(),
            address: "".into(),
            contact_number: "+251935609939".into(),
            is_active: true,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors()[0].message, "address is required");
    }
}
