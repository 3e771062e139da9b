//! Staff user accounts of a business.

use std::fmt;

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

static SCHEMA: Schema = Schema {
    kind: "user",
    label: "User",
    plural: "users",
    columns: &[
        Column::new("id", "ID"),
        Column::new("user_name", "Username").sortable(),
        Column::new("full_name", "Name").sortable(),
        Column::new("email", "Email").sortable(),
        Column::new("phone_number", "Phone"),
        Column::new("location", "Location").sortable(),
        Column::new("role", "Role").sortable(),
    ],
    filter_fields: &["user_name", "full_name", "email", "phone_number", "role"],
};

/// Role of a staff user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Sales,
    Warehouse,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Sales => "Sales",
            Role::Warehouse => "Warehouse",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub location: Option<i64>,
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Resource for User {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id),
            "user_name" => Value::from(&self.user_name),
            "full_name" => Value::from(&self.full_name),
            "email" => Value::from(&self.email),
            "phone_number" => Value::from(&self.phone_number),
            "location" => Value::from(self.location),
            "role" => Value::from(self.role.as_str()),
            "is_active" => Value::from(self.is_active),
            _ => Value::Null,
        }
    }

    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl RemoteResource for User {
    type Form = UserForm;

    const COLLECTION_PATH: &'static str = "/api/auth/register-user/";
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Patch;
}

/// Registration and edit payload for [`User`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserForm {
    pub user_name: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub location_id: Option<i64>,
    pub role: Role,
    pub is_active: bool,
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            user_name: user.user_name.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            location_id: user.location,
            role: user.role,
            is_active: user.is_active,
        }
    }
}

impl FormData for UserForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("user_name", &self.user_name);
        errors.require("full_name", &self.full_name);
        errors.require("email", &self.email);
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.add("email", "email is not a valid address");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_backend_record() {
        let user: User = serde_json::from_value(json!({
            "id": 3,
            "user_name": "abebe",
            "full_name": "Abebe Kebede",
            "email": "abebe@example.com",
            "phone_number": "+251911000000",
            "location": 2,
            "role": "Sales"
        }))
        .unwrap();

        assert_eq!(user.role, Role::Sales);
        assert!(user.is_active);
        assert_eq!(user.field("role"), Value::from("Sales"));
        assert_eq!(user.field("location"), Value::from(2i64));
    }

    #[test]
    fn test_validate_email() {
        let form = UserForm {
            user_name: "abebe".into(),
            full_name: "Abebe Kebede".into(),
            email: "not-an-address".into(),
            phone_number: String::new(),
            location_id: None,
            role: Role::Admin,
            is_active: true,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.errors()[0].field, "email");
    }
}
