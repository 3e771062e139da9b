//! Resource trait and table schema types.

use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

use super::Value;

/// Key naming a resource field (and the table column showing it).
pub type FieldKey = &'static str;

/// Column configuration.
///
/// Columns define the structure of a resource table: which field is shown,
/// its header label, and whether clicking the header sorts by it.
///
/// # Example
///
/// ```
/// use resource_table::model::Column;
///
/// let columns = [
///     Column::new("id", "ID"),
///     Column::new("name", "Name").sortable(),
/// ];
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Field key shown in this column.
    pub key: FieldKey,
    /// Column header text.
    pub label: &'static str,
    /// Whether this column is sortable.
    pub sortable: bool,
}

impl Column {
    /// Create a new, non-sortable column.
    pub const fn new(key: FieldKey, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
        }
    }

    /// Make the column sortable.
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Static description of a resource type as a table sees it.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Machine name, used as the key for persisted table preferences.
    pub kind: &'static str,
    /// Human-readable singular label used in notifications ("Item").
    pub label: &'static str,
    /// Lowercase plural used in notifications ("items").
    pub plural: &'static str,
    /// Known columns, in display order.
    pub columns: &'static [Column],
    /// Fields matched by the free-text filter.
    pub filter_fields: &'static [FieldKey],
}

impl Schema {
    /// Looks a column up by key.
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }
}

/// Identity of a resource: a string or integer, immutable after creation.
pub trait ResourceId: Clone + Eq + Hash + Display + Debug + Send + Sync + 'static {}

impl<T> ResourceId for T where T: Clone + Eq + Hash + Display + Debug + Send + Sync + 'static {}

/// A record type managed by a resource table.
///
/// The controller only reads fields through [`Resource::field`], and only
/// for the keys named by the schema.
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    /// Type of the identity field.
    type Id: ResourceId;

    /// Returns the stable identity of this resource.
    fn id(&self) -> &Self::Id;

    /// Returns the value of a field, or [`Value::Null`] for unknown keys.
    fn field(&self, key: &str) -> Value;

    /// Returns the static table schema for this resource type.
    fn schema() -> &'static Schema;
}

/// Form data submitted by add/edit dialogs.
pub trait FormData: Clone + Debug + Send + Sync + 'static {
    /// Client-side validation, run before any request is sent.
    fn validate(&self) -> Result<(), crate::error::ValidationErrors> {
        Ok(())
    }
}
