//! Scope identifiers.

/// Identifier of the tenant, business, category or location whose collection
/// a table shows.
///
/// # Example
///
/// ```
/// use resource_table::model::ScopeId;
///
/// let by_number = ScopeId::from(7);
/// let by_name = ScopeId::from("main-store");
/// assert_eq!(by_number.as_str(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeId(String);

impl ScopeId {
    /// Creates a scope identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as it appears in request paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScopeId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for ScopeId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<i64> for ScopeId {
    fn from(v: i64) -> Self {
        Self(v.to_string())
    }
}

impl From<i32> for ScopeId {
    fn from(v: i32) -> Self {
        Self(v.to_string())
    }
}

impl From<u64> for ScopeId {
    fn from(v: u64) -> Self {
        Self(v.to_string())
    }
}
