//! Resource API collaborators
//!
//! [`ResourceApi`] is the only boundary of the table controller. The
//! [`HttpResourceApi`] implementation talks to the console backend; tests and
//! embedders can provide their own.

mod envelope;
mod http;

pub use envelope::*;
pub use http::*;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::FormData;
use crate::model::Resource;
use crate::model::ScopeId;

/// Remote collection endpoint for one resource type.
///
/// Every call either resolves with the server's representation or rejects
/// with an [`ApiError`]. Timeouts and transport concerns belong to the
/// implementation.
#[async_trait]
pub trait ResourceApi: Send + Sync + 'static {
    /// Record type of the collection.
    type Resource: Resource;
    /// Form data accepted by create and update.
    type Form: FormData;

    /// Fetches the whole collection for a scope.
    async fn list(&self, scope: &ScopeId) -> Result<Vec<Self::Resource>, ApiError>;

    /// Creates a resource; the server assigns its id.
    async fn create(&self, scope: &ScopeId, form: &Self::Form)
    -> Result<Self::Resource, ApiError>;

    /// Updates a resource and returns the server's representation.
    async fn update(
        &self,
        scope: &ScopeId,
        id: &<Self::Resource as Resource>::Id,
        form: &Self::Form,
    ) -> Result<Self::Resource, ApiError>;

    /// Deletes a resource.
    async fn delete(
        &self,
        scope: &ScopeId,
        id: &<Self::Resource as Resource>::Id,
    ) -> Result<(), ApiError>;
}
