//! Controller error types

use super::ApiError;
use super::ValidationErrors;

/// Errors returned by [`ResourceTable`](crate::table::ResourceTable) commands.
///
/// None of these are fatal: the controller is always left in its previous
/// valid state and the command can be retried.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The API client rejected the call.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The form failed client-side validation; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// A dialog command was issued while no resource was targeted.
    #[error("No resource is selected")]
    NoTarget,

    /// No scope has been loaded yet, so there is nothing to write to.
    #[error("No scope loaded")]
    NoScope,

    /// The controller was unmounted.
    #[error("Table is unmounted")]
    Unmounted,
}

impl TableError {
    /// Returns the API error, if this failure came from the server or transport.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the validation errors, if submission was blocked client-side.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
