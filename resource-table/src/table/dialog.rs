//! Add/edit/delete dialog state.

use crate::model::Resource;

/// Which CRUD dialog is open, and for which resource.
///
/// Only one dialog is open at a time, and edit/delete always carry their
/// target.
#[derive(Debug, Clone, Default)]
pub enum DialogState<R> {
    #[default]
    Closed,
    Adding,
    Editing(R),
    Deleting(R),
}

impl<R: Resource> DialogState<R> {
    /// Returns `true` if no dialog is open.
    pub fn is_closed(&self) -> bool {
        matches!(self, DialogState::Closed)
    }

    /// Returns `true` if the add dialog is open.
    pub fn is_adding(&self) -> bool {
        matches!(self, DialogState::Adding)
    }

    /// Returns `true` if the edit dialog is open.
    pub fn is_editing(&self) -> bool {
        matches!(self, DialogState::Editing(_))
    }

    /// Returns `true` if the delete confirmation is open.
    pub fn is_deleting(&self) -> bool {
        matches!(self, DialogState::Deleting(_))
    }

    /// The resource under edit or delete.
    pub fn target(&self) -> Option<&R> {
        match self {
            DialogState::Editing(target) | DialogState::Deleting(target) => Some(target),
            _ => None,
        }
    }

    /// Returns `true` if the edit dialog is open for `id`.
    pub(crate) fn is_editing_id(&self, id: &R::Id) -> bool {
        matches!(self, DialogState::Editing(target) if target.id() == id)
    }

    /// Returns `true` if the delete confirmation is open for `id`.
    pub(crate) fn is_deleting_id(&self, id: &R::Id) -> bool {
        matches!(self, DialogState::Deleting(target) if target.id() == id)
    }
}
