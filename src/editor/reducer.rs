// SPDX-License-Identifier: AGPL-3.0-or-later

use log::{debug, warn};

use crate::editor::errors::EditorError;
use crate::editor::record::{Record, RecordList};
use crate::id::EntityId;

/// Edit of a [`RecordList`] triggered by the user.
#[derive(Clone, Debug)]
pub enum ListAction<R: Record> {
    /// Append a new record with default values.
    Add,

    /// Remove the record with this id.
    Remove(EntityId),

    /// Replace one field of the record with this id.
    UpdateField(EntityId, R::Field),

    /// Replace the record with this id as a whole.
    ReplaceWhole(EntityId, R),

    /// Take the record at `source` out and reinsert it at `destination`.
    Move {
        /// Current position.
        source: usize,

        /// New position.
        destination: usize,
    },
}

/// Applies an action to a list, returning the new list.
pub fn reduce<R: Record>(
    state: &RecordList<R>,
    action: ListAction<R>,
) -> Result<RecordList<R>, EditorError> {
    match action {
        ListAction::Add => {
            let record = R::new_default(state.len());
            Ok(state.appended(record))
        }
        ListAction::Remove(id) => state.removed(&id),
        ListAction::UpdateField(id, field) => state.updated(&id, field),
        ListAction::ReplaceWhole(id, record) => state.replaced(&id, record),
        ListAction::Move {
            source,
            destination,
        } => state.moved(source, destination),
    }
}

/// Holds the state of one list editor and applies actions dispatched to it.
///
/// Nested editors receive a `&mut ListEditor` and dispatch their edits through it.
#[derive(Clone, Debug)]
pub struct ListEditor<R: Record> {
    state: RecordList<R>,
}

impl<R: Record> ListEditor<R> {
    /// Returns an editor starting from the given state.
    pub fn new(state: RecordList<R>) -> Self {
        Self { state }
    }

    /// Returns the current state.
    pub fn state(&self) -> &RecordList<R> {
        &self.state
    }

    /// Applies an action. Rejected actions leave the state unchanged.
    pub fn dispatch(&mut self, action: ListAction<R>) -> Result<(), EditorError> {
        debug!("Dispatch list action {:?}", action);

        match reduce(&self.state, action) {
            Ok(state) => {
                self.state = state;
                Ok(())
            }
            Err(err) => {
                warn!("Rejected list action: {}", err);
                Err(err)
            }
        }
    }

    /// Returns the current state, consuming the editor.
    pub fn into_state(self) -> RecordList<R> {
        self.state
    }
}
