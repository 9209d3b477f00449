// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

use crate::id::EntityId;

/// Rejected list edits. The list stays unchanged whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// No record with this id is part of the list.
    #[error("No record with id '{0}' in list")]
    UnknownId(EntityId),

    /// Position is outside of the list.
    #[error("Position {index} is out of bounds for list of length {len}")]
    IndexOutOfBounds {
        /// Requested position.
        index: usize,

        /// Length of the list the position was checked against.
        len: usize,
    },

    /// Replacement record carries a different id than the record it should replace.
    #[error("Replacement for record '{expected}' has id '{found}'")]
    IdMismatch {
        /// Id of the replaced record.
        expected: EntityId,

        /// Id of the replacement.
        found: EntityId,
    },
}
