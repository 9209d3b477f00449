// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

pub use crate::checklist::ChecklistError;
pub use crate::editor::EditorError;
pub use crate::form::{FormError, SubmissionError};
pub use crate::property::{PropertyError, ValidationError};

/// Errors of record identifiers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    /// Identifiers need to contain at least one character.
    #[error("Record id can not be empty")]
    Empty,
}
