// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

use crate::editor::EditorError;
use crate::property::PropertyError;

/// Failed attempts to save an edited entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Server rejected the mutation with a message meant for the user.
    #[error("{0}")]
    Server(String),

    /// Request did not reach the server or got no usable response.
    #[error("Request failed: {0}")]
    Transport(String),
}

/// Rejected edits of a properties form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// No property at the edited position.
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Value does not fit the property.
    #[error(transparent)]
    Property(#[from] PropertyError),
}
