// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

/// Errors of decoding checklist items.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecklistError {
    /// Kind tag is not known to this client.
    #[error("Unknown checklist item kind '{0}'")]
    UnknownKind(String),

    /// Response of a yes / no item is neither "YES" nor "NO".
    #[error("Unknown yes / no response '{0}'")]
    UnknownYesNoResponse(String),

    /// Selection mode of an enum item is neither "single" nor "multiple".
    #[error("Unknown enum selection mode '{0}'")]
    UnknownSelectionMode(String),

    /// Input could not be decoded into a checklist item or category.
    #[error("Invalid checklist data: {0}")]
    Decode(String),
}
