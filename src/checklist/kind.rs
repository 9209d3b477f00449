// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checklist::errors::ChecklistError;

/// Kind of a checklist item, defining how it gets filled and when it counts as done.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItemKind {
    /// Plain checkbox.
    Simple,

    /// Free-form text answer.
    String,

    /// One or more options out of a list.
    Enum,

    /// Uploaded files.
    Files,

    /// "Yes" or "No" answer.
    YesNo,

    /// Results of a cellular network scan.
    CellScan,

    /// Results of a Wi-Fi scan.
    WifiScan,
}

impl ChecklistItemKind {
    /// All kinds known to this client.
    pub const ALL: [ChecklistItemKind; 7] = [
        ChecklistItemKind::Simple,
        ChecklistItemKind::String,
        ChecklistItemKind::Enum,
        ChecklistItemKind::Files,
        ChecklistItemKind::YesNo,
        ChecklistItemKind::CellScan,
        ChecklistItemKind::WifiScan,
    ];

    /// Returns the tag as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistItemKind::Simple => "simple",
            ChecklistItemKind::String => "string",
            ChecklistItemKind::Enum => "enum",
            ChecklistItemKind::Files => "files",
            ChecklistItemKind::YesNo => "yes_no",
            ChecklistItemKind::CellScan => "cell_scan",
            ChecklistItemKind::WifiScan => "wifi_scan",
        }
    }
}

impl Display for ChecklistItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChecklistItemKind {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        valid_kind(s)
    }
}

/// Checks a raw kind tag, failing for everything but the known kinds.
pub fn valid_kind(raw: &str) -> Result<ChecklistItemKind, ChecklistError> {
    ChecklistItemKind::ALL
        .iter()
        .find(|kind| kind.as_str() == raw)
        .copied()
        .ok_or_else(|| ChecklistError::UnknownKind(raw.to_owned()))
}
