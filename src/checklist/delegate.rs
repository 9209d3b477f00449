// SPDX-License-Identifier: AGPL-3.0-or-later

use log::warn;

use crate::checklist::completion::enum_string_to_array;
use crate::checklist::kind::valid_kind;
use crate::checklist::{ChecklistItem, ChecklistItemKind, EnumSelectionMode, ItemValue};

/// Whether a checklist is designed (items are defined) or filled (items are answered).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditorMode {
    /// Titles, help texts, kinds and enum options are edited.
    Design,

    /// Answers are given.
    Fill,
}

/// Component an item gets rendered with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemDelegate {
    /// Title and help text inputs, used in design mode for all kinds without extra settings.
    Definition,

    /// Definition inputs plus an editor for the comma-joined option list.
    EnumDefinition,

    /// Checkbox.
    Checkbox,

    /// Text input.
    TextInput,

    /// Option picker.
    EnumSelect {
        /// Options to pick from.
        options: Vec<String>,

        /// Several options can be picked.
        multiple: bool,
    },

    /// File upload with list of uploaded files.
    FileUpload,

    /// "Yes" and "No" buttons.
    YesNoButtons,

    /// Read-only table of cellular scan results.
    CellScanResults,

    /// Read-only table of Wi-Fi scan results.
    WifiScanResults,

    /// Placeholder for items this client can't render.
    Unsupported,
}

/// Returns the component to render an item with.
pub fn delegate_for_item(item: &ChecklistItem, mode: EditorMode) -> ItemDelegate {
    delegate_for_value(&item.value, mode)
}

fn delegate_for_value(value: &ItemValue, mode: EditorMode) -> ItemDelegate {
    match (mode, value) {
        (EditorMode::Design, ItemValue::Enum { .. }) => ItemDelegate::EnumDefinition,
        (EditorMode::Design, _) => ItemDelegate::Definition,
        (EditorMode::Fill, ItemValue::Simple { .. }) => ItemDelegate::Checkbox,
        (EditorMode::Fill, ItemValue::String { .. }) => ItemDelegate::TextInput,
        (
            EditorMode::Fill,
            ItemValue::Enum {
                enum_values,
                selection_mode,
                ..
            },
        ) => ItemDelegate::EnumSelect {
            options: enum_string_to_array(enum_values.as_deref()),
            multiple: *selection_mode == EnumSelectionMode::Multiple,
        },
        (EditorMode::Fill, ItemValue::Files(_)) => ItemDelegate::FileUpload,
        (EditorMode::Fill, ItemValue::YesNo(_)) => ItemDelegate::YesNoButtons,
        (EditorMode::Fill, ItemValue::CellScan(_)) => ItemDelegate::CellScanResults,
        (EditorMode::Fill, ItemValue::WifiScan(_)) => ItemDelegate::WifiScanResults,
    }
}

/// Returns the component for a raw kind tag. Unknown kinds are logged and rendered as
/// placeholder.
pub fn delegate_for_kind(raw: &str, mode: EditorMode) -> ItemDelegate {
    match valid_kind(raw) {
        Ok(kind) => delegate_for_value(&ItemValue::empty(kind), mode),
        Err(err) => {
            warn!("{}, render placeholder", err);
            ItemDelegate::Unsupported
        }
    }
}

/// Returns all kinds which can be picked when designing a checklist. Scan items are created by
/// the mobile app only.
pub fn designable_kinds() -> Vec<ChecklistItemKind> {
    ChecklistItemKind::ALL
        .iter()
        .copied()
        .filter(|kind| {
            !matches!(
                kind,
                ChecklistItemKind::CellScan | ChecklistItemKind::WifiScan
            )
        })
        .collect()
}
