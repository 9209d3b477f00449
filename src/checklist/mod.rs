// SPDX-License-Identifier: AGPL-3.0-or-later

//! Checklists of work orders.
//!
//! Items are grouped into categories. Every item has a kind which decides how it is answered,
//! when it counts as done and which component renders it.
mod category;
mod completion;
mod delegate;
mod errors;
mod item;
mod kind;
mod payload;

pub use category::ChecklistCategory;
pub use completion::{
    completion_summary, enum_array_to_string, enum_string_to_array, is_done, CompletionSummary,
};
pub use delegate::{
    delegate_for_item, delegate_for_kind, designable_kinds, EditorMode, ItemDelegate,
};
pub use errors::ChecklistError;
pub use item::{
    CellScan, CellularNetworkType, ChecklistFile, ChecklistItem, EnumSelectionMode, ItemValue,
    WifiScan, YesNoResponse,
};
pub use kind::{valid_kind, ChecklistItemKind};
pub use payload::{
    to_checklist_payload, ChecklistCategoryInput, ChecklistFileInput, ChecklistItemInput,
};
