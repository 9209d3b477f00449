// SPDX-License-Identifier: AGPL-3.0-or-later

//! Pure list reducers backing the drag and drop editors of checklists, checklist categories and
//! property type tables.
//!
//! Each editor owns a [`RecordList`] and transitions it by applying a [`ListAction`]. The three
//! record types only differ in their editable fields, whether they store their position and
//! whether removal is hard or soft, see [`Record`].
pub mod checklist_categories;
pub mod checklist_items;
mod errors;
pub mod property_types;
mod record;
mod reducer;

pub use checklist_categories::CategoryField;
pub use checklist_items::ItemField;
pub use errors::EditorError;
pub use property_types::{compact_for_submit, CompactedPropertyTypes, PropertyTypeField};
pub use record::{Record, RecordList, RemovalPolicy};
pub use reducer::{reduce, ListAction, ListEditor};
