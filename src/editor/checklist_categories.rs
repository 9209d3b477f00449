// SPDX-License-Identifier: AGPL-3.0-or-later

//! Reducer state of the checklist categories editor of a work order.

use crate::checklist::{ChecklistCategory, ChecklistItem};
use crate::editor::record::{Record, RecordList, RemovalPolicy};
use crate::id::EntityId;

/// Editable fields of a checklist category.
#[derive(Clone, Debug, PartialEq)]
pub enum CategoryField {
    /// Category title.
    Title(String),

    /// Optional description.
    Description(Option<String>),

    /// Items of the category, as handed back by the item editor.
    Items(Vec<ChecklistItem>),
}

impl Record for ChecklistCategory {
    type Field = CategoryField;

    const REMOVAL: RemovalPolicy = RemovalPolicy::Hard;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn new_default(_position: usize) -> Self {
        ChecklistCategory::new()
    }

    fn with_field(&self, field: Self::Field) -> Self {
        let mut category = self.clone();

        match field {
            CategoryField::Title(title) => category.title = title,
            CategoryField::Description(description) => category.description = description,
            CategoryField::Items(items) => category.items = items,
        }

        category
    }
}

/// Returns the editor state for the categories of a work order.
pub fn get_initial_state(categories: &[ChecklistCategory]) -> RecordList<ChecklistCategory> {
    RecordList::from_records(categories.to_vec())
}
