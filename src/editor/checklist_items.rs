// SPDX-License-Identifier: AGPL-3.0-or-later

//! Reducer state of the items editor of one checklist category.

use crate::checklist::{ChecklistItem, ChecklistItemKind, ItemValue};
use crate::editor::record::{Record, RecordList, RemovalPolicy};
use crate::id::EntityId;

/// Editable fields of a checklist item.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemField {
    /// Question or instruction.
    Title(String),

    /// Additional explanation.
    HelpText(Option<String>),

    /// Kind of the item. Changing it resets the value.
    Kind(ChecklistItemKind),

    /// Kind-specific state. The kind of the item follows the value.
    Value(ItemValue),
}

impl Record for ChecklistItem {
    type Field = ItemField;

    const REMOVAL: RemovalPolicy = RemovalPolicy::Hard;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn new_default(position: usize) -> Self {
        ChecklistItem::new(ChecklistItemKind::Simple, Some(position as i64))
    }

    fn with_field(&self, field: Self::Field) -> Self {
        let mut item = self.clone();

        match field {
            ItemField::Title(title) => item.title = title,
            ItemField::HelpText(help_text) => item.help_text = help_text,
            ItemField::Kind(kind) if kind != item.kind() => item.value = ItemValue::empty(kind),
            ItemField::Kind(_) => (),
            ItemField::Value(value) => item.value = value,
        }

        item
    }

    fn index(&self) -> Option<i64> {
        self.index
    }

    fn set_index(&mut self, index: i64) {
        self.index = Some(index);
    }
}

/// Returns the editor state for the items of one checklist category.
pub fn get_initial_state(items: &[ChecklistItem]) -> RecordList<ChecklistItem> {
    RecordList::from_records(items.to_vec())
}
