// SPDX-License-Identifier: AGPL-3.0-or-later

use log::info;
use serde::Serialize;

use crate::checklist::{
    ChecklistCategory, ChecklistFile, ChecklistItem, ChecklistItemKind, ItemValue,
};

/// File as sent to the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistFileInput {
    /// Id of an already persisted file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Original file name.
    pub file_name: String,

    /// Key of the uploaded file in the object store.
    pub store_key: Option<String>,

    /// File size in bytes.
    pub size_in_bytes: Option<u64>,
}

impl From<&ChecklistFile> for ChecklistFileInput {
    fn from(file: &ChecklistFile) -> Self {
        Self {
            id: file.id.submission_id(),
            file_name: file.file_name.clone(),
            store_key: file.store_key.clone(),
            size_in_bytes: file.size_in_bytes,
        }
    }
}

/// Checklist item as sent to the API. Scan results are reported by the mobile app only and are
/// never sent from here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemInput {
    /// Id of an already persisted item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Question or instruction.
    pub title: String,

    /// Kind tag.
    #[serde(rename = "type")]
    pub kind: ChecklistItemKind,

    /// Position within the checklist.
    pub index: Option<i64>,

    /// Additional explanation.
    pub help_text: Option<String>,

    /// Comma-joined options of enum items.
    pub enum_values: Option<String>,

    /// Comma-joined picked options of enum items.
    pub selected_enum_values: Option<String>,

    /// Selection mode of enum items.
    pub enum_selection_mode: Option<String>,

    /// Answer of string items.
    pub string_value: Option<String>,

    /// State of simple items.
    pub checked: Option<bool>,

    /// Answer of yes / no items.
    pub yes_no_response: Option<String>,

    /// Files of files items.
    pub files: Option<Vec<ChecklistFileInput>>,
}

impl From<&ChecklistItem> for ChecklistItemInput {
    fn from(item: &ChecklistItem) -> Self {
        let mut input = Self {
            id: item.id.submission_id(),
            title: item.title.clone(),
            kind: item.kind(),
            index: item.index,
            help_text: item.help_text.clone(),
            enum_values: None,
            selected_enum_values: None,
            enum_selection_mode: None,
            string_value: None,
            checked: None,
            yes_no_response: None,
            files: None,
        };

        match &item.value {
            ItemValue::Simple { checked } => input.checked = *checked,
            ItemValue::String { value } => input.string_value = value.clone(),
            ItemValue::Enum {
                enum_values,
                selected_enum_values,
                selection_mode,
            } => {
                input.enum_values = enum_values.clone();
                input.selected_enum_values = selected_enum_values.clone();
                input.enum_selection_mode = Some(selection_mode.to_string());
            }
            ItemValue::Files(files) => {
                input.files = files
                    .as_ref()
                    .map(|files| files.iter().map(ChecklistFileInput::from).collect());
            }
            ItemValue::YesNo(response) => {
                input.yes_no_response = response.map(|response| response.to_string());
            }
            ItemValue::CellScan(_) | ItemValue::WifiScan(_) => (),
        }

        input
    }
}

/// Checklist category as sent to the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistCategoryInput {
    /// Id of an already persisted category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Category title.
    pub title: String,

    /// Optional description.
    pub description: Option<String>,

    /// Items of this category.
    pub check_list: Vec<ChecklistItemInput>,
}

impl From<&ChecklistCategory> for ChecklistCategoryInput {
    fn from(category: &ChecklistCategory) -> Self {
        Self {
            id: category.id.submission_id(),
            title: category.title.clone(),
            description: category.description.clone(),
            check_list: category.items.iter().map(ChecklistItemInput::from).collect(),
        }
    }
}

/// Serializes checklist categories for a work order mutation, stripping all temporary ids.
pub fn to_checklist_payload(categories: &[ChecklistCategory]) -> Vec<ChecklistCategoryInput> {
    let payload: Vec<ChecklistCategoryInput> =
        categories.iter().map(ChecklistCategoryInput::from).collect();

    info!(
        "Prepared {} checklist categories with {} items for submission",
        payload.len(),
        payload
            .iter()
            .map(|category| category.check_list.len())
            .sum::<usize>()
    );

    payload
}
