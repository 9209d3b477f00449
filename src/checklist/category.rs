// SPDX-License-Identifier: AGPL-3.0-or-later

use log::warn;
use serde::{Deserialize, Deserializer};

use crate::checklist::{ChecklistError, ChecklistItem};
use crate::id::EntityId;

/// Named group of checklist items. The position of an item in `items` is its display order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistCategory {
    /// Server id, or a temporary id for categories added during this session.
    pub id: EntityId,

    /// Category title.
    pub title: String,

    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,

    /// Items of this category. Items of kinds unknown to this client are skipped when decoding.
    #[serde(rename = "checkList", default, deserialize_with = "deserialize_items")]
    pub items: Vec<ChecklistItem>,
}

fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<ChecklistItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut items = Vec::with_capacity(raw.len());

    for value in raw {
        match ChecklistItem::from_json(value) {
            Ok(item) => items.push(item),
            Err(ChecklistError::UnknownKind(kind)) => {
                warn!("Skip checklist item of unknown kind '{}'", kind)
            }
            Err(err) => return Err(serde::de::Error::custom(err)),
        }
    }

    Ok(items)
}

impl ChecklistCategory {
    /// Returns a new, empty category with a temporary id.
    pub fn new() -> Self {
        Self {
            id: EntityId::temporary(),
            title: String::new(),
            description: None,
            items: Vec::new(),
        }
    }
}

impl Default for ChecklistCategory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ChecklistCategory;
    use crate::checklist::ChecklistItemKind;
    use crate::test_utils::init_logger;

    #[test]
    fn decodes_category_with_items() {
        let category: ChecklistCategory = serde_json::from_value(json!({
            "id": "7",
            "title": "Site survey",
            "checkList": [
                { "id": "1", "type": "simple", "title": "Power on", "checked": true },
                { "id": "2", "type": "string", "title": "Serial number" },
            ],
        }))
        .unwrap();

        assert_eq!(category.items.len(), 2);
        assert_eq!(category.items[1].kind(), ChecklistItemKind::String);
        assert_eq!(category.description, None);
    }

    #[test]
    fn skips_items_of_unknown_kinds() {
        init_logger();

        let category: ChecklistCategory = serde_json::from_value(json!({
            "id": "7",
            "title": "Site survey",
            "checkList": [
                { "id": "1", "type": "simple", "title": "Power on" },
                { "id": "2", "type": "barcode", "title": "Scan asset tag" },
                { "id": "3", "type": "yes_no", "title": "Cabinet locked?" },
            ],
        }))
        .unwrap();

        let ids: Vec<&str> = category.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn rejects_malformed_items_of_known_kinds() {
        let result = serde_json::from_value::<ChecklistCategory>(json!({
            "id": "7",
            "title": "Site survey",
            "checkList": [{ "id": "1", "type": "yes_no", "yesNoResponse": "MAYBE" }],
        }));

        assert!(result.is_err());
    }

    #[test]
    fn missing_items_decode_as_empty() {
        let category: ChecklistCategory =
            serde_json::from_value(json!({ "id": "7", "title": "Empty", "checkList": null }))
                .unwrap();

        assert!(category.items.is_empty());
    }
}
