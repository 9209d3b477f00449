// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use crate::checklist::{ChecklistItem, ItemValue};
use crate::property::{PropertyKind, PropertyType, TypeDefault};

/// Property type carrying the given default, which also decides its kind.
pub fn property_type_with_default(default: TypeDefault) -> Arc<PropertyType> {
    let mut property_type = PropertyType::new("4294967297".into(), "Test property", default.kind());
    property_type.default = default;
    Arc::new(property_type)
}

/// String property type with the given id and display index.
pub fn with_index(id: &str, index: Option<i64>) -> PropertyType {
    let mut property_type = PropertyType::new(id.into(), id, PropertyKind::String);
    property_type.index = index;
    property_type
}

/// Checklist item with the given id and value.
pub fn checklist_item(id: &str, value: ItemValue) -> ChecklistItem {
    ChecklistItem {
        id: id.into(),
        index: None,
        title: format!("Item {}", id),
        help_text: None,
        value,
    }
}

/// Routes `log` output through the test harness. Run with `RUST_LOG=debug` to see it.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
