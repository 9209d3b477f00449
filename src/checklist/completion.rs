// SPDX-License-Identifier: AGPL-3.0-or-later

use log::trace;

use crate::checklist::{ChecklistCategory, ChecklistItem, ItemValue};

/// Returns true if the item was filled in.
///
/// Enum items are checked against the picked options (`selected_enum_values`), not the option
/// list. Scan items count as done as soon as any scan result was reported, even an empty one.
pub fn is_done(item: &ChecklistItem) -> bool {
    let done = match &item.value {
        ItemValue::Simple { checked } => *checked == Some(true),
        ItemValue::String { value } => is_filled(value),
        ItemValue::Enum {
            selected_enum_values,
            ..
        } => is_filled(selected_enum_values),
        ItemValue::Files(files) => files.as_ref().map_or(false, |files| !files.is_empty()),
        ItemValue::YesNo(response) => response.is_some(),
        ItemValue::CellScan(scans) => scans.is_some(),
        ItemValue::WifiScan(scans) => scans.is_some(),
    };

    trace!("Checklist item {} done: {}", item.id, done);
    done
}

fn is_filled(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map_or(false, |value| !value.trim().is_empty())
}

/// Splits comma-joined enum options into a list. Tokens are trimmed and blank tokens are dropped.
///
/// Options containing commas can not be represented in this encoding. Because of the trimming,
/// joining the result with [`enum_array_to_string`] yields the normalised string (`"a, b"`
/// becomes `"a,b"`), not necessarily the input.
pub fn enum_string_to_array(value: Option<&str>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(value) => value
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect(),
    }
}

/// Joins enum options into their comma-joined representation.
pub fn enum_array_to_string(values: &[String]) -> String {
    values.join(",")
}

/// Number of done items out of all items of a checklist or category.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CompletionSummary {
    /// Items which are done.
    pub done: usize,

    /// All items.
    pub total: usize,
}

impl CompletionSummary {
    /// Returns the summary of the given items.
    pub fn of(items: &[ChecklistItem]) -> Self {
        Self {
            done: items.iter().filter(|item| is_done(item)).count(),
            total: items.len(),
        }
    }

    /// Returns true if every item is done.
    pub fn is_complete(&self) -> bool {
        self.done == self.total
    }
}

/// Returns the completion summary of a category.
pub fn completion_summary(category: &ChecklistCategory) -> CompletionSummary {
    CompletionSummary::of(&category.items)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{
        completion_summary, enum_array_to_string, enum_string_to_array, is_done,
        CompletionSummary,
    };
    use crate::checklist::{
        ChecklistCategory, ChecklistFile, ChecklistItem, EnumSelectionMode, ItemValue,
        YesNoResponse,
    };
    use crate::test_utils::checklist_item;

    #[rstest]
    #[case(ItemValue::String { value: Some("  ".into()) }, false)]
    #[case(ItemValue::String { value: Some("x".into()) }, true)]
    #[case(ItemValue::String { value: None }, false)]
    #[case(ItemValue::Simple { checked: Some(false) }, false)]
    #[case(ItemValue::Simple { checked: None }, false)]
    #[case(ItemValue::Simple { checked: Some(true) }, true)]
    #[case(ItemValue::YesNo(Some(YesNoResponse::No)), true)]
    #[case(ItemValue::YesNo(Some(YesNoResponse::Yes)), true)]
    #[case(ItemValue::YesNo(None), false)]
    #[case(ItemValue::Files(Some(vec![])), false)]
    #[case(ItemValue::Files(None), false)]
    #[case(ItemValue::CellScan(Some(vec![])), true)]
    #[case(ItemValue::CellScan(None), false)]
    #[case(ItemValue::WifiScan(Some(vec![])), true)]
    fn completion_per_kind(#[case] value: ItemValue, #[case] expected: bool) {
        assert_eq!(is_done(&checklist_item("1", value)), expected);
    }

    #[test]
    fn files_with_entries_are_done() {
        let file = ChecklistFile {
            id: "9".into(),
            file_name: "rack.jpg".into(),
            store_key: None,
            size_in_bytes: Some(1024),
        };

        assert!(is_done(&checklist_item("1", ItemValue::Files(Some(vec![file])))));
    }

    #[rstest]
    #[case(Some("north"), true)]
    #[case(Some(" "), false)]
    #[case(None, false)]
    fn enums_check_selected_options(#[case] selected: Option<&str>, #[case] expected: bool) {
        let item = checklist_item(
            "1",
            ItemValue::Enum {
                enum_values: Some("north,south".into()),
                selected_enum_values: selected.map(str::to_owned),
                selection_mode: EnumSelectionMode::Single,
            },
        );

        assert_eq!(is_done(&item), expected);
    }

    #[rstest]
    #[case(Some("a,b,c"), vec!["a", "b", "c"])]
    #[case(Some("a, b ,c"), vec!["a", "b", "c"])]
    #[case(Some(""), vec![])]
    #[case(None, vec![])]
    fn splits_enum_strings(#[case] value: Option<&str>, #[case] expected: Vec<&str>) {
        assert_eq!(enum_string_to_array(value), expected);
    }

    #[test]
    fn joins_enum_arrays() {
        let values = enum_string_to_array(Some("a,b,c"));
        assert_eq!(enum_array_to_string(&values), "a,b,c");

        let values = enum_string_to_array(Some(" a, b,,"));
        assert_eq!(enum_array_to_string(&values), "a,b");
    }

    #[test]
    fn summarises_categories() {
        let mut category = ChecklistCategory::new();
        category.items = vec![
            checklist_item("1", ItemValue::Simple { checked: Some(true) }),
            checklist_item("2", ItemValue::Simple { checked: None }),
            checklist_item("3", ItemValue::YesNo(Some(YesNoResponse::Yes))),
        ];

        let summary = completion_summary(&category);
        assert_eq!(summary, CompletionSummary { done: 2, total: 3 });
        assert!(!summary.is_complete());
        assert!(CompletionSummary::of(&Vec::<ChecklistItem>::new()).is_complete());
    }
}
