// SPDX-License-Identifier: AGPL-3.0-or-later

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::{any, Strategy};
use proptest::prop_oneof;
use proptest::strategy::Just;
use proptest_derive::Arbitrary;

use crate::id::EntityId;
use crate::property::{PropertyKind, PropertyType, RecordStatus};

/// Status of a generated property type row.
#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum RowStatus {
    Active,
    Deleted,
}

/// Shape of a generated property type row.
#[derive(Debug, Clone)]
pub struct RowAST {
    pub index: Option<i64>,
    pub status: RowStatus,
}

fn row_strategy() -> impl Strategy<Value = RowAST> {
    // Few distinct indices so ties occur often
    (option::of(-2i64..3), any::<RowStatus>()).prop_map(|(index, status)| RowAST { index, status })
}

/// Lists of property type rows with unique server ids, partly missing or duplicate indices and
/// some rows soft-deleted.
pub fn rows_strategy() -> impl Strategy<Value = Vec<PropertyType>> {
    vec(row_strategy(), 1..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(position, row)| {
                let id = EntityId::from((1000 + position).to_string().as_str());
                let mut property_type = PropertyType::new(id, "Row", PropertyKind::String);
                property_type.index = row.index;
                property_type.status = match row.status {
                    RowStatus::Active => RecordStatus::Active,
                    RowStatus::Deleted => RecordStatus::Deleted,
                };
                property_type
            })
            .collect()
    })
}

/// Ids as they occur on records: server ids, client generated ones and the "new" sentinel.
pub fn id_strategy() -> impl Strategy<Value = EntityId> {
    prop_oneof![
        (1u64..u64::MAX).prop_map(|id| EntityId::from(id.to_string().as_str())),
        any::<u16>().prop_map(|suffix| EntityId::from(format!("@tmp{}", suffix).as_str())),
        "[a-z]{1,8}".prop_map(|prefix| EntityId::temporary_with_prefix(&prefix, "1")),
        Just(EntityId::from("0")),
    ]
}
