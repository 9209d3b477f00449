// SPDX-License-Identifier: AGPL-3.0-or-later

use proptest::test_runner::Config;
use proptest::{prop_assert, prop_assert_eq, prop_assume, prop_compose, proptest, strategy::Just};

use crate::editor::{Record, RecordList};
use crate::id::EntityId;
use crate::property::PropertyType;
use crate::proptests::strategies::rows_strategy;

fn live_ids(state: &RecordList<PropertyType>) -> Vec<EntityId> {
    state.live().map(|row| row.id.clone()).collect()
}

prop_compose! {
    /// Strategy for generating rows together with a pair of positions among the live rows.
    fn rows_with_move_strategy()
            (rows in rows_strategy())
            (
                source in 0..rows.iter().filter(|row| !row.is_deleted()).count().max(1),
                destination in 0..rows.iter().filter(|row| !row.is_deleted()).count().max(1),
                rows in Just(rows.clone())
            )
            -> (Vec<PropertyType>, usize, usize) {
        (rows, source, destination)
    }
}

proptest! {
    #![proptest_config(Config::with_cases(200))]
    #[test]
    /// Moving a row and moving it back restores the order of the live rows.
    fn moves_are_reversible((rows, source, destination) in rows_with_move_strategy()) {
        let state = RecordList::from_records(rows);
        prop_assume!(state.live().count() > 0);

        let moved = state.moved(source, destination).unwrap();
        let restored = moved.moved(destination, source).unwrap();

        prop_assert_eq!(live_ids(&restored), live_ids(&state));
    }

    #[test]
    /// Soft-deleted rows keep their index and end up behind all live rows.
    fn moves_leave_deleted_rows_alone((rows, source, destination) in rows_with_move_strategy()) {
        let state = RecordList::from_records(rows);
        prop_assume!(state.live().count() > 0);
        prop_assume!(source != destination);

        let moved = state.moved(source, destination).unwrap();
        prop_assert_eq!(moved.len(), state.len());

        let live = moved.live().count();
        for (position, row) in moved.iter().enumerate() {
            if row.is_deleted() {
                prop_assert!(position >= live);
                let before = state.find(row.id()).unwrap();
                prop_assert_eq!(row.index, before.index);
            } else {
                prop_assert_eq!(row.index, Some(position as i64));
            }
        }
    }
}
