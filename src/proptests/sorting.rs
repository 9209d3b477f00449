// SPDX-License-Identifier: AGPL-3.0-or-later

use proptest::test_runner::Config;
use proptest::{prop_assert, proptest};

use crate::id::EntityId;
use crate::property::sorted_by_display_index;
use crate::proptests::strategies::rows_strategy;

proptest! {
    #![proptest_config(Config::with_cases(200))]
    #[test]
    /// Sorting by display index keeps rows with equal or missing index in their original order.
    fn sort_is_stable(rows in rows_strategy()) {
        let original_position = |id: &EntityId| rows.iter().position(|row| &row.id == id);
        let sorted = sorted_by_display_index(rows.clone());

        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (key_a, key_b) = (a.index.unwrap_or(0), b.index.unwrap_or(0));

            prop_assert!(key_a <= key_b);
            if key_a == key_b {
                prop_assert!(original_position(&a.id) < original_position(&b.id));
            }
        }
    }
}
