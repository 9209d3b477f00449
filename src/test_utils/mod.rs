// SPDX-License-Identifier: AGPL-3.0-or-later

mod fixtures;
mod helpers;

pub use fixtures::{property_type, schema};
pub use helpers::{checklist_item, init_logger, property_type_with_default, with_index};
