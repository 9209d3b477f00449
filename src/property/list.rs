// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;
use std::sync::Arc;

use log::{debug, info};

use crate::property::payload::PropertyInput;
use crate::property::{Property, PropertyType};

/// Records which are presented in the order of an optional display index.
pub trait DisplayIndex {
    /// Returns the display index, `None` if it was never set.
    fn display_index(&self) -> Option<i64>;
}

impl DisplayIndex for PropertyType {
    fn display_index(&self) -> Option<i64> {
        self.index
    }
}

impl DisplayIndex for Property {
    fn display_index(&self) -> Option<i64> {
        self.property_type.index
    }
}

impl<T: DisplayIndex> DisplayIndex for Arc<T> {
    fn display_index(&self) -> Option<i64> {
        self.as_ref().display_index()
    }
}

/// Compares two records by display index, treating a missing index as `0`.
///
/// Use with a stable sort (like `slice::sort_by`) so records with equal or missing indices keep
/// their original order.
pub fn sort_by_display_index<T: DisplayIndex>(a: &T, b: &T) -> Ordering {
    a.display_index()
        .unwrap_or(0)
        .cmp(&b.display_index().unwrap_or(0))
}

/// Returns the records stably sorted by display index.
pub fn sorted_by_display_index<T: DisplayIndex>(mut records: Vec<T>) -> Vec<T> {
    records.sort_by(sort_by_display_index);
    records
}

/// Returns all schema slots which are not represented by any of the given instances yet.
pub fn missing_defaults_for<'a>(
    instances: &[Property],
    schema: &'a [Arc<PropertyType>],
) -> Vec<&'a Arc<PropertyType>> {
    schema
        .iter()
        .filter(|slot| {
            !instances
                .iter()
                .any(|instance| instance.property_type.id == slot.id)
        })
        .collect()
}

/// Returns the list of properties to render for an entity.
///
/// These are the fetched instances plus a fresh default instance for every schema slot without an
/// instance, sorted by display index. Instances of soft-deleted slots are left out and no default
/// is derived for them. Defaults are not persisted until the list gets submitted.
pub fn effective_properties(
    instances: &[Property],
    schema: &[Arc<PropertyType>],
) -> Vec<Property> {
    let mut properties: Vec<Property> = instances
        .iter()
        .filter(|instance| !instance.property_type.is_deleted())
        .cloned()
        .collect();

    let defaults: Vec<Property> = missing_defaults_for(instances, schema)
        .into_iter()
        .filter(|slot| !slot.is_deleted())
        .map(Property::from_type)
        .collect();

    debug!(
        "Derived {} default properties next to {} existing ones",
        defaults.len(),
        properties.len()
    );

    properties.extend(defaults);
    sorted_by_display_index(properties)
}

/// Serializes properties into the payload of a create or edit mutation.
///
/// Property types get flattened into their id, temporary ids are dropped and referenced
/// entities are flattened into their id, see [`PropertyInput`].
pub fn to_submission_payload(instances: &[Property]) -> Vec<PropertyInput> {
    let payload: Vec<PropertyInput> = instances.iter().map(PropertyInput::from).collect();

    info!(
        "Prepared {} properties for submission, {} of them new",
        payload.len(),
        payload.iter().filter(|input| input.id.is_none()).count()
    );

    payload
}
