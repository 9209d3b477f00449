// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use rstest::fixture;

use crate::id::EntityId;
use crate::property::{EntityKind, PropertyKind, PropertyType, TypeDefault};

/// Editable instance property type of the given kind with an empty default.
#[fixture]
pub fn property_type(#[default(PropertyKind::String)] kind: PropertyKind) -> Arc<PropertyType> {
    Arc::new(PropertyType::new(
        EntityId::from("4294967296"),
        "Test property",
        kind,
    ))
}

/// Schema of a rack-like equipment type. Indices are unsorted and partly missing, the slot at
/// position 2 holds integers.
#[fixture]
pub fn schema() -> Vec<Arc<PropertyType>> {
    let mut vendor = PropertyType::new("17179869184".into(), "Vendor", PropertyKind::String);
    vendor.index = Some(1);
    vendor.default = TypeDefault::String(Some("Acme".into()));

    let mut height = PropertyType::new("17179869185".into(), "Height", PropertyKind::Float);
    height.index = None;

    let mut ports = PropertyType::new("17179869186".into(), "Ports", PropertyKind::Int);
    ports.index = Some(3);
    ports.default = TypeDefault::Int(Some(24));

    let mut uplink = PropertyType::new(
        "17179869187".into(),
        "Uplink",
        EntityKind::Equipment.property_kind(),
    );
    uplink.index = Some(2);

    let mut managed = PropertyType::new("17179869188".into(), "Managed", PropertyKind::Bool);
    managed.index = Some(0);
    managed.is_instance_property = false;

    vec![vendor, height, ports, uplink, managed]
        .into_iter()
        .map(Arc::new)
        .collect()
}
