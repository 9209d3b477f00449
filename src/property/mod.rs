// SPDX-License-Identifier: AGPL-3.0-or-later

//! Dynamically typed properties of inventory entities.
//!
//! A [`PropertyType`] is one slot of an entity type's schema, a [`Property`] is the value an
//! entity holds for such a slot. Both carry their kind-specific data as tagged unions
//! ([`TypeDefault`] and [`PropertyValue`]), so a value can never be of another kind than its
//! property type.
mod delegate;
mod display;
mod errors;
mod input;
mod instance;
mod kind;
mod list;
mod payload;
mod property_type;
mod value;

pub use delegate::{delegate_for, delegate_for_json, PropertyDelegate, Widget};
pub use display::{
    default_value_for, initial_property_from_type, value_of_instance, value_of_type, DisplayValue,
};
pub use errors::{PropertyError, ValidationError};
pub use input::{parse_float_input, parse_int_input};
pub use instance::Property;
pub use kind::{EntityKind, PropertyKind};
pub use list::{
    effective_properties, missing_defaults_for, sort_by_display_index, sorted_by_display_index,
    to_submission_payload, DisplayIndex,
};
pub use payload::{PropertyInput, PropertyTypeInput};
pub use property_type::{PropertyType, RecordStatus};
pub use value::{EntityRef, PropertyValue, TypeDefault};
