// SPDX-License-Identifier: AGPL-3.0-or-later

use std::convert::TryFrom;
use std::sync::Arc;

use serde::Deserialize;

use crate::id::EntityId;
use crate::property::errors::PropertyError;
use crate::property::property_type::RawPropertyType;
use crate::property::{EntityKind, EntityRef, PropertyKind, PropertyType, PropertyValue};

/// Prefix of temporary ids given to properties derived from a property type.
const DERIVED_PROPERTY_ID_PREFIX: &str = "prop";

/// Concrete value attached to an entity, conforming to a property type.
///
/// The value is private so that it can only ever be of the kind of its property type.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    /// Server id, or a temporary id for properties not persisted yet.
    pub id: EntityId,

    /// Schema slot this property fills. Shared with all other properties of the same type.
    pub property_type: Arc<PropertyType>,

    value: PropertyValue,
}

impl Property {
    /// Returns a new property, failing when the value is not of the property type's kind.
    pub fn new(
        id: EntityId,
        property_type: Arc<PropertyType>,
        value: PropertyValue,
    ) -> Result<Self, PropertyError> {
        check_kind(&property_type, &value)?;

        Ok(Self {
            id,
            property_type,
            value,
        })
    }

    /// Returns a fresh property for a schema slot which has no instance yet.
    ///
    /// The id is temporary (`prop@tmp<property type id>`) and the value is copied from the
    /// property type's default, see [`crate::property::TypeDefault::initial_value`].
    pub fn from_type(property_type: &Arc<PropertyType>) -> Self {
        Self {
            id: EntityId::temporary_with_prefix(
                DERIVED_PROPERTY_ID_PREFIX,
                property_type.id.as_str(),
            ),
            property_type: property_type.clone(),
            value: property_type.default.initial_value(),
        }
    }

    /// Returns the kind of this property.
    pub fn kind(&self) -> PropertyKind {
        self.property_type.kind()
    }

    /// Returns the current value.
    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    /// Returns a copy of this property holding the given value.
    pub fn with_value(&self, value: PropertyValue) -> Result<Self, PropertyError> {
        check_kind(&self.property_type, &value)?;

        Ok(Self {
            id: self.id.clone(),
            property_type: self.property_type.clone(),
            value,
        })
    }

    /// Decodes a property with its nested property type from the JSON shape returned by the API.
    pub fn from_json(value: serde_json::Value) -> Result<Self, PropertyError> {
        let raw: RawProperty =
            serde_json::from_value(value).map_err(|err| PropertyError::Decode(err.to_string()))?;
        Self::try_from(raw)
    }
}

fn check_kind(property_type: &PropertyType, value: &PropertyValue) -> Result<(), PropertyError> {
    if property_type.kind() != value.kind() {
        return Err(PropertyError::KindMismatch {
            expected: property_type.kind(),
            found: value.kind(),
        });
    }

    if !has_finite_numbers(value) {
        return Err(PropertyError::NonFiniteNumber(value.kind()));
    }

    Ok(())
}

fn has_finite_numbers(value: &PropertyValue) -> bool {
    let numbers = match value {
        PropertyValue::Float(value) => vec![*value],
        PropertyValue::Range { from, to } => vec![*from, *to],
        PropertyValue::GpsLocation {
            latitude,
            longitude,
        } => vec![*latitude, *longitude],
        _ => return true,
    };

    numbers.into_iter().flatten().all(f64::is_finite)
}

/// Flat property record as returned by the API.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProperty {
    id: EntityId,
    property_type: RawPropertyType,
    #[serde(default)]
    string_value: Option<String>,
    #[serde(default)]
    int_value: Option<i64>,
    #[serde(default)]
    boolean_value: Option<bool>,
    #[serde(default)]
    float_value: Option<f64>,
    #[serde(default)]
    latitude_value: Option<f64>,
    #[serde(default)]
    longitude_value: Option<f64>,
    #[serde(default)]
    range_from_value: Option<f64>,
    #[serde(default)]
    range_to_value: Option<f64>,
    #[serde(default)]
    equipment_value: Option<EntityRef>,
    #[serde(default)]
    location_value: Option<EntityRef>,
    #[serde(default)]
    service_value: Option<EntityRef>,
}

impl TryFrom<RawProperty> for Property {
    type Error = PropertyError;

    fn try_from(raw: RawProperty) -> Result<Self, Self::Error> {
        let property_type = PropertyType::try_from(raw.property_type)?;

        let value = match property_type.kind() {
            PropertyKind::String => PropertyValue::String(raw.string_value),
            PropertyKind::Email => PropertyValue::Email(raw.string_value),
            PropertyKind::Date => PropertyValue::Date(raw.string_value),
            PropertyKind::DatetimeLocal => PropertyValue::DatetimeLocal(raw.string_value),
            PropertyKind::Enum => PropertyValue::Enum(raw.string_value),
            PropertyKind::Int => PropertyValue::Int(raw.int_value),
            PropertyKind::Float => PropertyValue::Float(raw.float_value),
            PropertyKind::Bool => PropertyValue::Bool(raw.boolean_value),
            PropertyKind::Range => PropertyValue::Range {
                from: raw.range_from_value,
                to: raw.range_to_value,
            },
            PropertyKind::GpsLocation => PropertyValue::GpsLocation {
                latitude: raw.latitude_value,
                longitude: raw.longitude_value,
            },
            PropertyKind::Equipment => PropertyValue::Reference {
                kind: EntityKind::Equipment,
                value: raw.equipment_value,
            },
            PropertyKind::Location => PropertyValue::Reference {
                kind: EntityKind::Location,
                value: raw.location_value,
            },
            PropertyKind::Service => PropertyValue::Reference {
                kind: EntityKind::Service,
                value: raw.service_value,
            },
        };

        Property::new(raw.id, Arc::new(property_type), value)
    }
}

impl<'de> Deserialize<'de> for Property {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawProperty::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}
