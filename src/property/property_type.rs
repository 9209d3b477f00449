// SPDX-License-Identifier: AGPL-3.0-or-later

use std::convert::TryFrom;

use serde::Deserialize;

use crate::id::EntityId;
use crate::property::errors::PropertyError;
use crate::property::{EntityKind, PropertyKind, TypeDefault};

/// Whether a record is live or was soft-deleted by the user.
///
/// Soft-deleted records stay in their list so the server learns about the deletion on the next
/// submission, but they are never rendered or reordered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordStatus {
    /// Record is shown and edited.
    Active,

    /// Record was removed by the user and waits for the server to delete it.
    Deleted,
}

impl Default for RecordStatus {
    fn default() -> Self {
        RecordStatus::Active
    }
}

/// One slot of an entity type's schema, for example the "Priority Level" field of a work order
/// type.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyType {
    /// Unique id within the owning schema.
    pub id: EntityId,

    /// Display label.
    pub name: String,

    /// Presentation order, `None` sorts like `0`.
    pub index: Option<i64>,

    /// Optional grouping label.
    pub category: Option<String>,

    /// Default value, which also determines the kind of this property type.
    pub default: TypeDefault,

    /// Values of this type can be changed.
    pub is_editable: bool,

    /// A value has to be given before an entity can be saved.
    pub is_mandatory: bool,

    /// Values are set per entity. When false the value is fixed on schema level and the instance
    /// input is disabled.
    pub is_instance_property: bool,

    /// Soft-deletion status.
    pub status: RecordStatus,
}

impl PropertyType {
    /// Returns a new, editable, non-mandatory instance property type with an empty default.
    pub fn new(id: EntityId, name: &str, kind: PropertyKind) -> Self {
        Self {
            id,
            name: name.to_owned(),
            index: None,
            category: None,
            default: TypeDefault::empty(kind),
            is_editable: true,
            is_mandatory: false,
            is_instance_property: true,
            status: RecordStatus::Active,
        }
    }

    /// Returns the kind of this property type.
    pub fn kind(&self) -> PropertyKind {
        self.default.kind()
    }

    /// Returns true if this slot was soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.status == RecordStatus::Deleted
    }

    /// Decodes a property type from the JSON shape returned by the API.
    pub fn from_json(value: serde_json::Value) -> Result<Self, PropertyError> {
        let raw: RawPropertyType =
            serde_json::from_value(value).map_err(|err| PropertyError::Decode(err.to_string()))?;
        Self::try_from(raw)
    }
}

/// Flat property type record as returned by the API, with one optional slot per value field.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPropertyType {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub index: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub string_value: Option<String>,
    #[serde(default)]
    pub int_value: Option<i64>,
    #[serde(default)]
    pub boolean_value: Option<bool>,
    #[serde(default)]
    pub float_value: Option<f64>,
    #[serde(default)]
    pub latitude_value: Option<f64>,
    #[serde(default)]
    pub longitude_value: Option<f64>,
    #[serde(default)]
    pub range_from_value: Option<f64>,
    #[serde(default)]
    pub range_to_value: Option<f64>,
    #[serde(default)]
    pub is_editable: Option<bool>,
    #[serde(default)]
    pub is_mandatory: Option<bool>,
    #[serde(default)]
    pub is_instance_property: Option<bool>,
    #[serde(default)]
    pub is_deleted: Option<bool>,
}

/// Decodes the option list of an enum property type.
pub(crate) fn decode_enum_options(value: Option<&str>) -> Result<Vec<String>, PropertyError> {
    match value {
        None => Ok(Vec::new()),
        Some(value) if value.trim().is_empty() => Ok(Vec::new()),
        Some(value) => serde_json::from_str::<Vec<String>>(value)
            .map_err(|_| PropertyError::InvalidEnumOptions(value.to_owned())),
    }
}

/// Encodes the option list of an enum property type.
pub(crate) fn encode_enum_options(options: &[String]) -> String {
    serde_json::Value::from(options.to_vec()).to_string()
}

impl TryFrom<RawPropertyType> for PropertyType {
    type Error = PropertyError;

    fn try_from(raw: RawPropertyType) -> Result<Self, Self::Error> {
        let kind: PropertyKind = raw.kind.parse()?;

        // Only the slots matching the kind are read, everything else is ignored
        let default = match kind {
            PropertyKind::String => TypeDefault::String(raw.string_value),
            PropertyKind::Email => TypeDefault::Email(raw.string_value),
            PropertyKind::Date => TypeDefault::Date(raw.string_value),
            PropertyKind::DatetimeLocal => TypeDefault::DatetimeLocal(raw.string_value),
            PropertyKind::Enum => TypeDefault::Enum {
                options: decode_enum_options(raw.string_value.as_deref())?,
                selected: None,
            },
            PropertyKind::Int => TypeDefault::Int(raw.int_value),
            PropertyKind::Float => TypeDefault::Float(raw.float_value),
            PropertyKind::Bool => TypeDefault::Bool(raw.boolean_value),
            PropertyKind::Range => TypeDefault::Range {
                from: raw.range_from_value,
                to: raw.range_to_value,
            },
            PropertyKind::GpsLocation => TypeDefault::GpsLocation {
                latitude: raw.latitude_value,
                longitude: raw.longitude_value,
            },
            PropertyKind::Equipment => TypeDefault::Reference(EntityKind::Equipment),
            PropertyKind::Location => TypeDefault::Reference(EntityKind::Location),
            PropertyKind::Service => TypeDefault::Reference(EntityKind::Service),
        };

        let status = if raw.is_deleted.unwrap_or(false) {
            RecordStatus::Deleted
        } else {
            RecordStatus::Active
        };

        Ok(Self {
            id: raw.id,
            name: raw.name,
            index: raw.index,
            category: raw.category,
            default,
            is_editable: raw.is_editable.unwrap_or(true),
            is_mandatory: raw.is_mandatory.unwrap_or(false),
            is_instance_property: raw.is_instance_property.unwrap_or(true),
            status,
        })
    }
}

impl<'de> Deserialize<'de> for PropertyType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawPropertyType::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}
