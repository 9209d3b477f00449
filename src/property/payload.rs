// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::Serialize;

use crate::property::property_type::encode_enum_options;
use crate::property::{
    EntityKind, Property, PropertyKind, PropertyType, PropertyValue, TypeDefault,
};

/// Property as sent to the API when creating or editing an entity.
///
/// Properties with a temporary or sentinel id are sent without id so the server creates them.
/// Referenced entities are sent as flat ids, one field per entity kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInput {
    /// Id of an already persisted property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Id of the property type.
    #[serde(rename = "propertyTypeID")]
    pub property_type_id: String,

    /// Value of string, email, date, datetime and enum properties.
    pub string_value: Option<String>,

    /// Value of int properties.
    pub int_value: Option<i64>,

    /// Value of bool properties.
    pub boolean_value: Option<bool>,

    /// Value of float properties.
    pub float_value: Option<f64>,

    /// Latitude of gps location properties.
    pub latitude_value: Option<f64>,

    /// Longitude of gps location properties.
    pub longitude_value: Option<f64>,

    /// Lower end of range properties.
    pub range_from_value: Option<f64>,

    /// Upper end of range properties.
    pub range_to_value: Option<f64>,

    /// Id of the referenced equipment.
    #[serde(rename = "equipmentIDValue")]
    pub equipment_id_value: Option<String>,

    /// Id of the referenced location.
    #[serde(rename = "locationIDValue")]
    pub location_id_value: Option<String>,

    /// Id of the referenced service.
    #[serde(rename = "serviceIDValue")]
    pub service_id_value: Option<String>,

    /// Copied from the property type.
    pub is_editable: bool,

    /// Copied from the property type.
    pub is_instance_property: bool,
}

impl PropertyInput {
    fn empty(property: &Property) -> Self {
        Self {
            id: property.id.submission_id(),
            property_type_id: property.property_type.id.to_string(),
            string_value: None,
            int_value: None,
            boolean_value: None,
            float_value: None,
            latitude_value: None,
            longitude_value: None,
            range_from_value: None,
            range_to_value: None,
            equipment_id_value: None,
            location_id_value: None,
            service_id_value: None,
            is_editable: property.property_type.is_editable,
            is_instance_property: property.property_type.is_instance_property,
        }
    }
}

impl From<&Property> for PropertyInput {
    fn from(property: &Property) -> Self {
        let mut input = Self::empty(property);

        match property.value() {
            PropertyValue::String(value)
            | PropertyValue::Email(value)
            | PropertyValue::Date(value)
            | PropertyValue::DatetimeLocal(value)
            | PropertyValue::Enum(value) => input.string_value = value.clone(),
            PropertyValue::Int(value) => input.int_value = *value,
            PropertyValue::Float(value) => input.float_value = *value,
            PropertyValue::Bool(value) => input.boolean_value = *value,
            PropertyValue::Range { from, to } => {
                input.range_from_value = *from;
                input.range_to_value = *to;
            }
            PropertyValue::GpsLocation {
                latitude,
                longitude,
            } => {
                input.latitude_value = *latitude;
                input.longitude_value = *longitude;
            }
            PropertyValue::Reference { kind, value } => {
                let id = value.as_ref().map(|entity| entity.id.to_string());

                match kind {
                    EntityKind::Equipment => input.equipment_id_value = id,
                    EntityKind::Location => input.location_id_value = id,
                    EntityKind::Service => input.service_id_value = id,
                }
            }
        }

        input
    }
}

/// Property type as sent to the API when saving the schema of an entity type.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTypeInput {
    /// Id of an already persisted property type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display label.
    pub name: String,

    /// Kind tag.
    #[serde(rename = "type")]
    pub kind: PropertyKind,

    /// Presentation order.
    pub index: Option<i64>,

    /// Grouping label.
    pub category: Option<String>,

    /// Default of string-like kinds, or the JSON encoded option list of enums.
    pub string_value: Option<String>,

    /// Default of int property types.
    pub int_value: Option<i64>,

    /// Default of bool property types.
    pub boolean_value: Option<bool>,

    /// Default of float property types.
    pub float_value: Option<f64>,

    /// Default latitude of gps location property types.
    pub latitude_value: Option<f64>,

    /// Default longitude of gps location property types.
    pub longitude_value: Option<f64>,

    /// Default lower end of range property types.
    pub range_from_value: Option<f64>,

    /// Default upper end of range property types.
    pub range_to_value: Option<f64>,

    /// Values can be changed.
    pub is_editable: bool,

    /// Values are set per instance.
    pub is_instance_property: bool,

    /// A value is required.
    pub is_mandatory: bool,

    /// Property type should be deleted on the server.
    pub is_deleted: bool,
}

impl From<&PropertyType> for PropertyTypeInput {
    fn from(property_type: &PropertyType) -> Self {
        let mut input = Self {
            id: property_type.id.submission_id(),
            name: property_type.name.clone(),
            kind: property_type.kind(),
            index: property_type.index,
            category: property_type.category.clone(),
            string_value: None,
            int_value: None,
            boolean_value: None,
            float_value: None,
            latitude_value: None,
            longitude_value: None,
            range_from_value: None,
            range_to_value: None,
            is_editable: property_type.is_editable,
            is_instance_property: property_type.is_instance_property,
            is_mandatory: property_type.is_mandatory,
            is_deleted: property_type.is_deleted(),
        };

        match &property_type.default {
            TypeDefault::String(value)
            | TypeDefault::Email(value)
            | TypeDefault::Date(value)
            | TypeDefault::DatetimeLocal(value) => input.string_value = value.clone(),
            TypeDefault::Enum { options, .. } => {
                input.string_value = Some(encode_enum_options(options))
            }
            TypeDefault::Int(value) => input.int_value = *value,
            TypeDefault::Float(value) => input.float_value = *value,
            TypeDefault::Bool(value) => input.boolean_value = *value,
            TypeDefault::Range { from, to } => {
                input.range_from_value = *from;
                input.range_to_value = *to;
            }
            TypeDefault::GpsLocation {
                latitude,
                longitude,
            } => {
                input.latitude_value = *latitude;
                input.longitude_value = *longitude;
            }
            TypeDefault::Reference(_) => (),
        }

        input
    }
}
