// SPDX-License-Identifier: AGPL-3.0-or-later

//! Derivation of displayable values from property types and property instances.
//!
//! Property types and instances are handled by two separate functions, [`value_of_type`] and
//! [`value_of_instance`], callers always know which of both they hold.
use std::fmt::Display;
use std::sync::Arc;

use chrono::NaiveDateTime;
use log::trace;

use crate::config::Configuration;
use crate::property::{Property, PropertyType, PropertyValue, TypeDefault};

/// Formats accepted for stored `datetime_local` values.
const DATETIME_LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Value of a property or property type as shown in a form input or a table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayValue {
    /// Nothing to show.
    Empty,

    /// Text, also used for booleans, ranges, coordinates and references.
    Text(String),

    /// Integer number.
    Integer(i64),

    /// Decimal number.
    Float(f64),
}

impl DisplayValue {
    /// Returns true if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayValue::Empty)
    }
}

impl Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayValue::Empty => Ok(()),
            DisplayValue::Text(value) => write!(f, "{}", value),
            DisplayValue::Integer(value) => write!(f, "{}", value),
            DisplayValue::Float(value) => write!(f, "{}", value),
        }
    }
}

fn text(value: &Option<String>) -> DisplayValue {
    match value {
        Some(value) => DisplayValue::Text(value.clone()),
        None => DisplayValue::Empty,
    }
}

fn boolean(value: Option<bool>) -> DisplayValue {
    match value {
        Some(value) => DisplayValue::Text(value.to_string()),
        None => DisplayValue::Empty,
    }
}

fn integer(value: Option<i64>) -> DisplayValue {
    value.map_or(DisplayValue::Empty, DisplayValue::Integer)
}

fn float(value: Option<f64>) -> DisplayValue {
    value.map_or(DisplayValue::Empty, DisplayValue::Float)
}

/// Ranges only render when both ends are set.
fn range(from: Option<f64>, to: Option<f64>) -> DisplayValue {
    match (from, to) {
        (Some(from), Some(to)) => DisplayValue::Text(format!("{} - {}", from, to)),
        _ => DisplayValue::Empty,
    }
}

/// Coordinates only render when both are set.
fn location(latitude: Option<f64>, longitude: Option<f64>) -> DisplayValue {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => {
            DisplayValue::Text(format!("{}, {}", latitude, longitude))
        }
        _ => DisplayValue::Empty,
    }
}

/// Formats a stored `datetime_local` string, falling back to the raw string when it can't be
/// parsed.
fn datetime_local(value: &Option<String>, config: &Configuration) -> DisplayValue {
    let value = match value {
        Some(value) => value,
        None => return DisplayValue::Empty,
    };

    let parsed = DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok());

    match parsed {
        Some(datetime) => {
            DisplayValue::Text(datetime.format(&config.datetime_format).to_string())
        }
        None => {
            trace!("Could not parse datetime value '{}', show it as is", value);
            DisplayValue::Text(value.clone())
        }
    }
}

/// Returns the value a new property of this type defaults to, as shown in its input.
///
/// Enums show the preselected option (not the option list), reference kinds never have a default
/// and show nothing.
pub fn default_value_for(property_type: &PropertyType) -> DisplayValue {
    let value = match &property_type.default {
        TypeDefault::String(value)
        | TypeDefault::Email(value)
        | TypeDefault::Date(value)
        | TypeDefault::DatetimeLocal(value) => text(value),
        TypeDefault::Enum { selected, .. } => text(selected),
        TypeDefault::Int(value) => integer(*value),
        TypeDefault::Float(value) => float(*value),
        TypeDefault::Bool(value) => boolean(*value),
        TypeDefault::Range { from, to } => range(*from, *to),
        TypeDefault::GpsLocation {
            latitude,
            longitude,
        } => location(*latitude, *longitude),
        TypeDefault::Reference(_) => DisplayValue::Empty,
    };

    trace!("Default value of {} is '{}'", property_type.id, value);
    value
}

/// Returns a new property instance for a schema slot, see [`Property::from_type`].
pub fn initial_property_from_type(property_type: &Arc<PropertyType>) -> Property {
    Property::from_type(property_type)
}

/// Returns the displayable value of a property instance.
///
/// References show the name of the referenced entity, `datetime_local` values are formatted with
/// the configured format.
pub fn value_of_instance(property: &Property, config: &Configuration) -> DisplayValue {
    match property.value() {
        PropertyValue::String(value)
        | PropertyValue::Email(value)
        | PropertyValue::Date(value)
        | PropertyValue::Enum(value) => text(value),
        PropertyValue::DatetimeLocal(value) => datetime_local(value, config),
        PropertyValue::Int(value) => integer(*value),
        PropertyValue::Float(value) => float(*value),
        PropertyValue::Bool(value) => boolean(*value),
        PropertyValue::Range { from, to } => range(*from, *to),
        PropertyValue::GpsLocation {
            latitude,
            longitude,
        } => location(*latitude, *longitude),
        PropertyValue::Reference { value, .. } => match value {
            Some(entity) => DisplayValue::Text(entity.name.clone()),
            None => DisplayValue::Empty,
        },
    }
}

/// Returns the displayable schema level value of a property type.
///
/// Returns `None` for reference kinds, which only carry values on property instances.
pub fn value_of_type(property_type: &PropertyType) -> Option<DisplayValue> {
    if property_type.kind().is_reference() {
        return None;
    }

    Some(default_value_for(property_type))
}
