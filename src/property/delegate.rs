// SPDX-License-Identifier: AGPL-3.0-or-later

use log::warn;

use crate::config::Configuration;
use crate::property::errors::PropertyError;
use crate::property::{EntityKind, PropertyType, TypeDefault};

/// Input widget a property is edited with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Widget {
    /// Single line text input.
    Text,

    /// Email input.
    Email,

    /// Date picker.
    Date,

    /// Date and time picker.
    DateTime,

    /// Integer input.
    Integer,

    /// Decimal input.
    Float,

    /// Checkbox.
    Checkbox,

    /// Dropdown with the given options.
    Select(Vec<String>),

    /// Pair of decimal inputs, "from" and "to".
    Range,

    /// Pair of decimal inputs, latitude and longitude.
    GpsLocation,

    /// Typeahead searching entities of the given kind.
    EntityTypeahead(EntityKind),

    /// Placeholder for fields this client can't edit.
    Unsupported,
}

/// Everything needed to render the input of one property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDelegate {
    /// Label next to the input.
    pub label: String,

    /// Widget to render.
    pub widget: Widget,

    /// Input is read-only.
    pub disabled: bool,

    /// Input is marked as required.
    pub required: bool,
}

/// Returns the input delegate for a property type.
///
/// Inputs are disabled when values are fixed on schema level or not editable at all.
pub fn delegate_for(property_type: &PropertyType) -> PropertyDelegate {
    let widget = match &property_type.default {
        TypeDefault::String(_) => Widget::Text,
        TypeDefault::Email(_) => Widget::Email,
        TypeDefault::Date(_) => Widget::Date,
        TypeDefault::DatetimeLocal(_) => Widget::DateTime,
        TypeDefault::Enum { options, .. } => Widget::Select(options.clone()),
        TypeDefault::Int(_) => Widget::Integer,
        TypeDefault::Float(_) => Widget::Float,
        TypeDefault::Bool(_) => Widget::Checkbox,
        TypeDefault::Range { .. } => Widget::Range,
        TypeDefault::GpsLocation { .. } => Widget::GpsLocation,
        TypeDefault::Reference(entity_kind) => Widget::EntityTypeahead(*entity_kind),
    };

    PropertyDelegate {
        label: property_type.name.clone(),
        widget,
        disabled: !property_type.is_instance_property || !property_type.is_editable,
        required: property_type.is_mandatory,
    }
}

/// Returns the input delegate for a property type in the JSON shape returned by the API.
///
/// Property types of unknown kinds or with broken defaults don't abort rendering, they are
/// logged and shown as a disabled placeholder instead.
pub fn delegate_for_json(value: serde_json::Value, config: &Configuration) -> PropertyDelegate {
    match PropertyType::from_json(value) {
        Ok(property_type) => delegate_for(&property_type),
        Err(err) => {
            match &err {
                PropertyError::UnknownKind(kind) => {
                    warn!("Render placeholder for property of unknown kind '{}'", kind)
                }
                _ => warn!("Render placeholder for invalid property type: {}", err),
            }

            PropertyDelegate {
                label: config.unsupported_field_label.clone(),
                widget: Widget::Unsupported,
                disabled: true,
                required: false,
            }
        }
    }
}
