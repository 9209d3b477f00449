// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

use crate::id::EntityId;
use crate::property::{EntityKind, PropertyKind};

/// Reference to another entity, as returned by the API next to a property value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Id of the referenced entity.
    pub id: EntityId,

    /// Display name of the referenced entity.
    pub name: String,
}

impl EntityRef {
    /// Returns a new entity reference.
    pub fn new(id: EntityId, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
        }
    }
}

/// Default value of a property type, one variant per kind.
///
/// The variant determines the kind of the property type it belongs to, so a property type can
/// never carry a default of another kind.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefault {
    /// Default text.
    String(Option<String>),

    /// Default email address.
    Email(Option<String>),

    /// Default date.
    Date(Option<String>),

    /// Default local date and time.
    DatetimeLocal(Option<String>),

    /// Option list of an enum and an optional preselected option.
    ///
    /// Only the option list is known to the API, the preselected option exists while a schema is
    /// edited on the client.
    Enum {
        /// Options a value can be picked from.
        options: Vec<String>,

        /// Option a new value should default to.
        selected: Option<String>,
    },

    /// Default integer.
    Int(Option<i64>),

    /// Default decimal number.
    Float(Option<f64>),

    /// Default flag.
    Bool(Option<bool>),

    /// Default range.
    Range {
        /// Lower end.
        from: Option<f64>,

        /// Upper end.
        to: Option<f64>,
    },

    /// Default coordinates.
    GpsLocation {
        /// Latitude in degrees.
        latitude: Option<f64>,

        /// Longitude in degrees.
        longitude: Option<f64>,
    },

    /// Reference kinds never have a schema level default.
    Reference(EntityKind),
}

impl TypeDefault {
    /// Returns an unset default for the given kind.
    pub fn empty(kind: PropertyKind) -> Self {
        match kind {
            PropertyKind::String => TypeDefault::String(None),
            PropertyKind::Email => TypeDefault::Email(None),
            PropertyKind::Date => TypeDefault::Date(None),
            PropertyKind::DatetimeLocal => TypeDefault::DatetimeLocal(None),
            PropertyKind::Enum => TypeDefault::Enum {
                options: Vec::new(),
                selected: None,
            },
            PropertyKind::Int => TypeDefault::Int(None),
            PropertyKind::Float => TypeDefault::Float(None),
            PropertyKind::Bool => TypeDefault::Bool(None),
            PropertyKind::Range => TypeDefault::Range {
                from: None,
                to: None,
            },
            PropertyKind::GpsLocation => TypeDefault::GpsLocation {
                latitude: None,
                longitude: None,
            },
            PropertyKind::Equipment => TypeDefault::Reference(EntityKind::Equipment),
            PropertyKind::Location => TypeDefault::Reference(EntityKind::Location),
            PropertyKind::Service => TypeDefault::Reference(EntityKind::Service),
        }
    }

    /// Returns the kind this default belongs to.
    pub fn kind(&self) -> PropertyKind {
        match self {
            TypeDefault::String(_) => PropertyKind::String,
            TypeDefault::Email(_) => PropertyKind::Email,
            TypeDefault::Date(_) => PropertyKind::Date,
            TypeDefault::DatetimeLocal(_) => PropertyKind::DatetimeLocal,
            TypeDefault::Enum { .. } => PropertyKind::Enum,
            TypeDefault::Int(_) => PropertyKind::Int,
            TypeDefault::Float(_) => PropertyKind::Float,
            TypeDefault::Bool(_) => PropertyKind::Bool,
            TypeDefault::Range { .. } => PropertyKind::Range,
            TypeDefault::GpsLocation { .. } => PropertyKind::GpsLocation,
            TypeDefault::Reference(entity_kind) => entity_kind.property_kind(),
        }
    }

    /// Returns the value a new property of this type starts with.
    ///
    /// Scalars are copied verbatim. Enum values start blank as the default holds the option list
    /// and not a picked value, references start unset until the user picks an entity.
    pub fn initial_value(&self) -> PropertyValue {
        match self {
            TypeDefault::String(value) => PropertyValue::String(value.clone()),
            TypeDefault::Email(value) => PropertyValue::Email(value.clone()),
            TypeDefault::Date(value) => PropertyValue::Date(value.clone()),
            TypeDefault::DatetimeLocal(value) => PropertyValue::DatetimeLocal(value.clone()),
            TypeDefault::Enum { .. } => PropertyValue::Enum(None),
            TypeDefault::Int(value) => PropertyValue::Int(*value),
            TypeDefault::Float(value) => PropertyValue::Float(*value),
            TypeDefault::Bool(value) => PropertyValue::Bool(*value),
            TypeDefault::Range { from, to } => PropertyValue::Range {
                from: *from,
                to: *to,
            },
            TypeDefault::GpsLocation {
                latitude,
                longitude,
            } => PropertyValue::GpsLocation {
                latitude: *latitude,
                longitude: *longitude,
            },
            TypeDefault::Reference(entity_kind) => PropertyValue::Reference {
                kind: *entity_kind,
                value: None,
            },
        }
    }
}

/// Value of a property instance, one variant per kind.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Text.
    String(Option<String>),

    /// Email address.
    Email(Option<String>),

    /// Date.
    Date(Option<String>),

    /// Local date and time in `YYYY-MM-DDTHH:MM` format.
    DatetimeLocal(Option<String>),

    /// Picked option of an enum.
    Enum(Option<String>),

    /// Integer.
    Int(Option<i64>),

    /// Decimal number.
    Float(Option<f64>),

    /// Flag.
    Bool(Option<bool>),

    /// Range between two decimal numbers.
    Range {
        /// Lower end.
        from: Option<f64>,

        /// Upper end.
        to: Option<f64>,
    },

    /// Coordinates.
    GpsLocation {
        /// Latitude in degrees.
        latitude: Option<f64>,

        /// Longitude in degrees.
        longitude: Option<f64>,
    },

    /// Reference to another entity.
    Reference {
        /// Kind of the referenced entity.
        kind: EntityKind,

        /// Referenced entity, if one was picked.
        value: Option<EntityRef>,
    },
}

impl PropertyValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::String(_) => PropertyKind::String,
            PropertyValue::Email(_) => PropertyKind::Email,
            PropertyValue::Date(_) => PropertyKind::Date,
            PropertyValue::DatetimeLocal(_) => PropertyKind::DatetimeLocal,
            PropertyValue::Enum(_) => PropertyKind::Enum,
            PropertyValue::Int(_) => PropertyKind::Int,
            PropertyValue::Float(_) => PropertyKind::Float,
            PropertyValue::Bool(_) => PropertyKind::Bool,
            PropertyValue::Range { .. } => PropertyKind::Range,
            PropertyValue::GpsLocation { .. } => PropertyKind::GpsLocation,
            PropertyValue::Reference { kind, .. } => kind.property_kind(),
        }
    }

    /// Returns true if no part of the value is set. Blank strings count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            PropertyValue::String(value)
            | PropertyValue::Email(value)
            | PropertyValue::Date(value)
            | PropertyValue::DatetimeLocal(value)
            | PropertyValue::Enum(value) => value
                .as_deref()
                .map(|value| value.trim().is_empty())
                .unwrap_or(true),
            PropertyValue::Int(value) => value.is_none(),
            PropertyValue::Float(value) => value.is_none(),
            PropertyValue::Bool(value) => value.is_none(),
            PropertyValue::Range { from, to } => from.is_none() && to.is_none(),
            PropertyValue::GpsLocation {
                latitude,
                longitude,
            } => latitude.is_none() && longitude.is_none(),
            PropertyValue::Reference { value, .. } => value.is_none(),
        }
    }

    /// Returns the referenced entity for reference values.
    pub fn entity_ref(&self) -> Option<&EntityRef> {
        match self {
            PropertyValue::Reference { value, .. } => value.as_ref(),
            _ => None,
        }
    }
}
