// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::property::errors::PropertyError;

/// Kind tag of a property type, defining which value a property of that type carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// Free-form text.
    String,

    /// Integer number.
    Int,

    /// Decimal number.
    Float,

    /// Boolean flag.
    Bool,

    /// Calendar date, stored as string.
    Date,

    /// Email address, stored as string.
    Email,

    /// One option out of a list defined on the property type.
    Enum,

    /// Pair of decimal numbers.
    Range,

    /// Latitude and longitude pair.
    GpsLocation,

    /// Reference to an equipment.
    Equipment,

    /// Reference to a location.
    Location,

    /// Reference to a service.
    Service,

    /// Local date and time without timezone, stored as string.
    DatetimeLocal,
}

impl PropertyKind {
    /// All kinds known to this client.
    pub const ALL: [PropertyKind; 13] = [
        PropertyKind::String,
        PropertyKind::Int,
        PropertyKind::Float,
        PropertyKind::Bool,
        PropertyKind::Date,
        PropertyKind::Email,
        PropertyKind::Enum,
        PropertyKind::Range,
        PropertyKind::GpsLocation,
        PropertyKind::Equipment,
        PropertyKind::Location,
        PropertyKind::Service,
        PropertyKind::DatetimeLocal,
    ];

    /// Returns the tag as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::String => "string",
            PropertyKind::Int => "int",
            PropertyKind::Float => "float",
            PropertyKind::Bool => "bool",
            PropertyKind::Date => "date",
            PropertyKind::Email => "email",
            PropertyKind::Enum => "enum",
            PropertyKind::Range => "range",
            PropertyKind::GpsLocation => "gps_location",
            PropertyKind::Equipment => "equipment",
            PropertyKind::Location => "location",
            PropertyKind::Service => "service",
            PropertyKind::DatetimeLocal => "datetime_local",
        }
    }

    /// Returns the referenced entity kind if values of this kind point at another entity.
    pub fn entity_kind(&self) -> Option<EntityKind> {
        match self {
            PropertyKind::Equipment => Some(EntityKind::Equipment),
            PropertyKind::Location => Some(EntityKind::Location),
            PropertyKind::Service => Some(EntityKind::Service),
            _ => None,
        }
    }

    /// Returns true if values of this kind point at another entity.
    pub fn is_reference(&self) -> bool {
        self.entity_kind().is_some()
    }
}

impl Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropertyKind {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyKind::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| PropertyError::UnknownKind(s.to_owned()))
    }
}

/// Kind of entity a reference property can point at.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Equipment, for example a router.
    Equipment,

    /// Location, for example a building.
    Location,

    /// Service, for example an internet uplink.
    Service,
}

impl EntityKind {
    /// Returns the matching property kind.
    pub fn property_kind(&self) -> PropertyKind {
        match self {
            EntityKind::Equipment => PropertyKind::Equipment,
            EntityKind::Location => PropertyKind::Location,
            EntityKind::Service => PropertyKind::Service,
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.property_kind())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::PropertyKind;

    #[rstest]
    #[case("gps_location", PropertyKind::GpsLocation)]
    #[case("datetime_local", PropertyKind::DatetimeLocal)]
    #[case("enum", PropertyKind::Enum)]
    fn parses_wire_tags(#[case] tag: &str, #[case] expected: PropertyKind) {
        assert_eq!(tag.parse::<PropertyKind>().unwrap(), expected);
        assert_eq!(expected.to_string(), tag);
    }

    #[test]
    fn serde_and_display_agree() {
        for kind in PropertyKind::ALL.iter() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn unknown_kind() {
        assert_eq!(
            "node".parse::<PropertyKind>().unwrap_err().to_string(),
            "Unknown property kind 'node'"
        );
    }

    #[test]
    fn reference_kinds() {
        let references: Vec<PropertyKind> = PropertyKind::ALL
            .iter()
            .copied()
            .filter(PropertyKind::is_reference)
            .collect();

        assert_eq!(
            references,
            vec![
                PropertyKind::Equipment,
                PropertyKind::Location,
                PropertyKind::Service
            ]
        );
    }
}
