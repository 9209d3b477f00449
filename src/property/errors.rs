// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

use crate::property::PropertyKind;

/// Errors of decoding or constructing typed properties and property types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// Kind tag is not known to this client.
    #[error("Unknown property kind '{0}'")]
    UnknownKind(String),

    /// Value does not belong to the kind of the property type it is attached to.
    #[error("Property value of kind '{found}' does not match property type kind '{expected}'")]
    KindMismatch {
        /// Kind of the property type.
        expected: PropertyKind,

        /// Kind of the rejected value.
        found: PropertyKind,
    },

    /// Option list of an enum property type is not a JSON encoded array of strings.
    #[error("Enum options '{0}' are not a JSON array of strings")]
    InvalidEnumOptions(String),

    /// Decimal part of a value is NaN or infinite.
    #[error("Property value of kind '{0}' holds a number which is not finite")]
    NonFiniteNumber(PropertyKind),

    /// Property references a property type which is not part of the schema.
    #[error("Property type '{0}' is not part of the schema")]
    MissingPropertyType(String),

    /// Input could not be decoded into a property or property type.
    #[error("Invalid property data: {0}")]
    Decode(String),
}

/// Validation errors of user input, reported next to the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Mandatory property has no value.
    #[error("'{0}' is required")]
    MandatoryValueMissing(String),

    /// Input is not an integer number.
    #[error("'{0}' is not a valid integer")]
    InvalidInteger(String),

    /// Input is not a finite decimal number.
    #[error("'{0}' is not a valid number")]
    InvalidFloat(String),

    /// Only one bound of a range was given.
    #[error("Range of '{0}' needs both a start and an end value")]
    IncompleteRange(String),

    /// Only one coordinate of a location was given.
    #[error("Location of '{0}' needs both latitude and longitude")]
    IncompleteLocation(String),
}
