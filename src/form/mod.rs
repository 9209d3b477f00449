// SPDX-License-Identifier: AGPL-3.0-or-later

//! Edit session over the properties of one entity.
mod errors;

use std::sync::Arc;

use log::{debug, info};

use crate::config::Configuration;
use crate::editor::EditorError;
use crate::property::{
    delegate_for, effective_properties, to_submission_payload, value_of_instance, DisplayValue,
    Property, PropertyDelegate, PropertyError, PropertyInput, PropertyType, PropertyValue,
    ValidationError,
};

pub use errors::{FormError, SubmissionError};

/// Message shown when a request never got an answer from the server.
const TRANSPORT_FAILURE_MESSAGE: &str = "Saving changes failed, please try again";

/// Properties of one entity as shown in its edit dialog: every fetched instance plus a default
/// for every schema slot the entity has no value for yet.
#[derive(Clone, Debug)]
pub struct PropertiesForm {
    config: Configuration,
    properties: Vec<Property>,
}

impl PropertiesForm {
    /// Starts an edit session from the schema of the entity's type and its fetched properties.
    ///
    /// Fails when a property belongs to a property type which is not part of the schema.
    pub fn new(
        schema: &[Arc<PropertyType>],
        instances: &[Property],
        config: Configuration,
    ) -> Result<Self, FormError> {
        if let Some(orphan) = instances.iter().find(|instance| {
            !schema
                .iter()
                .any(|slot| slot.id == instance.property_type.id)
        }) {
            return Err(PropertyError::MissingPropertyType(
                orphan.property_type.id.to_string(),
            )
            .into());
        }

        let properties = effective_properties(instances, schema);
        debug!("Open properties form with {} fields", properties.len());

        Ok(Self { config, properties })
    }

    /// Returns the properties in display order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Replaces the value of the property at the given position.
    pub fn set_value(&mut self, position: usize, value: PropertyValue) -> Result<(), FormError> {
        let len = self.properties.len();
        let property = self
            .properties
            .get(position)
            .ok_or(EditorError::IndexOutOfBounds {
                index: position,
                len,
            })?;

        let updated = property.with_value(value)?;
        self.properties[position] = updated;
        Ok(())
    }

    /// Returns the input delegate of every property.
    pub fn delegates(&self) -> Vec<PropertyDelegate> {
        self.properties
            .iter()
            .map(|property| delegate_for(&property.property_type))
            .collect()
    }

    /// Returns the displayable value of every property.
    pub fn display_values(&self) -> Vec<DisplayValue> {
        self.properties
            .iter()
            .map(|property| value_of_instance(property, &self.config))
            .collect()
    }

    /// Checks all properties, collecting every problem found.
    ///
    /// Mandatory properties need a value. Ranges and locations have to be either complete or
    /// empty.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = self.properties.iter().filter_map(validate).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            debug!("Properties form has {} invalid fields", errors.len());
            Err(errors)
        }
    }

    /// Returns the payload of the create or edit mutation.
    pub fn payload(&self) -> Vec<PropertyInput> {
        to_submission_payload(&self.properties)
    }

    /// Returns the message to notify the user with after a failed submission. The edited values
    /// are kept so saving can be retried.
    pub fn submission_failed(&self, error: &SubmissionError) -> String {
        info!("Saving properties failed: {}", error);

        match error {
            SubmissionError::Server(message) => message.clone(),
            SubmissionError::Transport(_) => TRANSPORT_FAILURE_MESSAGE.to_owned(),
        }
    }
}

fn validate(property: &Property) -> Option<ValidationError> {
    let name = &property.property_type.name;

    if property.property_type.is_mandatory && property.value().is_empty() {
        return Some(ValidationError::MandatoryValueMissing(name.clone()));
    }

    match property.value() {
        PropertyValue::Range { from, to } if from.is_some() != to.is_some() => {
            Some(ValidationError::IncompleteRange(name.clone()))
        }
        PropertyValue::GpsLocation {
            latitude,
            longitude,
        } if latitude.is_some() != longitude.is_some() => {
            Some(ValidationError::IncompleteLocation(name.clone()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::rstest;
    use serde_json::json;

    use super::{FormError, PropertiesForm, SubmissionError};
    use crate::config::Configuration;
    use crate::editor::EditorError;
    use crate::property::{
        DisplayValue, Property, PropertyError, PropertyKind, PropertyType, PropertyValue,
        ValidationError,
    };
    use crate::test_utils::{init_logger, schema};

    #[rstest]
    fn fills_in_missing_defaults(schema: Vec<Arc<PropertyType>>) {
        let existing =
            Property::new("7".into(), schema[0].clone(), schema[0].default.initial_value())
                .unwrap();

        let form = PropertiesForm::new(&schema, &[existing], Configuration::default()).unwrap();
        assert_eq!(form.properties().len(), schema.len());
        assert_eq!(
            form.properties()
                .iter()
                .filter(|property| property.id.is_temporary())
                .count(),
            schema.len() - 1
        );
    }

    #[rstest]
    fn edits_by_position(schema: Vec<Arc<PropertyType>>) {
        let mut form = PropertiesForm::new(&schema, &[], Configuration::default()).unwrap();
        let position = form
            .properties()
            .iter()
            .position(|property| property.kind() == PropertyKind::Int)
            .unwrap();
        let before = form.properties().to_vec();

        form.set_value(position, PropertyValue::Int(Some(12)))
            .unwrap();
        assert_eq!(form.display_values()[position], DisplayValue::Integer(12));

        for (index, property) in form.properties().iter().enumerate() {
            if index != position {
                assert_eq!(property, &before[index]);
            }
        }

        assert_eq!(
            form.set_value(position, PropertyValue::Bool(Some(true))),
            Err(FormError::Property(PropertyError::KindMismatch {
                expected: PropertyKind::Int,
                found: PropertyKind::Bool
            }))
        );

        let len = form.properties().len();
        assert_eq!(
            form.set_value(len, PropertyValue::Int(None)),
            Err(FormError::Editor(EditorError::IndexOutOfBounds { index: len, len }))
        );
    }

    #[test]
    fn collects_all_validation_errors() {
        init_logger();

        let mut serial = PropertyType::new("1".into(), "Serial", PropertyKind::String);
        serial.is_mandatory = true;
        serial.index = Some(0);
        let mut span = PropertyType::new("2".into(), "Span", PropertyKind::Range);
        span.index = Some(1);
        let mut site = PropertyType::new("3".into(), "Site", PropertyKind::GpsLocation);
        site.index = Some(2);

        let schema = vec![Arc::new(serial), Arc::new(span), Arc::new(site)];
        let mut form = PropertiesForm::new(&schema, &[], Configuration::default()).unwrap();

        form.set_value(
            1,
            PropertyValue::Range {
                from: Some(1.0),
                to: None,
            },
        )
        .unwrap();
        form.set_value(
            2,
            PropertyValue::GpsLocation {
                latitude: None,
                longitude: Some(13.4),
            },
        )
        .unwrap();

        assert_eq!(
            form.validate(),
            Err(vec![
                ValidationError::MandatoryValueMissing("Serial".into()),
                ValidationError::IncompleteRange("Span".into()),
                ValidationError::IncompleteLocation("Site".into()),
            ])
        );

        form.set_value(0, PropertyValue::String(Some("SN-1".into())))
            .unwrap();
        form.set_value(1, PropertyValue::Range { from: None, to: None })
            .unwrap();
        form.set_value(
            2,
            PropertyValue::GpsLocation {
                latitude: Some(52.5),
                longitude: Some(13.4),
            },
        )
        .unwrap();
        assert_eq!(form.validate(), Ok(()));
    }

    #[rstest]
    fn rejects_properties_outside_the_schema(schema: Vec<Arc<PropertyType>>) {
        let foreign = Arc::new(PropertyType::new("99".into(), "Rack", PropertyKind::String));
        let orphan = Property::from_type(&foreign);

        assert_eq!(
            PropertiesForm::new(&schema, &[orphan], Configuration::default()).unwrap_err(),
            FormError::Property(PropertyError::MissingPropertyType("99".into()))
        );
    }

    #[rstest]
    #[case(PropertyKind::Float, PropertyValue::Float(Some(f64::NAN)))]
    #[case(
        PropertyKind::Range,
        PropertyValue::Range { from: Some(f64::NAN), to: Some(2.0) }
    )]
    #[case(
        PropertyKind::GpsLocation,
        PropertyValue::GpsLocation { latitude: Some(52.5), longitude: Some(f64::NEG_INFINITY) }
    )]
    fn mandatory_numbers_stay_missing_after_rejected_input(
        #[case] kind: PropertyKind,
        #[case] value: PropertyValue,
    ) {
        let mut reading = PropertyType::new("1".into(), "Reading", kind);
        reading.is_mandatory = true;
        let schema = vec![Arc::new(reading)];
        let mut form = PropertiesForm::new(&schema, &[], Configuration::default()).unwrap();

        assert_eq!(
            form.set_value(0, value),
            Err(FormError::Property(PropertyError::NonFiniteNumber(kind)))
        );
        assert_eq!(
            form.validate(),
            Err(vec![ValidationError::MandatoryValueMissing("Reading".into())])
        );

        let payload = serde_json::to_value(form.payload()).unwrap();
        assert!(payload[0]
            .as_object()
            .unwrap()
            .values()
            .all(|field| field.as_f64().map_or(true, f64::is_finite)));
    }

    #[rstest]
    fn delegates_follow_display_order(schema: Vec<Arc<PropertyType>>) {
        let form = PropertiesForm::new(&schema, &[], Configuration::default()).unwrap();
        let delegates = form.delegates();

        assert_eq!(delegates.len(), form.properties().len());
        for (delegate, property) in delegates.iter().zip(form.properties()) {
            assert_eq!(delegate.label, property.property_type.name);
            assert_eq!(delegate.disabled, !property.property_type.is_instance_property);
        }
    }

    #[rstest]
    fn payload_drops_derived_ids(schema: Vec<Arc<PropertyType>>) {
        let form = PropertiesForm::new(&schema, &[], Configuration::default()).unwrap();
        let payload = serde_json::to_value(form.payload()).unwrap();

        for input in payload.as_array().unwrap() {
            assert!(input.get("id").is_none());
            assert!(input.get("propertyType").is_none());
            assert_ne!(input["propertyTypeID"], json!(null));
        }
    }

    #[rstest]
    #[case(SubmissionError::Server("Name is taken".into()), "Name is taken")]
    #[case(
        SubmissionError::Transport("connection reset".into()),
        "Saving changes failed, please try again"
    )]
    fn failed_submissions_keep_the_form(
        schema: Vec<Arc<PropertyType>>,
        #[case] error: SubmissionError,
        #[case] expected: &str,
    ) {
        let form = PropertiesForm::new(&schema, &[], Configuration::default()).unwrap();
        let before = form.properties().to_vec();

        assert_eq!(form.submission_failed(&error), expected);
        assert_eq!(form.properties(), &before[..]);
    }
}
