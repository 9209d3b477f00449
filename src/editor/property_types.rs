// SPDX-License-Identifier: AGPL-3.0-or-later

//! Reducer state of the property types table of an entity type, with soft removal and
//! compaction ahead of a submission.

use log::{debug, info};

use crate::config::Configuration;
use crate::editor::record::{Record, RecordList, RemovalPolicy};
use crate::id::EntityId;
use crate::property::{PropertyKind, PropertyType, PropertyTypeInput, RecordStatus, TypeDefault};

/// Editable fields of a property type row.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyTypeField {
    /// Display label.
    Name(String),

    /// Kind of the property type. Changing it resets the default.
    Kind(PropertyKind),

    /// Default value. The kind of the row follows the default.
    Default(TypeDefault),

    /// Grouping label.
    Category(Option<String>),

    /// Values can be changed.
    IsEditable(bool),

    /// A value is required.
    IsMandatory(bool),

    /// Values are set per instance.
    IsInstanceProperty(bool),
}

impl Record for PropertyType {
    type Field = PropertyTypeField;

    const REMOVAL: RemovalPolicy = RemovalPolicy::Soft;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn new_default(position: usize) -> Self {
        let mut property_type = PropertyType::new(EntityId::temporary(), "", PropertyKind::String);
        property_type.index = Some(position as i64);
        property_type
    }

    fn with_field(&self, field: Self::Field) -> Self {
        let mut property_type = self.clone();

        match field {
            PropertyTypeField::Name(name) => property_type.name = name,
            PropertyTypeField::Kind(kind) if kind != property_type.kind() => {
                property_type.default = TypeDefault::empty(kind)
            }
            PropertyTypeField::Kind(_) => (),
            PropertyTypeField::Default(default) => property_type.default = default,
            PropertyTypeField::Category(category) => property_type.category = category,
            PropertyTypeField::IsEditable(value) => property_type.is_editable = value,
            PropertyTypeField::IsMandatory(value) => property_type.is_mandatory = value,
            PropertyTypeField::IsInstanceProperty(value) => {
                property_type.is_instance_property = value
            }
        }

        property_type
    }

    fn index(&self) -> Option<i64> {
        self.index
    }

    fn set_index(&mut self, index: i64) {
        self.index = Some(index);
    }

    fn is_deleted(&self) -> bool {
        PropertyType::is_deleted(self)
    }

    fn mark_deleted(&mut self) {
        self.status = RecordStatus::Deleted;
    }
}

/// Returns the editor state for the schema of an entity type.
///
/// An empty schema starts with one blank row when `require_property_type_row` is set, so the
/// table always offers a row to type into.
pub fn get_initial_state(
    property_types: &[PropertyType],
    config: &Configuration,
) -> RecordList<PropertyType> {
    if property_types.is_empty() && config.require_property_type_row {
        debug!("Schema is empty, start with one blank property type");
        return RecordList::from_records(vec![PropertyType::new_default(0)]);
    }

    RecordList::from_records(property_types.to_vec())
}

/// Property type rows split by their status.
#[derive(Clone, Debug, PartialEq)]
pub struct CompactedPropertyTypes {
    /// Rows which are kept, in list order.
    pub live: Vec<PropertyType>,

    /// Rows which were removed by the user.
    pub deleted: Vec<PropertyType>,
}

impl CompactedPropertyTypes {
    /// Returns the rows as sent to the API.
    ///
    /// Deleted rows which never reached the server are dropped. Persisted deleted rows are sent
    /// with their deletion flag set so the server removes them.
    pub fn to_payload(&self) -> Vec<PropertyTypeInput> {
        self.live
            .iter()
            .chain(self.deleted.iter().filter(|row| row.id.submission_id().is_some()))
            .map(PropertyTypeInput::from)
            .collect()
    }
}

/// Partitions the edited rows into live and deleted ones ahead of a submission.
pub fn compact_for_submit(state: &RecordList<PropertyType>) -> CompactedPropertyTypes {
    let (deleted, live): (Vec<PropertyType>, Vec<PropertyType>) = state
        .to_records()
        .into_iter()
        .partition(|row| row.is_deleted());

    info!(
        "Compacted property types: {} live, {} deleted",
        live.len(),
        deleted.len()
    );

    CompactedPropertyTypes { live, deleted }
}
