// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Debug;
use std::sync::Arc;

use crate::editor::errors::EditorError;
use crate::id::EntityId;

/// How a record leaves its list when the user removes it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RemovalPolicy {
    /// Record is spliced out of the list.
    Hard,

    /// Record is marked as deleted and stays in the list until the next submission.
    Soft,
}

/// Record which can be edited as part of a [`RecordList`].
pub trait Record: Clone + Debug {
    /// Single editable field of this record, carrying its new value.
    type Field: Clone + Debug;

    /// How this record is removed from its list.
    const REMOVAL: RemovalPolicy;

    /// Returns the id of this record.
    fn id(&self) -> &EntityId;

    /// Returns a new record with default values for the given list position.
    fn new_default(position: usize) -> Self;

    /// Returns a copy of this record with one field replaced.
    fn with_field(&self, field: Self::Field) -> Self;

    /// Returns the stored position of this record, if it carries one.
    fn index(&self) -> Option<i64> {
        None
    }

    /// Stores a new position in this record. Records without position ignore this.
    fn set_index(&mut self, _index: i64) {}

    /// Returns true if this record was soft-deleted.
    fn is_deleted(&self) -> bool {
        false
    }

    /// Marks this record as soft-deleted. Only called for [`RemovalPolicy::Soft`] records.
    fn mark_deleted(&mut self) {}
}

/// Ordered list of records.
///
/// Every transition returns a new list and leaves `self` untouched. Records which are not
/// targeted by a transition are shared with the previous list, so comparing them with
/// [`Arc::ptr_eq`] tells whether they changed.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordList<R>(Vec<Arc<R>>);

impl<R: Record> RecordList<R> {
    /// Returns a list holding the given records in the given order.
    pub fn from_records(records: Vec<R>) -> Self {
        Self(records.into_iter().map(Arc::new).collect())
    }

    /// Returns the number of records, soft-deleted ones included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the record at the given position.
    pub fn get(&self, position: usize) -> Option<&Arc<R>> {
        self.0.get(position)
    }

    /// Returns the record with the given id.
    pub fn find(&self, id: &EntityId) -> Option<&Arc<R>> {
        self.0.iter().find(|record| record.id() == id)
    }

    /// Iterates over all records, soft-deleted ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<R>> {
        self.0.iter()
    }

    /// Iterates over all records which were not soft-deleted.
    pub fn live(&self) -> impl Iterator<Item = &Arc<R>> {
        self.0.iter().filter(|record| !record.is_deleted())
    }

    /// Returns owned copies of all records.
    pub fn to_records(&self) -> Vec<R> {
        self.0.iter().map(|record| record.as_ref().clone()).collect()
    }

    fn position(&self, id: &EntityId) -> Result<usize, EditorError> {
        self.0
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| EditorError::UnknownId(id.clone()))
    }

    fn with_replaced(&self, position: usize, record: R) -> Self {
        let mut records = self.0.clone();
        records[position] = Arc::new(record);
        Self(records)
    }

    /// Returns a new list with the given record appended.
    pub fn appended(&self, record: R) -> Self {
        let mut records = self.0.clone();
        records.push(Arc::new(record));
        Self(records)
    }

    /// Returns a new list without the record of the given id, removed according to the
    /// [`RemovalPolicy`] of the record type.
    pub fn removed(&self, id: &EntityId) -> Result<Self, EditorError> {
        let position = self.position(id)?;

        match R::REMOVAL {
            RemovalPolicy::Hard => {
                let mut records = self.0.clone();
                records.remove(position);
                Ok(Self(records))
            }
            RemovalPolicy::Soft => {
                let mut record = self.0[position].as_ref().clone();
                record.mark_deleted();
                Ok(self.with_replaced(position, record))
            }
        }
    }

    /// Returns a new list where one field of the record with the given id is replaced.
    pub fn updated(&self, id: &EntityId, field: R::Field) -> Result<Self, EditorError> {
        let position = self.position(id)?;
        let record = self.0[position].with_field(field);
        Ok(self.with_replaced(position, record))
    }

    /// Returns a new list where the record with the given id is replaced as a whole. The
    /// replacement has to carry the same id.
    pub fn replaced(&self, id: &EntityId, record: R) -> Result<Self, EditorError> {
        if record.id() != id {
            return Err(EditorError::IdMismatch {
                expected: id.clone(),
                found: record.id().clone(),
            });
        }

        let position = self.position(id)?;
        Ok(self.with_replaced(position, record))
    }

    /// Returns a new list where the record at `source` was taken out and reinserted at
    /// `destination`.
    ///
    /// Positions refer to the live records only. Soft-deleted records do not take part in the
    /// reordering, they are moved behind all live records and keep their stored index. Live
    /// records get their index rewritten to their new position.
    pub fn moved(&self, source: usize, destination: usize) -> Result<Self, EditorError> {
        let (mut live, deleted): (Vec<Arc<R>>, Vec<Arc<R>>) = self
            .0
            .iter()
            .cloned()
            .partition(|record| !record.is_deleted());

        let len = live.len();
        for &index in &[source, destination] {
            if index >= len {
                return Err(EditorError::IndexOutOfBounds { index, len });
            }
        }

        if source == destination {
            return Ok(self.clone());
        }

        let record = live.remove(source);
        live.insert(destination, record);

        let mut records: Vec<Arc<R>> = live
            .into_iter()
            .enumerate()
            .map(|(position, record)| reindexed(record, position))
            .collect();
        records.extend(deleted);

        Ok(Self(records))
    }
}

impl<R: Record> From<Vec<R>> for RecordList<R> {
    fn from(records: Vec<R>) -> Self {
        Self::from_records(records)
    }
}

/// Returns the record with its index set to `position`, or the record itself if it already
/// stores that position or does not store one at all.
fn reindexed<R: Record>(record: Arc<R>, position: usize) -> Arc<R> {
    let index = position as i64;

    match record.index() {
        Some(current) if current == index => record,
        _ => {
            let mut copy = record.as_ref().clone();
            copy.set_index(index);

            if copy.index() == record.index() {
                record
            } else {
                Arc::new(copy)
            }
        }
    }
}
