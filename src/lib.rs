// SPDX-License-Identifier: AGPL-3.0-or-later

//! # inventory_forms
//!
//! Client-side data model for editing inventory entities (locations, equipment, services, work
//! orders and projects).
//!
//! Every entity embeds a list of dynamically typed properties whose shape is defined by a list of
//! property types (the schema of the entity's type). This crate derives default values from that
//! schema, renders values for display, diffs instances against the schema and serializes edits
//! into submission payloads for the GraphQL API.
//!
//! Next to this it provides pure list reducers for the editing UIs of checklists, checklist
//! categories and property type tables. Reducers never mutate state in place: every transition
//! returns a new list sharing all untouched records with the previous one.
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

pub mod checklist;
mod config;
pub mod editor;
mod errors;
pub mod form;
mod id;
pub mod property;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_utils;

pub use crate::config::Configuration;
pub use crate::errors::{
    ChecklistError, EditorError, FormError, IdError, PropertyError, SubmissionError,
    ValidationError,
};
pub use crate::id::{EntityId, SENTINEL_ID, TEMPORARY_ID_MARKER};
