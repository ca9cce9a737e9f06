//! Foundation types for the Order-Form Ledger (OFL).
//!
//! This crate provides the record schema shared by every other OFL crate:
//! the persisted [`OrderFormRecord`], its [`RecordType`] classification, and
//! the validation errors produced while parsing caller-supplied fields.
//!
//! # Key Types
//!
//! - [`OrderFormRecord`] — one committed version of an order-form provenance
//!   entry, keyed externally by its unique key
//! - [`RecordType`] — closed classification of the recorded payload
//! - [`TypeError`] — field validation and encoding failures

pub mod error;
pub mod record;

pub use error::TypeError;
pub use record::{OrderFormRecord, RecordType};
