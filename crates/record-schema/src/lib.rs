//! Input Schema and Record Validation
//!
//! Provides the shared schema descriptor consumed by both the input form
//! and the scoring path, plus boundary validation for submitted records.

mod descriptor;
mod error;
mod record;

pub use descriptor::{FieldDomain, FieldSpec, SchemaDescriptor};
pub use error::SchemaError;
pub use record::{EmployeeRecord, FieldValue};
