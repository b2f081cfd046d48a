//! Entity schema: names and typed field lists
//!
//! This module is the single input of the generator. It is built once per
//! invocation and then only read.

pub mod entity;
pub mod field;

pub use entity::{EntitySchema, EntitySchemaBuilder, DEFAULT_MAX_FIELDS};
pub use field::{FieldCategory, FieldSpec};
