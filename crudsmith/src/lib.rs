//! crudsmith: schema-driven generator for a consistent CRUD layer
//!
//! One entity schema in, six artifacts out: a persistent model, a display
//! model, a persistence context, a repository interface, a repository with
//! query-by-example, and an API controller. Every artifact is rendered from
//! the same schema and the same derived names, so the files always agree
//! on identifiers and field lists.
//!
//! # Quick Start
//!
//! ```rust
//! use crudsmith::prelude::*;
//!
//! # fn main() -> crudsmith::Result<()> {
//! let mut builder = EntitySchema::builder();
//! builder.set_entity_name("Book");
//! builder.add_field(FieldCategory::Integer, "Year")?;
//! builder.add_field(FieldCategory::Text, "Title")?;
//! builder.add_field(FieldCategory::Decimal, "Price")?;
//! let schema = builder.build()?;
//!
//! let artifacts = ArtifactSet::new(&schema, &ScaffoldConfig::default())?;
//! let mut sink = MemorySink::default();
//! let report = artifacts.emit(&mut sink, &mut NeverOverwrite)?;
//! assert_eq!(report.written(), 6);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc)]

pub mod artifacts;
pub mod config;
pub mod error;
pub mod memory;
pub mod names;
pub mod output;
pub mod render;
pub mod schema;

pub use artifacts::{ArtifactKind, ArtifactSet, EmitEntry, EmitReport, GeneratedArtifact};
pub use config::{CapacityPolicy, ScaffoldConfig};
pub use error::{Result, ScaffoldError};
pub use names::DerivedNames;
pub use output::{
    parse_confirmation, AlwaysOverwrite, ConfirmOverwrite, FsSink, MemorySink, NeverOverwrite,
    OutputSink, OverwriteDecision, WriteOutcome,
};
pub use schema::{EntitySchema, EntitySchemaBuilder, FieldCategory, FieldSpec};

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use crudsmith::prelude::*;
    //! ```

    pub use crate::artifacts::{ArtifactKind, ArtifactSet, EmitReport};
    pub use crate::config::{CapacityPolicy, ScaffoldConfig};
    pub use crate::error::ScaffoldError;
    pub use crate::output::{
        AlwaysOverwrite, ConfirmOverwrite, FsSink, MemorySink, NeverOverwrite, OutputSink,
        OverwriteDecision, WriteOutcome,
    };
    pub use crate::schema::{EntitySchema, EntitySchemaBuilder, FieldCategory, FieldSpec};
}
