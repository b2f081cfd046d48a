//! Render context shared by every artifact template
//!
//! All six templates receive the same value, so a field list or a derived
//! name can never differ between artifacts of one run.

use serde::Serialize;
use serde_json::Value;

use crate::config::ScaffoldConfig;
use crate::schema::{EntitySchema, FieldCategory, FieldSpec};

/// Per-field template metadata
#[derive(Debug, Clone, Serialize)]
pub struct FieldMetadata {
    /// Property name
    pub name: String,
    /// Field category
    pub category: FieldCategory,
    /// Emitted property type
    pub target_type: &'static str,
    /// Excluded from query-by-example matching
    pub excluded: bool,
    /// Expression testing whether the filter item carries a value
    pub filter_guard: String,
}

impl From<&FieldSpec> for FieldMetadata {
    fn from(field: &FieldSpec) -> Self {
        Self {
            name: field.name.clone(),
            category: field.category,
            target_type: field.category.target_type(),
            excluded: field.excluded,
            filter_guard: field.category.presence_guard("item", &field.name),
        }
    }
}

/// Field metadata in emission order
#[must_use]
pub fn field_metadata(schema: &EntitySchema) -> Vec<FieldMetadata> {
    schema.ordered_fields().map(FieldMetadata::from).collect()
}

/// Build the template variables for `schema`
#[must_use]
pub fn render_context(schema: &EntitySchema, config: &ScaffoldConfig) -> Value {
    let names = schema.names();

    serde_json::json!({
        "namespace": config.namespace,
        "identity_key": config.identity_key,
        "entity_name": schema.entity_name(),
        "api_name": schema.api_name(),
        "model_class": names.model_class(),
        "context_class": names.context_class(),
        "display_class": names.display_class(),
        "repository_interface": names.repository_interface(),
        "repository_class": names.repository_class(),
        "controller_class": names.controller_class(),
        "repo_property": names.controller_repo_property(),
        "route_name": names.route_name(),
        "fields": field_metadata(schema),
    })
}
