//! Entity schema and its builder
//!
//! The builder accumulates input (names and fields, in the order given);
//! [`EntitySchemaBuilder::build`] freezes it into an [`EntitySchema`] that
//! every renderer reads and nothing mutates.

use crate::config::{CapacityPolicy, ScaffoldConfig};
use crate::error::{Result, ScaffoldError};
use crate::names::DerivedNames;

use super::field::{FieldCategory, FieldSpec};

/// Default per-category field cap
pub const DEFAULT_MAX_FIELDS: usize = 10;

/// Immutable description of one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySchema {
    entity_name: String,
    api_name: String,
    fields: [Vec<FieldSpec>; 3],
}

impl EntitySchema {
    /// Start a builder with the default cap and the legacy silent-drop policy
    #[must_use]
    pub fn builder() -> EntitySchemaBuilder {
        EntitySchemaBuilder::default()
    }

    /// Entity (table) name
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// API-facing name
    #[must_use]
    pub fn api_name(&self) -> &str {
        &self.api_name
    }

    /// Fields of one category, in insertion order
    #[must_use]
    pub fn fields(&self, category: FieldCategory) -> &[FieldSpec] {
        &self.fields[category.index()]
    }

    /// Number of fields in one category
    #[must_use]
    pub fn count(&self, category: FieldCategory) -> usize {
        self.fields[category.index()].len()
    }

    /// Every field in emission order: integers, then text, then decimals
    pub fn ordered_fields(&self) -> impl Iterator<Item = &FieldSpec> + '_ {
        FieldCategory::ALL
            .into_iter()
            .flat_map(move |category| self.fields(category).iter())
    }

    /// Total number of fields
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.iter().map(Vec::len).sum()
    }

    /// Position of the first field named `name` within [`Self::ordered_fields`]
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.ordered_fields().position(|field| field.name == name)
    }

    /// Identifiers derived from this schema
    #[must_use]
    pub const fn names(&self) -> DerivedNames<'_> {
        DerivedNames::new(self)
    }
}

/// Accumulates entity input before it is frozen
#[derive(Debug, Clone)]
pub struct EntitySchemaBuilder {
    entity_name: Option<String>,
    api_name: Option<String>,
    fields: [Vec<FieldSpec>; 3],
    max_per_category: usize,
    policy: CapacityPolicy,
}

impl Default for EntitySchemaBuilder {
    fn default() -> Self {
        Self {
            entity_name: None,
            api_name: None,
            fields: Default::default(),
            max_per_category: DEFAULT_MAX_FIELDS,
            policy: CapacityPolicy::Truncate,
        }
    }
}

impl EntitySchemaBuilder {
    /// Builder honoring the cap and policy from `config`
    #[must_use]
    pub fn from_config(config: &ScaffoldConfig) -> Self {
        Self::default()
            .with_capacity(config.max_fields_per_category)
            .with_policy(config.capacity_policy)
    }

    /// Override the per-category cap
    #[must_use]
    pub const fn with_capacity(mut self, max_per_category: usize) -> Self {
        self.max_per_category = max_per_category;
        self
    }

    /// Override the capacity policy
    #[must_use]
    pub const fn with_policy(mut self, policy: CapacityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the entity name; the last call wins
    pub fn set_entity_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.entity_name = Some(name.into());
        self
    }

    /// Set the API-facing name; the last call wins
    pub fn set_api_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.api_name = Some(name.into());
        self
    }

    /// Add a plain field to `category`
    ///
    /// Returns `Ok(true)` when accepted and `Ok(false)` when the category is
    /// full and the field was dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::CapacityExceeded`] when the category is full
    /// and the policy is [`CapacityPolicy::Reject`].
    pub fn add_field(&mut self, category: FieldCategory, name: impl Into<String>) -> Result<bool> {
        self.add_field_spec(FieldSpec::new(category, name))
    }

    /// Add a fully specified field
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::CapacityExceeded`] when the category is full
    /// and the policy is [`CapacityPolicy::Reject`].
    pub fn add_field_spec(&mut self, field: FieldSpec) -> Result<bool> {
        let slot = &mut self.fields[field.category.index()];
        if slot.len() < self.max_per_category {
            slot.push(field);
            return Ok(true);
        }

        match self.policy {
            CapacityPolicy::Truncate => Ok(false),
            CapacityPolicy::Warn => {
                tracing::warn!(
                    category = %field.category,
                    field = %field.name,
                    max = self.max_per_category,
                    "category is full, field dropped"
                );
                Ok(false)
            }
            CapacityPolicy::Reject => Err(ScaffoldError::CapacityExceeded {
                category: field.category,
                field: field.name,
                max: self.max_per_category,
            }),
        }
    }

    /// Freeze the input into an [`EntitySchema`]
    ///
    /// An absent or empty API name falls back to the entity name.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MissingRequiredInput`] when the entity name is
    /// absent or empty.
    pub fn build(&self) -> Result<EntitySchema> {
        let entity_name = self
            .entity_name
            .clone()
            .filter(|name| !name.is_empty())
            .ok_or(ScaffoldError::MissingRequiredInput)?;

        let api_name = self
            .api_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| entity_name.clone());

        Ok(EntitySchema {
            entity_name,
            api_name,
            fields: self.fields.clone(),
        })
    }
}
