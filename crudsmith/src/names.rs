//! Cross-artifact identifier derivation
//!
//! Every name is a plain concatenation of the entity or API name with a
//! fixed affix. Casing is taken verbatim from the caller.

use crate::schema::EntitySchema;

/// Identifiers shared by all six artifacts
///
/// A borrowed view: each accessor computes its name on demand.
#[derive(Debug, Clone, Copy)]
pub struct DerivedNames<'a> {
    schema: &'a EntitySchema,
}

impl<'a> DerivedNames<'a> {
    /// View over `schema`
    #[must_use]
    pub const fn new(schema: &'a EntitySchema) -> Self {
        Self { schema }
    }

    /// Persistent model class, equal to the entity name
    #[must_use]
    pub fn model_class(&self) -> &'a str {
        self.schema.entity_name()
    }

    /// Persistence context class
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudsmith::EntitySchema;
    /// let mut builder = EntitySchema::builder();
    /// builder.set_entity_name("Book").set_api_name("Library");
    /// let schema = builder.build().unwrap();
    /// assert_eq!(schema.names().context_class(), "BookContext");
    /// assert_eq!(schema.names().display_class(), "LibraryDisplay");
    /// ```
    #[must_use]
    pub fn context_class(&self) -> String {
        format!("{}Context", self.schema.entity_name())
    }

    /// Display (projection) class
    #[must_use]
    pub fn display_class(&self) -> String {
        format!("{}Display", self.schema.api_name())
    }

    /// Repository interface
    #[must_use]
    pub fn repository_interface(&self) -> String {
        format!("I{}Repository", self.schema.api_name())
    }

    /// Repository implementation class
    #[must_use]
    pub fn repository_class(&self) -> String {
        format!("{}Repository", self.schema.api_name())
    }

    /// API controller class
    #[must_use]
    pub fn controller_class(&self) -> String {
        format!("{}Controller", self.schema.api_name())
    }

    /// Controller property holding the repository
    #[must_use]
    pub fn controller_repo_property(&self) -> String {
        format!("{}Repo", self.schema.api_name())
    }

    /// Route name of the get-by-id endpoint
    #[must_use]
    pub fn route_name(&self) -> &'a str {
        self.schema.api_name()
    }
}
