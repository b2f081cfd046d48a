//! Field categories and field definitions
//!
//! Every generated property belongs to exactly one of three categories.
//! The category decides the emitted type shape and the comparison rules
//! the generated query-by-example uses.
//!
//! | Category  | Flag | Emitted type | Zero value |
//! |-----------|------|--------------|------------|
//! | `Integer` | `-i` | `int?`       | `0`        |
//! | `Text`    | `-s` | `string`     | `""`       |
//! | `Decimal` | `-d` | `decimal?`   | `0`        |
//!
//! # Field syntax
//!
//! ```text
//! Title             → plain field
//! Password:excluded → never eligible to match in a filtered list
//! ```

use serde::Serialize;
use std::fmt;

use crate::error::{Result, ScaffoldError};

/// Field category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    /// Nullable integer
    Integer,
    /// Text
    Text,
    /// Nullable decimal
    Decimal,
}

impl FieldCategory {
    /// All categories in the fixed emission order
    pub const ALL: [Self; 3] = [Self::Integer, Self::Text, Self::Decimal];

    /// Position of this category in [`Self::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Integer => 0,
            Self::Text => 1,
            Self::Decimal => 2,
        }
    }

    /// Emitted property type
    #[must_use]
    pub const fn target_type(self) -> &'static str {
        match self {
            Self::Integer => "int?",
            Self::Text => "string",
            Self::Decimal => "decimal?",
        }
    }

    /// Expression that is true when `owner.field` holds a non-zero value
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudsmith::schema::FieldCategory;
    /// assert_eq!(
    ///     FieldCategory::Integer.presence_guard("item", "Year"),
    ///     "item.Year != null && item.Year != 0"
    /// );
    /// assert_eq!(
    ///     FieldCategory::Text.presence_guard("item", "Title"),
    ///     "!string.IsNullOrEmpty(item.Title)"
    /// );
    /// ```
    #[must_use]
    pub fn presence_guard(self, owner: &str, field: &str) -> String {
        match self {
            Self::Integer | Self::Decimal => {
                format!("{owner}.{field} != null && {owner}.{field} != 0")
            }
            Self::Text => format!("!string.IsNullOrEmpty({owner}.{field})"),
        }
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Text => write!(f, "text"),
            Self::Decimal => write!(f, "decimal"),
        }
    }
}

/// One generated property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Property name, used verbatim
    pub name: String,
    /// Category
    pub category: FieldCategory,
    /// Whether the field is excluded from query-by-example matching
    pub excluded: bool,
}

impl FieldSpec {
    /// Create a plain field
    #[must_use]
    pub fn new(category: FieldCategory, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            excluded: false,
        }
    }

    /// Mark the field as excluded from query-by-example matching
    #[must_use]
    pub const fn excluded(mut self) -> Self {
        self.excluded = true;
        self
    }

    /// Parse a field definition
    ///
    /// Format: `name[:modifier]*`. The only modifier is `excluded`. The name
    /// is taken as-is; neither its shape nor its uniqueness is checked.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudsmith::schema::{FieldCategory, FieldSpec};
    /// let field = FieldSpec::parse(FieldCategory::Text, "Password:excluded").unwrap();
    /// assert_eq!(field.name, "Password");
    /// assert!(field.excluded);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if an unknown modifier is specified.
    pub fn parse(category: FieldCategory, input: &str) -> Result<Self> {
        let mut parts = input.split(':');
        let name = parts.next().unwrap_or_default();
        let mut field = Self::new(category, name);

        for modifier in parts {
            match modifier.trim().to_lowercase().as_str() {
                "excluded" | "exclude" => field.excluded = true,
                unknown => {
                    return Err(ScaffoldError::InvalidFieldSpec {
                        input: input.to_string(),
                        reason: format!("unknown modifier '{unknown}', expected 'excluded'"),
                    });
                }
            }
        }

        Ok(field)
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.excluded {
            write!(f, ":excluded")?;
        }
        Ok(())
    }
}
