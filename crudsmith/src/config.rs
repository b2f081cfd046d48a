//! Configuration management for crudsmith
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CRUDSMITH_` prefix)
//! 2. `./crudsmith.toml`, or an explicit file passed to [`ScaffoldConfig::load_from`]
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # crudsmith.toml
//! project_dir = "Shop.API"
//! namespace = "Shop.API"
//! identity_key = "ID"
//! max_fields_per_category = 10
//! capacity_policy = "warn"
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Local configuration file picked up by [`ScaffoldConfig::load`]
pub const LOCAL_CONFIG_FILE: &str = "crudsmith.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CRUDSMITH_";

/// What happens when a category already holds its maximum number of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityPolicy {
    /// Drop the field without any notice (legacy behavior)
    #[default]
    Truncate,
    /// Drop the field and emit a warning
    Warn,
    /// Refuse the field with [`crate::ScaffoldError::CapacityExceeded`]
    Reject,
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncate => write!(f, "truncate"),
            Self::Warn => write!(f, "warn"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Directory prefix shared by every artifact destination
    pub project_dir: PathBuf,

    /// Root namespace of the generated code
    pub namespace: String,

    /// Name of the implicit identity key present on every persisted entity
    pub identity_key: String,

    /// Maximum number of fields accepted per category
    pub max_fields_per_category: usize,

    /// Behavior once a category is full
    pub capacity_policy: CapacityPolicy,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("App.API"),
            namespace: "App.API".to_string(),
            identity_key: "ID".to_string(),
            max_fields_per_category: 10,
            capacity_policy: CapacityPolicy::Truncate,
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration from defaults, `./crudsmith.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the local file exists but cannot be parsed, or a
    /// value has the wrong type.
    pub fn load() -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is treated like an empty one; environment variables
    /// still override everything.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value has the
    /// wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string layered over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML for this shape.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(source))
            .extract()?;
        Ok(config)
    }
}
