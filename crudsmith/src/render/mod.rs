//! Artifact rendering
//!
//! A [`Renderer`] owns a Handlebars registry with one template per
//! [`ArtifactKind`]. Rendering is pure: the same schema and configuration
//! always produce byte-identical text.

pub mod context;
pub mod templates;

use handlebars::Handlebars;
use serde_json::Value;

use crate::artifacts::ArtifactKind;
use crate::error::Result;

pub use context::{field_metadata, render_context, FieldMetadata};

/// Handlebars-backed artifact renderer
#[derive(Debug)]
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    /// Create a renderer with every artifact template registered
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Generated code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        handlebars.register_partial("properties", templates::PROPERTIES_PARTIAL)?;
        for kind in ArtifactKind::ORDER {
            handlebars.register_template_string(kind.template_name(), kind.template_source())?;
        }

        Ok(Self { handlebars })
    }

    /// Render one artifact from a context built by [`render_context`]
    ///
    /// # Errors
    ///
    /// Returns an error if the context lacks a variable the template uses.
    pub fn render(&self, kind: ArtifactKind, context: &Value) -> Result<String> {
        let content = self.handlebars.render(kind.template_name(), context)?;
        tracing::debug!(artifact = kind.template_name(), bytes = content.len(), "rendered artifact");
        Ok(content)
    }
}
