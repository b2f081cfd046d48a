//! The six generated artifacts
//!
//! [`ArtifactSet::new`] renders every artifact from one schema in a fixed
//! order. [`ArtifactSet::emit`] hands them to an [`OutputSink`], asking the
//! confirmation strategy only about destinations that already exist.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::error::Result;
use crate::output::{ConfirmOverwrite, OutputSink, OverwriteDecision, WriteOutcome};
use crate::render::{render_context, templates, Renderer};
use crate::schema::EntitySchema;

/// Artifact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Persistent model, keyed by the entity name
    Model,
    /// Display model
    DisplayModel,
    /// Persistence context, keyed by the entity name
    Context,
    /// Repository interface
    Interface,
    /// Repository implementation
    Repository,
    /// API controller
    Controller,
}

impl ArtifactKind {
    /// Emission order
    pub const ORDER: [Self; 6] = [
        Self::Model,
        Self::DisplayModel,
        Self::Context,
        Self::Interface,
        Self::Repository,
        Self::Controller,
    ];

    /// Name the template is registered under
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::DisplayModel => "display_model",
            Self::Context => "context",
            Self::Interface => "interface",
            Self::Repository => "repository",
            Self::Controller => "controller",
        }
    }

    /// Embedded template source
    #[must_use]
    pub const fn template_source(self) -> &'static str {
        match self {
            Self::Model => templates::MODEL_TEMPLATE,
            Self::DisplayModel => templates::DISPLAY_TEMPLATE,
            Self::Context => templates::CONTEXT_TEMPLATE,
            Self::Interface => templates::INTERFACE_TEMPLATE,
            Self::Repository => templates::REPOSITORY_TEMPLATE,
            Self::Controller => templates::CONTROLLER_TEMPLATE,
        }
    }

    /// Destination relative to the project directory
    ///
    /// ```
    /// # use crudsmith::{ArtifactKind, EntitySchema};
    /// let mut builder = EntitySchema::builder();
    /// builder.set_entity_name("Book").set_api_name("Library");
    /// let schema = builder.build().unwrap();
    /// assert_eq!(
    ///     ArtifactKind::Interface.destination(&schema),
    ///     std::path::Path::new("Repositories/Interfaces/ILibraryRepository.cs")
    /// );
    /// ```
    #[must_use]
    pub fn destination(self, schema: &EntitySchema) -> PathBuf {
        let names = schema.names();
        match self {
            Self::Model => PathBuf::from("Models").join(format!("{}.cs", names.model_class())),
            Self::DisplayModel => PathBuf::from("Models/DisplayModels")
                .join(format!("{}.cs", names.display_class())),
            Self::Context => {
                PathBuf::from("Contexts").join(format!("{}.cs", names.context_class()))
            }
            Self::Interface => PathBuf::from("Repositories/Interfaces")
                .join(format!("{}.cs", names.repository_interface())),
            Self::Repository => {
                PathBuf::from("Repositories").join(format!("{}.cs", names.repository_class()))
            }
            Self::Controller => {
                PathBuf::from("Controllers").join(format!("{}.cs", names.controller_class()))
            }
        }
    }

    /// Short human description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::DisplayModel => "Display model",
            Self::Context => "Database context",
            Self::Interface => "Repository interface",
            Self::Repository => "Repository",
            Self::Controller => "API controller",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// One rendered artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Destination, including the project directory
    pub path: PathBuf,
    /// Rendered text
    pub content: String,
    /// Description of what was generated
    pub description: String,
}

/// Outcome of emitting one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitEntry {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Destination
    pub path: PathBuf,
    /// What happened at the destination
    pub outcome: WriteOutcome,
}

/// Per-artifact outcomes of one [`ArtifactSet::emit`] call, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitReport {
    /// Entries in emission order
    pub entries: Vec<EmitEntry>,
}

impl EmitReport {
    /// Number of entries with `outcome`
    #[must_use]
    pub fn count(&self, outcome: WriteOutcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    /// Number of artifacts that reached the sink
    #[must_use]
    pub fn written(&self) -> usize {
        self.count(WriteOutcome::Created) + self.count(WriteOutcome::Overwritten)
    }

    /// Destinations that were left untouched
    pub fn skipped(&self) -> impl Iterator<Item = &Path> + '_ {
        self.entries
            .iter()
            .filter(|e| e.outcome == WriteOutcome::Skipped)
            .map(|e| e.path.as_path())
    }
}

/// All six artifacts for one schema
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    artifacts: Vec<GeneratedArtifact>,
}

impl ArtifactSet {
    /// Render every artifact for `schema`
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile or render.
    pub fn new(schema: &EntitySchema, config: &ScaffoldConfig) -> Result<Self> {
        let renderer = Renderer::new()?;
        let context = render_context(schema, config);

        let artifacts = ArtifactKind::ORDER
            .into_iter()
            .map(|kind| {
                Ok(GeneratedArtifact {
                    kind,
                    path: config.project_dir.join(kind.destination(schema)),
                    content: renderer.render(kind, &context)?,
                    description: format!("{} for {}", kind.description(), schema.entity_name()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { artifacts })
    }

    /// Artifacts in emission order
    #[must_use]
    pub fn artifacts(&self) -> &[GeneratedArtifact] {
        &self.artifacts
    }

    /// Artifact of one kind
    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    /// Write every artifact to `sink`
    ///
    /// A declined overwrite skips that artifact and continues with the next.
    ///
    /// # Errors
    ///
    /// Returns the first confirmation or sink error. Artifacts written before
    /// the failure stay written.
    pub fn emit<S, C>(&self, sink: &mut S, confirm: &mut C) -> Result<EmitReport>
    where
        S: OutputSink + ?Sized,
        C: ConfirmOverwrite + ?Sized,
    {
        let mut report = EmitReport::default();

        for artifact in &self.artifacts {
            let outcome = if sink.exists(&artifact.path) {
                match confirm.confirm(&artifact.path)? {
                    OverwriteDecision::Write => {
                        sink.write(&artifact.path, &artifact.content)?;
                        WriteOutcome::Overwritten
                    }
                    OverwriteDecision::Skip => WriteOutcome::Skipped,
                }
            } else {
                sink.write(&artifact.path, &artifact.content)?;
                WriteOutcome::Created
            };

            tracing::info!(
                artifact = artifact.kind.template_name(),
                path = %artifact.path.display(),
                outcome = %outcome,
                "emitted artifact"
            );

            report.entries.push(EmitEntry {
                kind: artifact.kind,
                path: artifact.path.clone(),
                outcome,
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{AlwaysOverwrite, MemorySink, NeverOverwrite};
    use crate::schema::FieldCategory;
    use crate::ScaffoldError;

    fn book() -> EntitySchema {
        let mut builder = EntitySchema::builder();
        builder.set_entity_name("Book");
        builder.add_field(FieldCategory::Text, "Title").unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_destinations() {
        let set = ArtifactSet::new(&book(), &ScaffoldConfig::default()).unwrap();
        let paths: Vec<_> = set.artifacts().iter().map(|a| a.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("App.API/Models/Book.cs"),
                PathBuf::from("App.API/Models/DisplayModels/BookDisplay.cs"),
                PathBuf::from("App.API/Contexts/BookContext.cs"),
                PathBuf::from("App.API/Repositories/Interfaces/IBookRepository.cs"),
                PathBuf::from("App.API/Repositories/BookRepository.cs"),
                PathBuf::from("App.API/Controllers/BookController.cs"),
            ]
        );
    }

    #[test]
    fn test_emit_creates_then_overwrites() {
        let set = ArtifactSet::new(&book(), &ScaffoldConfig::default()).unwrap();
        let mut sink = MemorySink::default();

        let report = set.emit(&mut sink, &mut NeverOverwrite).unwrap();
        assert_eq!(report.count(WriteOutcome::Created), 6);
        assert_eq!(sink.len(), 6);

        let report = set.emit(&mut sink, &mut AlwaysOverwrite).unwrap();
        assert_eq!(report.count(WriteOutcome::Overwritten), 6);
    }

    #[test]
    fn test_declined_overwrite_continues() {
        let set = ArtifactSet::new(&book(), &ScaffoldConfig::default()).unwrap();
        let mut sink = MemorySink::default();
        let model_path = set.get(ArtifactKind::Model).unwrap().path.clone();
        sink.write(&model_path, "// hand edited").unwrap();

        let report = set.emit(&mut sink, &mut NeverOverwrite).unwrap();
        assert_eq!(report.entries[0].outcome, WriteOutcome::Skipped);
        assert_eq!(report.written(), 5);
        assert_eq!(sink.get(&model_path), Some("// hand edited"));
        assert_eq!(report.skipped().collect::<Vec<_>>(), vec![model_path.as_path()]);
    }

    #[test]
    fn test_confirmation_error_aborts_without_rollback() {
        let set = ArtifactSet::new(&book(), &ScaffoldConfig::default()).unwrap();
        let mut sink = MemorySink::default();
        let context_path = set.get(ArtifactKind::Context).unwrap().path.clone();
        sink.write(&context_path, "// existing").unwrap();

        let mut confirm = |_: &Path| -> Result<OverwriteDecision> {
            Err(ScaffoldError::InvalidConfirmationInput("yes".to_string()))
        };
        let err = set.emit(&mut sink, &mut confirm).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidConfirmationInput(_)));

        // Model and display model were written before the failure
        assert_eq!(sink.len(), 3);
        assert!(sink.get(&set.get(ArtifactKind::Controller).unwrap().path).is_none());
    }
}
