//! Command-line surface
//!
//! ```bash
//! crudsmith -t Book -i Year -s Title -s Isbn:excluded -d Price
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use crudsmith::{
    ArtifactSet, CapacityPolicy, ConfirmOverwrite, EmitReport, EntitySchema, EntitySchemaBuilder,
    FieldCategory, FieldSpec, FsSink, ScaffoldConfig, ScaffoldError, WriteOutcome,
};

/// Generate a model, display model, context, repository interface,
/// repository and controller for one entity
#[derive(Debug, Clone, Parser)]
#[command(name = "crudsmith", version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Entity (table) name; keys the model and the context
    #[arg(short = 't', long = "table", value_name = "ENTITY")]
    pub table: Option<String>,

    /// API name; keys the display model, repository and controller
    #[arg(short = 'a', long = "api", value_name = "NAME")]
    pub api: Option<String>,

    /// Integer field (`NAME` or `NAME:excluded`), repeatable
    #[arg(short = 'i', long = "int", value_name = "FIELD")]
    pub integers: Vec<String>,

    /// Text field (`NAME` or `NAME:excluded`), repeatable
    #[arg(short = 's', long = "string", value_name = "FIELD")]
    pub strings: Vec<String>,

    /// Decimal field (`NAME` or `NAME:excluded`), repeatable
    #[arg(short = 'd', long = "decimal", value_name = "FIELD")]
    pub decimals: Vec<String>,

    /// Root directory the project directory is created under
    #[arg(short = 'o', long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Root namespace of the generated code
    #[arg(long)]
    pub namespace: Option<String>,

    /// Project directory prefix of every artifact
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Configuration file (defaults to ./crudsmith.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fail when a category exceeds its field limit
    #[arg(long, conflicts_with = "warn_capacity")]
    pub strict_capacity: bool,

    /// Warn when a field is dropped at the field limit
    #[arg(long)]
    pub warn_capacity: bool,

    /// Overwrite existing files without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Configuration from file and environment, with flags applied on top
    pub fn resolve_config(&self) -> Result<ScaffoldConfig> {
        let mut config = match &self.config {
            Some(path) => ScaffoldConfig::load_from(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => ScaffoldConfig::load().context("Failed to load configuration")?,
        };

        if let Some(namespace) = &self.namespace {
            config.namespace.clone_from(namespace);
        }
        if let Some(project_dir) = &self.project_dir {
            config.project_dir.clone_from(project_dir);
        }
        if self.strict_capacity {
            config.capacity_policy = CapacityPolicy::Reject;
        } else if self.warn_capacity {
            config.capacity_policy = CapacityPolicy::Warn;
        }

        Ok(config)
    }

    /// The `-t` value, required and non-empty
    pub fn entity_name(&self) -> Result<&str, ScaffoldError> {
        self.table
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ScaffoldError::MissingRequiredInput)
    }

    /// Entity schema described by the flags
    pub fn schema(&self, config: &ScaffoldConfig) -> Result<EntitySchema> {
        let table = self.entity_name()?;

        let mut builder = EntitySchemaBuilder::from_config(config);
        builder.set_entity_name(table);
        if let Some(api) = &self.api {
            builder.set_api_name(api.as_str());
        }

        let groups = [
            (FieldCategory::Integer, &self.integers),
            (FieldCategory::Text, &self.strings),
            (FieldCategory::Decimal, &self.decimals),
        ];
        for (category, inputs) in groups {
            for input in inputs {
                let field = FieldSpec::parse(category, input)?;
                builder.add_field_spec(field)?;
            }
        }

        Ok(builder.build()?)
    }
}

/// Generate and write every artifact described by `cli`
///
/// `confirm` is consulted for each destination that already exists.
pub fn run(cli: &Cli, confirm: &mut dyn ConfirmOverwrite) -> Result<EmitReport> {
    // A missing entity name is reported before any configuration is read
    cli.entity_name()?;
    let config = cli.resolve_config()?;
    tracing::debug!(
        namespace = %config.namespace,
        project_dir = %config.project_dir.display(),
        policy = ?config.capacity_policy,
        "resolved configuration"
    );
    let schema = cli.schema(&config)?;

    println!(
        "\n{} {} {}",
        style("Generating CRUD layer for").cyan().bold(),
        style(schema.entity_name()).green().bold(),
        style("...").cyan().bold()
    );

    let artifacts =
        ArtifactSet::new(&schema, &config).context("Failed to render artifacts")?;

    let mut sink = FsSink::new(&cli.output);
    let report = artifacts
        .emit(&mut sink, confirm)
        .context("Failed to write artifacts")?;

    for (entry, artifact) in report.entries.iter().zip(artifacts.artifacts()) {
        let marker = match entry.outcome {
            WriteOutcome::Created => style("✓").green(),
            WriteOutcome::Overwritten => style("↻").yellow(),
            WriteOutcome::Skipped => style("–").dim(),
        };
        match entry.outcome {
            WriteOutcome::Overwritten => {
                tracing::warn!(path = %entry.path.display(), "replaced existing file");
            }
            WriteOutcome::Skipped => {
                tracing::info!(path = %entry.path.display(), "kept existing file");
            }
            WriteOutcome::Created => {}
        }
        println!(
            "  {} {} ({}, {})",
            marker,
            style(entry.path.display()).dim(),
            style(&artifact.description).dim(),
            entry.outcome
        );
    }

    println!(
        "\n{} {} of {} files written",
        style("Done.").green().bold(),
        report.written(),
        report.entries.len()
    );

    print_next_steps(&schema);

    Ok(report)
}

fn print_next_steps(schema: &EntitySchema) {
    let names = schema.names();

    println!("\n{}", style("Next steps:").cyan().bold());
    println!(
        "  1. Register the context: {}",
        style(format!(
            "services.AddDbContext<{}>(options => ...);",
            names.context_class()
        ))
        .yellow()
    );
    println!(
        "  2. Register the repository: {}",
        style(format!(
            "services.AddScoped<{}, {}>();",
            names.repository_interface(),
            names.repository_class()
        ))
        .yellow()
    );
    println!("  3. Add a migration for {}", style(names.model_class()).yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_field_flags() {
        let cli = Cli::try_parse_from([
            "crudsmith", "-t", "Book", "-i", "Year", "-s", "Title", "-s", "Isbn:excluded", "-d",
            "Price",
        ])
        .unwrap();
        assert_eq!(cli.table.as_deref(), Some("Book"));
        assert_eq!(cli.integers, vec!["Year"]);
        assert_eq!(cli.strings, vec!["Title", "Isbn:excluded"]);
        assert_eq!(cli.decimals, vec!["Price"]);
        assert_eq!(cli.output, PathBuf::from("."));
    }

    #[test]
    fn test_last_table_wins() {
        let cli = Cli::try_parse_from(["crudsmith", "-t", "First", "-t", "Second"]).unwrap();
        assert_eq!(cli.table.as_deref(), Some("Second"));
    }

    #[test]
    fn test_capacity_flags_conflict() {
        let result = Cli::try_parse_from([
            "crudsmith",
            "-t",
            "Book",
            "--strict-capacity",
            "--warn-capacity",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_requires_table() {
        let cli = Cli::try_parse_from(["crudsmith", "-s", "Title"]).unwrap();
        let err = cli.schema(&ScaffoldConfig::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter an entity name using the -t option."
        );
    }

    #[test]
    fn test_entity_name_rejects_empty() {
        let cli = Cli::try_parse_from(["crudsmith", "-t", ""]).unwrap();
        assert!(matches!(
            cli.entity_name(),
            Err(ScaffoldError::MissingRequiredInput)
        ));
    }

    #[test]
    fn test_schema_from_flags() {
        let cli = Cli::try_parse_from([
            "crudsmith", "-t", "Books", "-a", "Library", "-d", "Price", "-s", "Secret:excluded",
        ])
        .unwrap();
        let schema = cli.schema(&ScaffoldConfig::default()).unwrap();
        assert_eq!(schema.api_name(), "Library");
        let fields: Vec<_> = schema.ordered_fields().map(ToString::to_string).collect();
        assert_eq!(fields, vec!["Secret:excluded", "Price"]);
    }

    #[test]
    fn test_strict_capacity_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crudsmith.toml");
        std::fs::write(&path, "capacity_policy = \"warn\"\nnamespace = \"Shop.API\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "crudsmith",
            "-t",
            "Book",
            "--strict-capacity",
            "--config",
            path.to_str().unwrap(),
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.capacity_policy, CapacityPolicy::Reject);
        assert_eq!(config.namespace, "Shop.API");
    }
}
