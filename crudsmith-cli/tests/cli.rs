//! Integration tests for the command-line run loop

use std::fs;
use std::path::Path;

use clap::Parser;
use crudsmith::{AlwaysOverwrite, NeverOverwrite, OverwriteDecision, WriteOutcome};
use crudsmith_cli_lib::{run, Cli};
use tempfile::TempDir;

fn parse(output: &Path, extra: &[&str]) -> Cli {
    let config = output.join("no-such-config.toml");
    let mut args = vec![
        "crudsmith",
        "-o",
        output.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ];
    args.extend_from_slice(extra);
    Cli::try_parse_from(args).unwrap()
}

/// A full run writes all six files under the project directory
#[test]
fn test_run_writes_project_tree() {
    let temp_dir = TempDir::new().unwrap();
    let cli = parse(
        temp_dir.path(),
        &["-t", "Book", "-i", "Year", "-s", "Title", "-d", "Price"],
    );

    let report = run(&cli, &mut NeverOverwrite).unwrap();
    assert_eq!(report.count(WriteOutcome::Created), 6);

    let model = fs::read_to_string(temp_dir.path().join("App.API/Models/Book.cs")).unwrap();
    assert!(model.contains("public int? Year { get; set; }"));
    assert!(temp_dir
        .path()
        .join("App.API/Controllers/BookController.cs")
        .is_file());
}

/// Namespace and project directory flags reach the generated files
#[test]
fn test_namespace_and_project_dir_flags() {
    let temp_dir = TempDir::new().unwrap();
    let cli = parse(
        temp_dir.path(),
        &[
            "-t",
            "Order",
            "-a",
            "Orders",
            "--namespace",
            "Shop.API",
            "--project-dir",
            "Shop.API",
        ],
    );
    run(&cli, &mut NeverOverwrite).unwrap();

    let controller =
        fs::read_to_string(temp_dir.path().join("Shop.API/Controllers/OrdersController.cs"))
            .unwrap();
    assert!(controller.contains("namespace Shop.API.Controllers"));
    assert!(temp_dir.path().join("Shop.API/Contexts/OrderContext.cs").is_file());
}

/// A second run asks about every file and honours each answer
#[test]
fn test_rerun_consults_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    let cli = parse(temp_dir.path(), &["-t", "Book", "-s", "Title"]);
    run(&cli, &mut NeverOverwrite).unwrap();

    let mut asked = 0;
    let mut confirm = |_: &Path| -> crudsmith::Result<OverwriteDecision> {
        asked += 1;
        Ok(if asked % 2 == 0 {
            OverwriteDecision::Write
        } else {
            OverwriteDecision::Skip
        })
    };
    let report = run(&cli, &mut confirm).unwrap();
    assert_eq!(asked, 6);
    assert_eq!(report.count(WriteOutcome::Skipped), 3);
    assert_eq!(report.count(WriteOutcome::Overwritten), 3);

    let report = run(&cli, &mut AlwaysOverwrite).unwrap();
    assert_eq!(report.count(WriteOutcome::Overwritten), 6);
}

#[test]
fn test_missing_table_fails() {
    let temp_dir = TempDir::new().unwrap();
    let cli = parse(temp_dir.path(), &["-s", "Title"]);
    let err = run(&cli, &mut NeverOverwrite).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Please enter an entity name using the -t option."
    );
    assert!(!temp_dir.path().join("App.API").exists());
}

/// The entity name is checked before a broken config file is read
#[test]
fn test_missing_table_reported_before_bad_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("crudsmith.toml");
    fs::write(&config, "capacity_policy = [[").unwrap();

    let cli = Cli::try_parse_from([
        "crudsmith",
        "-o",
        temp_dir.path().to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "-s",
        "Title",
    ])
    .unwrap();
    let err = run(&cli, &mut NeverOverwrite).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Please enter an entity name using the -t option."
    );

    // With a name the same file is a configuration error
    let named = Cli::try_parse_from([
        "crudsmith",
        "-o",
        temp_dir.path().to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "-t",
        "Book",
    ])
    .unwrap();
    let err = run(&named, &mut NeverOverwrite).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load configuration"));
}

#[test]
fn test_strict_capacity_rejects_eleventh_field() {
    let temp_dir = TempDir::new().unwrap();
    let names: Vec<String> = (1..=11).map(|i| format!("N{i}")).collect();
    let mut extra = vec!["-t", "Wide", "--strict-capacity"];
    for name in &names {
        extra.push("-i");
        extra.push(name.as_str());
    }
    let cli = parse(temp_dir.path(), &extra);

    let err = run(&cli, &mut NeverOverwrite).unwrap_err();
    assert!(err.to_string().contains("'N11' was rejected"));
}

#[test]
fn test_unknown_field_modifier_fails() {
    let temp_dir = TempDir::new().unwrap();
    let cli = parse(temp_dir.path(), &["-t", "Book", "-s", "Title:unique"]);
    assert!(run(&cli, &mut NeverOverwrite).is_err());
}
