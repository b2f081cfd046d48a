//! crudsmith CLI tool

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use crudsmith::AlwaysOverwrite;
use crudsmith_cli_lib::{observability, run, Cli, TerminalConfirm};

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.log_json)?;

    if cli.yes {
        run(&cli, &mut AlwaysOverwrite)?;
    } else {
        run(&cli, &mut TerminalConfirm)?;
    }

    Ok(())
}
