//! crudsmith CLI library

#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod observability;
pub mod prompt;

pub use cli::{run, Cli};
pub use prompt::TerminalConfirm;
