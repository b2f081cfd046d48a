//! Output sinks and overwrite confirmation
//!
//! The generator never talks to the terminal. Where artifacts land is an
//! [`OutputSink`]; whether an existing file may be replaced is a
//! [`ConfirmOverwrite`] strategy supplied by the caller.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Destination for rendered artifacts
pub trait OutputSink {
    /// Whether `path` already holds content
    fn exists(&self, path: &Path) -> bool;

    /// Store `content` at `path`, replacing anything already there
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be stored.
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// Writes under a root directory on disk
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Sink rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl OutputSink for FsSink {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        let target = self.resolve(path);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&target, content).map_err(|source| ScaffoldError::Io {
            path: target.clone(),
            source,
        })
    }
}

/// Keeps artifacts in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    /// Content stored at `path`
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Number of stored files
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Stored paths in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.files.keys().map(PathBuf::as_path)
    }
}

impl OutputSink for MemorySink {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Answer to an overwrite question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    /// Replace the existing file
    Write,
    /// Leave it untouched
    Skip,
}

/// What happened at one destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Nothing existed; the artifact was written
    Created,
    /// An existing file was replaced after confirmation
    Overwritten,
    /// An existing file was kept
    Skipped,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Overwritten => write!(f, "overwritten"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// Decides whether an existing destination may be replaced
pub trait ConfirmOverwrite {
    /// Consulted once per existing destination
    ///
    /// # Errors
    ///
    /// An error aborts the whole emission.
    fn confirm(&mut self, path: &Path) -> Result<OverwriteDecision>;
}

impl<F> ConfirmOverwrite for F
where
    F: FnMut(&Path) -> Result<OverwriteDecision>,
{
    fn confirm(&mut self, path: &Path) -> Result<OverwriteDecision> {
        self(path)
    }
}

/// Replaces every existing file
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl ConfirmOverwrite for AlwaysOverwrite {
    fn confirm(&mut self, _path: &Path) -> Result<OverwriteDecision> {
        Ok(OverwriteDecision::Write)
    }
}

/// Keeps every existing file
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverOverwrite;

impl ConfirmOverwrite for NeverOverwrite {
    fn confirm(&mut self, _path: &Path) -> Result<OverwriteDecision> {
        Ok(OverwriteDecision::Skip)
    }
}

/// Interpret one line typed at the overwrite prompt
///
/// The trailing line terminator is ignored. Exactly `y` overwrites; an
/// empty line or any other single character keeps the file.
///
/// ```
/// # use crudsmith::output::{parse_confirmation, OverwriteDecision};
/// assert_eq!(parse_confirmation("y\n").unwrap(), OverwriteDecision::Write);
/// assert_eq!(parse_confirmation("n").unwrap(), OverwriteDecision::Skip);
/// assert!(parse_confirmation("yes").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidConfirmationInput`] for more than one
/// character.
pub fn parse_confirmation(input: &str) -> Result<OverwriteDecision> {
    let line = input
        .strip_suffix('\n')
        .map_or(input, |rest| rest.strip_suffix('\r').unwrap_or(rest));

    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some('y'), None) => Ok(OverwriteDecision::Write),
        (_, None) => Ok(OverwriteDecision::Skip),
        (Some(_), Some(_)) | (None, Some(_)) => {
            Err(ScaffoldError::InvalidConfirmationInput(line.to_string()))
        }
    }
}
