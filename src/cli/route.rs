//! CLI route: resolve the input directory and run collect-then-write.

use crate::error::SlnError;
use crate::tree::builder::TreeBuilder;
use crate::tree::node::EntryKind;
use crate::tree::path;
use crate::writer::{self, SOLUTION_EXTENSION};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub output_path: PathBuf,
    pub entries: usize,
    pub projects: usize,
}

/// Validated input for one run
#[derive(Debug)]
pub struct RunContext {
    input_dir: PathBuf,
    output_path: PathBuf,
}

impl RunContext {
    /// Validate the directory argument and compute the output path.
    pub fn new(directory: Option<&Path>) -> Result<Self, SlnError> {
        let arg = directory.ok_or(SlnError::MissingDirectory)?;
        let input_dir = path::resolve_directory(arg)?;
        let output_path = solution_path(&input_dir)?;
        Ok(Self {
            input_dir,
            output_path,
        })
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Collect the tree and write the solution file.
    pub fn execute(&self) -> Result<GenerationSummary, SlnError> {
        let tree = TreeBuilder::new(self.input_dir.clone()).build()?;
        debug!("Collected tree:\n{}", tree.render());

        writer::write_solution_file(&self.output_path, &tree)?;

        let summary = GenerationSummary {
            output_path: self.output_path.clone(),
            entries: tree.len(),
            projects: tree.count(EntryKind::Project),
        };
        info!(
            entries = summary.entries,
            projects = summary.projects,
            "Solution generated"
        );
        Ok(summary)
    }
}

/// `<dir>/<dir name>.sln`
pub fn solution_path(input_dir: &Path) -> Result<PathBuf, SlnError> {
    let name = path::directory_name(input_dir)?;
    Ok(input_dir.join(format!("{}{}", name, SOLUTION_EXTENSION)))
}
