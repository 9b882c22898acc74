//! Tree builder for collecting solution entries from the filesystem

use crate::error::SlnError;
use crate::ignore::IgnoreRules;
use crate::tree::node::{EntryId, EntryKind, SolutionTree};
use crate::tree::path;
use crate::tree::walker::{self, Listing};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Tree builder for collecting solution entries
pub struct TreeBuilder {
    root: PathBuf,
    rules: IgnoreRules,
}

impl TreeBuilder {
    /// Create a new tree builder for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            rules: IgnoreRules::default(),
        }
    }

    /// Build the complete solution tree from the filesystem
    ///
    /// Directories are visited depth-first in listing order. A directory that
    /// directly contains project files is replaced by those projects, attached
    /// to its parent; everything else it contains is dropped. Each directory is
    /// listed before its node is created, so nodes only ever land on their
    /// final parent.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<SolutionTree, SlnError> {
        let start = Instant::now();
        info!("Starting tree collection");

        let name = path::directory_name(&self.root)?;
        let mut tree = SolutionTree::new(self.root.clone(), name);
        let root = tree.root();

        let listing = walker::list_children(&self.root)?;
        if self.contains_projects(&listing) {
            // The root cannot be removed, so its projects stay on the root.
            debug!("Root directory contains project files");
            self.append_projects(&mut tree, root, listing)?;
        } else {
            self.collect_children(&mut tree, root, listing)?;
        }

        info!(
            entry_count = tree.len(),
            project_count = tree.count(EntryKind::Project),
            duration_ms = start.elapsed().as_millis(),
            "Tree collection completed"
        );

        Ok(tree)
    }

    fn collect_children(
        &self,
        tree: &mut SolutionTree,
        parent: EntryId,
        listing: Vec<Listing>,
    ) -> Result<(), SlnError> {
        for child in listing {
            if self.rules.is_ignored(&child.name) {
                trace!(path = %child.path.display(), "Ignoring entry");
                continue;
            }

            if !child.is_dir {
                tree.append(parent, child.path, child.name, EntryKind::File)?;
                continue;
            }

            let grandchildren = walker::list_children(&child.path)?;
            if self.contains_projects(&grandchildren) {
                debug!(path = %child.path.display(), "Collapsing project directory");
                self.append_projects(tree, parent, grandchildren)?;
                continue;
            }

            trace!(path = %child.path.display(), "Visiting directory");
            let id = tree.append(parent, child.path, child.name, EntryKind::Directory)?;
            self.collect_children(tree, id, grandchildren)?;
        }

        Ok(())
    }

    /// Attach every project file of a collapsed listing to `parent`.
    fn append_projects(
        &self,
        tree: &mut SolutionTree,
        parent: EntryId,
        listing: Vec<Listing>,
    ) -> Result<(), SlnError> {
        for entry in listing {
            if self.rules.is_project(&entry.name) {
                tree.append(parent, entry.path, entry.name, EntryKind::Project)?;
            } else {
                debug!(path = %entry.path.display(), "Discarding entry beside project file");
            }
        }
        Ok(())
    }

    fn contains_projects(&self, listing: &[Listing]) -> bool {
        listing.iter().any(|entry| self.rules.is_project(&entry.name))
    }
}

/// Collect the solution tree rooted at `root`
pub fn collect(root: PathBuf) -> Result<SolutionTree, SlnError> {
    TreeBuilder::new(root).build()
}
