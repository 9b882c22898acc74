//! Solution entry types and the arena that owns them

use crate::error::SlnError;
use crate::guid;
use crate::tree::path;
use std::path::{Path, PathBuf};

/// Handle of an entry inside a [`SolutionTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

/// Entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Project,
}

impl EntryKind {
    fn marker(self) -> char {
        match self {
            EntryKind::Directory => 'D',
            EntryKind::File => 'F',
            EntryKind::Project => 'P',
        }
    }
}

/// One filesystem node included in the solution
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    pub parent: Option<EntryId>,
    pub children: Vec<EntryId>, // listing order
    /// Path relative to the root, `""` for the root itself
    pub relative_path: String,
    pub guid: String,
}

/// Arena of solution entries
///
/// Entries are only ever appended to their final parent, so the tree never
/// needs to undo a partially built subtree. The root is always `EntryId(0)`.
#[derive(Debug, Clone)]
pub struct SolutionTree {
    entries: Vec<Entry>,
}

impl SolutionTree {
    /// Create a tree holding only the root directory entry
    ///
    /// The root GUID is derived from its name: every root has the same empty
    /// relative path.
    pub fn new(root_path: PathBuf, name: String) -> Self {
        let root = Entry {
            path: root_path,
            guid: guid::identifier(&name),
            name,
            kind: EntryKind::Directory,
            parent: None,
            children: Vec::new(),
            relative_path: String::new(),
        };
        Self {
            entries: vec![root],
        }
    }

    pub fn root(&self) -> EntryId {
        EntryId(0)
    }

    pub fn root_entry(&self) -> &Entry {
        &self.entries[0]
    }

    pub fn root_path(&self) -> &Path {
        &self.entries[0].path
    }

    pub fn get(&self, id: EntryId) -> &Entry {
        &self.entries[id.0]
    }

    /// Number of entries, root included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry as the last child of `parent`
    ///
    /// Relative path and GUID are computed here, once.
    pub fn append(
        &mut self,
        parent: EntryId,
        entry_path: PathBuf,
        name: String,
        kind: EntryKind,
    ) -> Result<EntryId, SlnError> {
        let relative_path = path::relative_path(self.root_path(), &entry_path)?;
        let id = EntryId(self.entries.len());

        self.entries.push(Entry {
            path: entry_path,
            name,
            kind,
            parent: Some(parent),
            children: Vec::new(),
            guid: guid::identifier(&relative_path),
            relative_path,
        });
        self.entries[parent.0].children.push(id);

        Ok(id)
    }

    /// Children of an entry, in listing order
    pub fn children(&self, id: EntryId) -> impl Iterator<Item = (EntryId, &Entry)> + '_ {
        self.entries[id.0]
            .children
            .iter()
            .map(move |child| (*child, &self.entries[child.0]))
    }

    /// All entries in depth-first pre-order, starting at the root
    pub fn preorder(&self) -> Vec<EntryId> {
        let mut order = Vec::with_capacity(self.entries.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.entries[id.0].children.iter().rev().copied());
        }
        order
    }

    /// Project entries in tree traversal order
    pub fn projects(&self) -> Vec<EntryId> {
        self.preorder()
            .into_iter()
            .filter(|id| self.get(*id).kind == EntryKind::Project)
            .collect()
    }

    /// Count entries of the given kind
    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Render the tree as an indented outline (`D`, `F`, `P` markers)
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_entry(self.root(), 0, &mut out);
        out
    }

    fn render_entry(&self, id: EntryId, depth: usize, out: &mut String) {
        let entry = self.get(id);
        out.push_str(&"  ".repeat(depth));
        out.push(entry.kind.marker());
        out.push(' ');
        out.push_str(&entry.name);
        out.push('\n');

        for child in &entry.children {
            self.render_entry(*child, depth + 1, out);
        }
    }
}
