//! Ignore rules and project detection for the tree collector.
//!
//! The rules are fixed tables: entry names that are never part of a
//! solution (version control, IDE state, build output, vendored extensions)
//! and extensions of files the tool itself produces. Project detection is a
//! case-sensitive suffix test on the bare entry name.

/// Entry names skipped during collection.
pub const IGNORED_NAMES: &[&str] = &[".git", ".vs", "bin", "obj", "ext"];

/// Extensions (with leading dot) skipped during collection.
pub const IGNORED_EXTENSIONS: &[&str] = &[".sln"];

/// Suffix that marks an entry as a project file.
pub const PROJECT_SUFFIX: &str = ".csproj";

/// Rules applied to every immediate child of a visited directory.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    names: Vec<String>,
    extensions: Vec<String>,
    project_suffix: String,
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self {
            names: IGNORED_NAMES.iter().map(|s| s.to_string()).collect(),
            extensions: IGNORED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            project_suffix: PROJECT_SUFFIX.to_string(),
        }
    }
}

impl IgnoreRules {
    /// True if the entry must not appear in the tree.
    pub fn is_ignored(&self, name: &str) -> bool {
        if self.names.iter().any(|n| n == name) {
            return true;
        }

        match extension_with_dot(name) {
            Some(ext) => self.extensions.iter().any(|e| e == ext),
            None => false,
        }
    }

    /// True if the entry is a project file.
    pub fn is_project(&self, name: &str) -> bool {
        name.ends_with(self.project_suffix.as_str())
    }
}

/// Extension of a bare name including the leading dot (`"a.sln"` -> `".sln"`).
///
/// Everything from the last dot counts, so a dotfile is all extension; a
/// trailing dot yields none.
fn extension_with_dot(name: &str) -> Option<&str> {
    let dot = name.rfind('.')?;
    if dot + 1 == name.len() {
        return None;
    }
    Some(&name[dot..])
}
