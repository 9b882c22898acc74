//! Solution document writer
//!
//! Serializes a [`SolutionTree`] into the line-oriented `.sln` format:
//! a fixed header, one `Project(...)` block per directory and project entry
//! in pre-order, and a trailing `Global` section with build configurations,
//! solution properties and the folder nesting map. Consumers parse this
//! format strictly, so section names, field order and tab indentation are
//! emitted exactly.

use crate::error::SlnError;
use crate::guid;
use crate::tree::node::{EntryId, EntryKind, SolutionTree};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Project type GUID of a solution folder
pub const SOLUTION_FOLDER_GUID: &str = "{2150E333-8FDC-42A3-9474-1A3956D46DE8}";

/// Project type GUID used for project entries
pub const PROJECT_ENTRY_GUID: &str = "{9A19103F-16F7-4668-BE54-9A1E7A4F7556}";

/// Build configuration/platform pairs declared for every project
pub const BUILD_CONFIGURATIONS: &[&str] = &["Debug|Any CPU", "Release|Any CPU"];

/// Extension of generated solution files
pub const SOLUTION_EXTENSION: &str = ".sln";

const HEADER: &[&str] = &[
    "Microsoft Visual Studio Solution File, Format Version 12.00",
    "# Visual Studio Version 16",
    "VisualStudioVersion = 16.0.30611.23",
    "MinimumVisualStudioVersion = 10.0.40219.1",
];

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Render the solution document for a tree
pub fn write_solution(tree: &SolutionTree) -> String {
    let mut writer = SolutionWriter::new(tree);
    writer.write_header();
    writer.write_entry(tree.root());
    writer.write_global();
    writer.out
}

/// Render the solution document and write it to `output_path`
///
/// An existing file is overwritten.
#[instrument(skip(tree), fields(path = %output_path.display()))]
pub fn write_solution_file(output_path: &Path, tree: &SolutionTree) -> Result<(), SlnError> {
    let document = write_solution(tree);
    fs::write(output_path, &document).map_err(|e| SlnError::WriteOutput {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    debug!(bytes = document.len(), "Solution file written");
    Ok(())
}

struct SolutionWriter<'a> {
    tree: &'a SolutionTree,
    out: String,
}

impl<'a> SolutionWriter<'a> {
    fn new(tree: &'a SolutionTree) -> Self {
        Self {
            tree,
            out: String::with_capacity(1024),
        }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push_str(LINE_ENDING);
    }

    fn write_header(&mut self) {
        for line in HEADER {
            self.line(line);
        }
    }

    fn write_entry(&mut self, id: EntryId) {
        let tree = self.tree;
        let entry = tree.get(id);

        match entry.kind {
            EntryKind::Directory => {
                // Folders use their name as the path token, not a real path
                self.line(&format!(
                    "Project(\"{}\") = \"{}\", \"{}\", \"{}\"",
                    SOLUTION_FOLDER_GUID, entry.name, entry.name, entry.guid
                ));

                let files: Vec<&str> = tree
                    .children(id)
                    .filter(|(_, child)| child.kind == EntryKind::File)
                    .map(|(_, child)| child.relative_path.as_str())
                    .collect();

                if !files.is_empty() {
                    self.line("\tProjectSection(SolutionItems) = preProject");
                    for file in files {
                        self.line(&format!("\t\t{} = {}", file, file));
                    }
                    self.line("\tEndProjectSection");
                }

                self.line("EndProject");

                for (child_id, child) in tree.children(id) {
                    if child.kind != EntryKind::File {
                        self.write_entry(child_id);
                    }
                }
            }
            EntryKind::Project => {
                self.line(&format!(
                    "Project(\"{}\") = \"{}\", \"{}\", \"{}\"",
                    PROJECT_ENTRY_GUID, entry.name, entry.relative_path, entry.guid
                ));
                self.line("EndProject");
            }
            EntryKind::File => {}
        }
    }

    fn write_global(&mut self) {
        let tree = self.tree;

        self.line("Global");

        self.line("\tGlobalSection(SolutionConfigurationPlatforms) = preSolution");
        for config in BUILD_CONFIGURATIONS {
            self.line(&format!("\t\t{} = {}", config, config));
        }
        self.line("\tEndGlobalSection");

        self.line("\tGlobalSection(ProjectConfigurationPlatforms) = postSolution");
        for project in tree.projects() {
            let project_guid = &tree.get(project).guid;
            for config in BUILD_CONFIGURATIONS {
                self.line(&format!("\t\t{}.{}.ActiveCfg = {}", project_guid, config, config));
                self.line(&format!("\t\t{}.{}.Build.0 = {}", project_guid, config, config));
            }
        }
        self.line("\tEndGlobalSection");

        self.line("\tGlobalSection(SolutionProperties) = preSolution");
        self.line("\t\tHideSolutionNode = FALSE");
        self.line("\tEndGlobalSection");

        self.line("\tGlobalSection(NestedProjects) = preSolution");
        for (child_id, child) in tree.children(tree.root()) {
            if child.kind != EntryKind::File {
                self.write_nested(child_id);
            }
        }
        self.line("\tEndGlobalSection");

        let root_name = &tree.root_entry().name;
        self.line("\tGlobalSection(ExtensibilityGlobals) = postSolution");
        self.line(&format!(
            "\t\tSolutionGuid = {}",
            guid::identifier(&format!("{}{}", root_name, SOLUTION_EXTENSION))
        ));
        self.line("\tEndGlobalSection");

        self.line("EndGlobal");
    }

    fn write_nested(&mut self, id: EntryId) {
        let tree = self.tree;
        let entry = tree.get(id);

        if let Some(parent) = entry.parent {
            self.line(&format!("\t\t{} = {}", entry.guid, tree.get(parent).guid));
        }

        for (child_id, child) in tree.children(id) {
            if child.kind != EntryKind::File {
                self.write_nested(child_id);
            }
        }
    }
}
