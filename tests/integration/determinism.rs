//! Determinism of identifiers and generated documents

use super::test_utils::{named_root, write_file};
use proptest::prelude::*;
use slngen::cli::RunContext;
use slngen::guid;
use slngen::tree::builder::TreeBuilder;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn is_guid_text(value: &str) -> bool {
    let groups = [8usize, 4, 4, 4, 12];
    let Some(inner) = value.strip_prefix('{').and_then(|v| v.strip_suffix('}')) else {
        return false;
    };
    let parts: Vec<&str> = inner.split('-').collect();
    parts.len() == groups.len()
        && parts.iter().zip(groups).all(|(part, len)| {
            part.len() == len
                && part
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        })
}

proptest! {
    #[test]
    fn prop_identifier_is_pure_and_well_formed(input in any::<String>()) {
        let first = guid::identifier(&input);
        let second = guid::identifier(&input);
        prop_assert_eq!(&first, &second);
        prop_assert!(is_guid_text(&first), "malformed identifier {}", first);
    }

    #[test]
    fn prop_distinct_inputs_distinct_identifiers(a in ".{0,40}", b in ".{0,40}") {
        prop_assume!(a != b);
        prop_assert_ne!(guid::identifier(&a), guid::identifier(&b));
    }
}

/// No two entries of a large synthetic tree share an identifier
#[test]
fn test_no_identifier_collisions_in_large_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = named_root(&temp_dir, "big");

    for a in 0..10 {
        for b in 0..10 {
            for c in 0..5 {
                write_file(&root, &format!("d{}/d{}/f{}.txt", a, b, c), "x");
            }
            if b % 3 == 0 {
                write_file(&root, &format!("d{}/d{}/p/P{}{}.csproj", a, b, a, b), "<Project />");
            }
        }
    }

    let tree = TreeBuilder::new(root).build().unwrap();
    assert!(tree.len() > 600);

    let mut seen = HashSet::new();
    for id in tree.preorder() {
        let entry = tree.get(id);
        assert!(
            seen.insert(entry.guid.clone()),
            "duplicate identifier for {}",
            entry.relative_path
        );
    }
}

/// Two runs over an unchanged tree write byte-identical files
#[test]
fn test_repeated_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let root = named_root(&temp_dir, "Stable");

    write_file(&root, "src/App/App.csproj", "<Project />");
    write_file(&root, "src/Lib/Lib.csproj", "<Project />");
    write_file(&root, "docs/guide.md", "guide");
    write_file(&root, "README.md", "readme");

    let context = RunContext::new(Some(root.as_path())).unwrap();
    context.execute().unwrap();
    let first = fs::read(context.output_path()).unwrap();

    // The first output now sits in the tree; it must not change the second.
    context.execute().unwrap();
    let second = fs::read(context.output_path()).unwrap();

    assert_eq!(first, second);
}

/// The same layout under a different parent path yields the same document
#[test]
fn test_document_independent_of_location() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();

    let mut documents = Vec::new();
    for temp_dir in [&first_dir, &second_dir] {
        let root = named_root(temp_dir, "Portable");
        write_file(&root, "tools/Tool.csproj", "<Project />");
        write_file(&root, "notes/todo.md", "todo");

        let tree = TreeBuilder::new(root).build().unwrap();
        documents.push(slngen::writer::write_solution(&tree));
    }

    assert_eq!(documents[0], documents[1]);
}
