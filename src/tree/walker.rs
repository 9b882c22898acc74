//! Directory listing for the tree builder

use crate::error::SlnError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One immediate child of a listed directory
#[derive(Debug, Clone)]
pub struct Listing {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

/// List the immediate children of `dir`
///
/// Order is whatever the filesystem returns. Symbolic links are not
/// followed; a link is classified by its own file type.
pub fn list_children(dir: &Path) -> Result<Vec<Listing>, SlnError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    let mut children = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| SlnError::ListDirectory {
            path: e.path().unwrap_or(dir).to_path_buf(),
            source: e.into(),
        })?;

        children.push(Listing {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: entry.file_type().is_dir(),
            path: entry.into_path(),
        });
    }

    Ok(children)
}
