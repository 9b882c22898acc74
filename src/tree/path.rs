//! Path resolution and relative path utilities

use crate::error::SlnError;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Resolve the directory argument to an absolute directory path
///
/// The path is made absolute and `.`/`..` are folded lexically; symbolic
/// links are kept as given, so a linked directory names the solution after
/// the link. Fails with `NotADirectory` (naming the argument as given) when
/// the path does not exist or is not a directory.
pub fn resolve_directory(arg: &Path) -> Result<PathBuf, SlnError> {
    let not_a_directory = || SlnError::NotADirectory(arg.display().to_string());

    let absolute = std::path::absolute(arg).map_err(|_| not_a_directory())?;
    // dunce strips \\?\ prefixes on Windows and is a no-op elsewhere
    let resolved = dunce::simplified(&normalize_lexically(&absolute)).to_path_buf();
    if !resolved.is_dir() {
        return Err(not_a_directory());
    }

    Ok(PathBuf::from(trim_trailing_separators(
        &resolved.to_string_lossy(),
    )))
}

/// Fold `.` and `..` components without touching the filesystem
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Remove trailing path separators (except for a bare root)
pub fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(&['/', '\\'][..]);
    if trimmed.is_empty() && !path.is_empty() {
        &path[..1]
    } else {
        trimmed
    }
}

/// Base name of a directory path, used as the root entry and solution name
pub fn directory_name(dir: &Path) -> Result<String, SlnError> {
    let trimmed = PathBuf::from(trim_trailing_separators(&dir.to_string_lossy()));
    trimmed
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            SlnError::InvalidPath(format!("{} has no directory name", dir.display()))
        })
}

/// Path of `path` relative to `root`, joined with the platform separator
///
/// The result keeps the leading separator (`/docs/a.md`, `\\docs\\a.md` on
/// Windows); `root` itself maps to `""`.
pub fn relative_path(root: &Path, path: &Path) -> Result<String, SlnError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        SlnError::InvalidPath(format!(
            "{} is not inside {}",
            path.display(),
            root.display()
        ))
    })?;

    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    Ok(parts
        .iter()
        .map(|part| format!("{}{}", MAIN_SEPARATOR, part))
        .collect())
}
