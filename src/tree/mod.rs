//! Solution Tree
//!
//! Represents the scanned directory as an arena of typed entries (directories,
//! files, projects), each with a deterministic GUID derived from its path
//! relative to the root.

pub mod builder;
pub mod node;
pub mod path;
pub mod walker;
