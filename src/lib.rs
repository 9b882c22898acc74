//! slngen: Deterministic Solution File Generation
//!
//! Scans a directory tree and writes a Visual Studio solution file that
//! mirrors its folders, files and projects. Every entry gets a GUID derived
//! from its path relative to the scanned root, so repeated runs over an
//! unchanged tree produce identical output.

pub mod cli;
pub mod config;
pub mod error;
pub mod guid;
pub mod ignore;
pub mod logging;
pub mod tree;
pub mod writer;
