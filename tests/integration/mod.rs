//! Integration tests for solution generation

mod cli;
mod determinism;
