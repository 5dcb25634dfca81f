//! Testing infrastructure for roomsift integration tests.
//!
//! - `TestWorld`: isolated temp directory with item sources and a config file
//! - `assertions`: checks over the CLI's JSON output
//! - `fixtures`: sample item sources

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
