//! CLI command implementations.

mod build;
pub mod config;
mod repos;

pub use build::{BuildOptions, BuildReport, build};
pub use repos::{format_view, repos};
