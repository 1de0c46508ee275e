//! Quickstart generates the skeleton of a maven application project.
//! It creates the directory tree and renders a build manifest and a
//! starter main class from bundled `{{name}}` templates.

/// Command-line interface module for the quickstart application
pub mod cli;

/// Project identifiers, their validation and the derived template model
pub mod config;

/// Bundled templates, model keys and defaults
pub mod constants;

/// Error types and handling for the quickstart application
pub mod error;

/// Directory layout and file generation
pub mod generator;

pub mod logger;

/// Template renderer trait and its placeholder-based implementation
pub mod renderer;

/// Placeholder scanning and substitution
pub mod template;
