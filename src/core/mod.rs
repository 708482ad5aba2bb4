//! Core data types for pypkg.

pub mod gencmd;
pub mod metadata;
pub mod templates;

pub use gencmd::makefile_gen_command;
pub use metadata::PkgMetadata;
pub use templates::Artifact;
