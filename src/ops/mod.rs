//! High-level operations.
//!
//! This module contains the implementation of pypkg commands.

pub mod pkg_setup;

pub use pkg_setup::{
    generate_pkg_setup, render_all, FileStatus, GeneratedFile, SetupError, SetupOptions,
    SetupResult,
};
