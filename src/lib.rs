//! pypkg - Python packaging files for generated bindings
//!
//! This crate emits the files that make a directory of generated language
//! bindings installable with pip: `setup.py`, `MANIFEST.in`, `LICENSE`,
//! `README.md` and a `Makefile`.

pub mod core;
pub mod ops;
pub mod util;

pub use core::{metadata::PkgMetadata, templates::Artifact};

pub use ops::{generate_pkg_setup, SetupError, SetupOptions, SetupResult};
