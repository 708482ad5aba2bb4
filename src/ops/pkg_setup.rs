//! Implementation of `pypkg setup`.
//!
//! Writes the packaging files that turn a directory of generated bindings
//! into a pip-installable Python distribution.

use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic as MietteDiagnostic;
use serde::Serialize;
use thiserror::Error;

use crate::core::metadata::PkgMetadata;
use crate::core::templates::Artifact;
use crate::util::diagnostic::Diagnostic;
use crate::util::fs::{read_if_exists, write_atomic};

/// Options for generating the packaging files.
#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    /// Render and report without writing anything
    pub dry_run: bool,
}

impl SetupOptions {
    /// Set dry run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// The file did not exist before
    Created,
    /// The file existed with different contents
    Updated,
    /// The file already had exactly the rendered contents
    Unchanged,
}

/// A generated packaging file.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFile {
    pub artifact: Artifact,
    pub path: PathBuf,
    pub status: FileStatus,
    /// Size of the rendered contents in bytes
    pub bytes: usize,
}

/// Result of generating the packaging files.
#[derive(Debug, Clone, Serialize)]
pub struct SetupResult {
    /// Directory the files were written to
    pub output_dir: PathBuf,

    /// Files in write order
    pub files: Vec<GeneratedFile>,

    /// Whether this was a dry run
    pub dry_run: bool,
}

impl SetupResult {
    /// Look up the entry for one artifact.
    pub fn file(&self, artifact: Artifact) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.artifact == artifact)
    }

    /// Number of files that were (or would be) created or updated.
    pub fn changed(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status != FileStatus::Unchanged)
            .count()
    }
}

/// Error while generating the packaging files.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum SetupError {
    #[error("output directory `{}` does not exist", .0.display())]
    #[diagnostic(
        code(pypkg::setup::missing_output_dir),
        help("create the directory first, or pass `--output` pointing at the generated bindings")
    )]
    MissingOutputDir(PathBuf),

    #[error("output path `{}` is not a directory", .0.display())]
    #[diagnostic(
        code(pypkg::setup::not_a_directory),
        help("pass `--output` pointing at the directory holding the generated bindings")
    )]
    NotADirectory(PathBuf),

    #[error("failed to write `{artifact}` to {}", .path.display())]
    #[diagnostic(
        code(pypkg::setup::write_failed),
        help("check permissions and free space in the output directory")
    )]
    Write {
        artifact: Artifact,
        path: PathBuf,
        source: io::Error,
    },
}

impl SetupError {
    /// Convert to a user-friendly diagnostic.
    ///
    /// Code and help text come from the `miette` attributes above.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.to_string());

        if let Some(code) = MietteDiagnostic::code(self) {
            diag = diag.with_code(code.to_string());
        }

        diag = match self {
            SetupError::MissingOutputDir(path) | SetupError::NotADirectory(path) => {
                diag.with_location(path)
            }
            SetupError::Write { path, source, .. } => diag
                .with_location(path)
                .with_context(source.to_string()),
        };

        if let Some(help) = MietteDiagnostic::help(self) {
            diag = diag.with_suggestion(help.to_string());
        }
        diag
    }
}

/// Render every artifact for `meta`, in write order.
pub fn render_all(meta: &PkgMetadata) -> Vec<(Artifact, String)> {
    Artifact::ALL
        .iter()
        .map(|artifact| (*artifact, artifact.render(meta)))
        .collect()
}

/// Generate `setup.py`, `MANIFEST.in`, `LICENSE`, `README.md` and `Makefile`
/// in `output_dir`.
///
/// The directory must already exist. Files are written one at a time in that
/// order; the first failure is returned immediately and files written before
/// it are left in place. Each file is replaced atomically, so a failed write
/// never leaves a truncated file behind.
pub fn generate_pkg_setup(
    output_dir: &Path,
    meta: &PkgMetadata,
    opts: &SetupOptions,
) -> Result<SetupResult, SetupError> {
    if !output_dir.exists() {
        return Err(SetupError::MissingOutputDir(output_dir.to_path_buf()));
    }
    if !output_dir.is_dir() {
        return Err(SetupError::NotADirectory(output_dir.to_path_buf()));
    }

    let mut files = Vec::with_capacity(Artifact::ALL.len());

    for (artifact, contents) in render_all(meta) {
        let path = output_dir.join(artifact.file_name());
        let status = existing_status(&path, contents.as_bytes());

        if !opts.dry_run && status != FileStatus::Unchanged {
            write_atomic(&path, contents.as_bytes()).map_err(|source| SetupError::Write {
                artifact,
                path: path.clone(),
                source,
            })?;
            tracing::debug!("wrote {} ({} bytes)", path.display(), contents.len());
        }

        files.push(GeneratedFile {
            artifact,
            path,
            status,
            bytes: contents.len(),
        });
    }

    Ok(SetupResult {
        output_dir: output_dir.to_path_buf(),
        files,
        dry_run: opts.dry_run,
    })
}

/// Compare what is on disk at `path` against the rendered contents.
fn existing_status(path: &Path, rendered: &[u8]) -> FileStatus {
    match read_if_exists(path) {
        Ok(None) => FileStatus::Created,
        Ok(Some(current)) if current == rendered => FileStatus::Unchanged,
        Ok(Some(_)) => FileStatus::Updated,
        Err(e) => {
            // The write that follows reports the real error, if any.
            tracing::debug!("could not read existing {}: {}", path.display(), e);
            FileStatus::Updated
        }
    }
}
