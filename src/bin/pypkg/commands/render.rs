//! `pypkg render` command
//!
//! Prints a single rendered packaging file to stdout without touching disk.

use std::io::{self, Write};

use anyhow::{Context, Result};

use pypkg::util::shell::Shell;
use pypkg::util::Config;

use super::build_metadata;
use crate::cli::RenderArgs;

pub fn execute(args: RenderArgs, shell: &Shell, config: &Config) -> Result<()> {
    let meta = build_metadata(&args.meta, config);

    for warning in meta.lint() {
        shell.diagnostic(&warning);
    }

    let contents = args.artifact.render(&meta);

    if shell.is_json() {
        shell.json_event(&serde_json::json!({
            "reason": "render",
            "artifact": args.artifact,
            "file_name": args.artifact.file_name(),
            "contents": contents,
        }));
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(contents.as_bytes())
        .and_then(|_| stdout.flush())
        .with_context(|| format!("failed to write {} to stdout", args.artifact))
}
