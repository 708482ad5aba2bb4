//! `pypkg setup` command

use anyhow::Result;

use pypkg::ops::pkg_setup::{generate_pkg_setup, FileStatus, SetupOptions, SetupResult};
use pypkg::util::shell::{Shell, Status};
use pypkg::util::Config;
use pypkg::PkgMetadata;

use super::build_metadata;
use crate::cli::SetupArgs;

pub fn execute(args: SetupArgs, shell: &Shell, config: &Config) -> Result<()> {
    let meta = build_metadata(&args.meta, config);

    for warning in meta.lint() {
        shell.diagnostic(&warning);
    }

    shell.verbose(
        Status::Generating,
        format!(
            "packaging files for `{}` in {}",
            meta.dist_name(),
            args.output.display()
        ),
    );

    let opts = SetupOptions::default().with_dry_run(args.dry_run);
    let result = generate_pkg_setup(&args.output, &meta, &opts)?;

    report(shell, &meta, &result);
    Ok(())
}

/// Print the outcome for each file, or one JSON event in JSON mode.
fn report(shell: &Shell, meta: &PkgMetadata, result: &SetupResult) {
    if shell.is_json() {
        shell.json_event(&serde_json::json!({
            "reason": "pkg-setup",
            "package": meta,
            "output_dir": result.output_dir.display().to_string(),
            "dry_run": result.dry_run,
            "files": result.files,
        }));
        return;
    }

    for file in &result.files {
        let msg = format!("{} ({} bytes)", file.path.display(), file.bytes);
        match file.status {
            FileStatus::Created => shell.status(Status::Created, msg),
            FileStatus::Updated => shell.status(Status::Updated, msg),
            FileStatus::Unchanged => shell.verbose(Status::Unchanged, msg),
        }
    }

    if result.dry_run {
        shell.status(
            Status::Info,
            format!("dry run: {} file(s) would change", result.changed()),
        );
    } else {
        shell.status(
            Status::Finished,
            format!(
                "`{}` packaging files in {}",
                meta.dist_name(),
                result.output_dir.display()
            ),
        );
    }
}
