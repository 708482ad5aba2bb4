//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use pypkg::util::shell::ColorChoice;
use pypkg::Artifact;

/// pypkg - Python packaging files for generated bindings
#[derive(Parser)]
#[command(name = "pypkg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    /// Output format for messages
    #[arg(long, global = true, value_enum, default_value_t = MessageFormat::Human)]
    pub message_format: MessageFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write setup.py, MANIFEST.in, LICENSE, README.md and Makefile
    Setup(SetupArgs),

    /// Print one rendered packaging file to stdout
    Render(RenderArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Package metadata shared by `setup` and `render`.
#[derive(Args, Debug, Clone)]
pub struct MetadataArgs {
    /// Package name
    pub name: String,

    /// User qualifier appended to the distribution name
    #[arg(long)]
    pub user: Option<String>,

    /// Package version
    #[arg(long = "pkg-version", value_name = "VERSION")]
    pub pkg_version: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Author email
    #[arg(long)]
    pub email: Option<String>,

    /// One-line package description
    #[arg(long)]
    pub description: Option<String>,

    /// Project url
    #[arg(long)]
    pub url: Option<String>,

    /// Command that regenerates the bindings (defaults to the matching `pypkg setup`)
    #[arg(long = "cmd", value_name = "CMD")]
    pub gen_command: Option<String>,

    /// Python interpreter for the Makefile (defaults to python3 on PATH)
    #[arg(long, value_name = "PATH", env = "PYPKG_PYTHON")]
    pub python: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SetupArgs {
    #[command(flatten)]
    pub meta: MetadataArgs,

    /// Directory holding the generated bindings
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Show what would be written without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// File to render (setup.py, MANIFEST.in, LICENSE, README.md, Makefile)
    pub artifact: Artifact,

    #[command(flatten)]
    pub meta: MetadataArgs,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
