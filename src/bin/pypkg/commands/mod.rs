//! Command implementations

pub mod completions;
pub mod render;
pub mod setup;

use std::path::Path;

use pypkg::core::gencmd::join_command;
use pypkg::core::metadata::DEFAULT_VERSION;
use pypkg::util::python::resolve_interpreter;
use pypkg::util::Config;
use pypkg::PkgMetadata;

use crate::cli::MetadataArgs;

/// Combine command-line values with config defaults.
///
/// Command-line values win over config, config wins over built-in defaults.
/// Without `--cmd`, the generation command is the [`setup_command`] that
/// reproduces the resolved metadata.
pub fn build_metadata(args: &MetadataArgs, config: &Config) -> PkgMetadata {
    let defaults = &config.package;

    let interpreter = resolve_interpreter(
        args.python
            .clone()
            .or_else(|| config.python.interpreter.clone()),
    );

    let mut meta = PkgMetadata {
        name: args.name.clone(),
        user: pick(&args.user, &defaults.user),
        version: args
            .pkg_version
            .clone()
            .or_else(|| defaults.version.clone())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        author: pick(&args.author, &defaults.author),
        email: pick(&args.email, &defaults.email),
        description: args.description.clone().unwrap_or_default(),
        url: pick(&args.url, &defaults.url),
        gen_command: String::new(),
        interpreter: interpreter.to_string_lossy().into_owned(),
    };

    meta.gen_command = match &args.gen_command {
        Some(cmd) => cmd.clone(),
        None => setup_command(&meta),
    };
    meta
}

fn pick(arg: &Option<String>, default: &Option<String>) -> String {
    arg.as_ref().or(default.as_ref()).cloned().unwrap_or_default()
}

/// The `pypkg setup` command line that writes `meta` into the current
/// directory.
///
/// Every resolved value is spelled out, so running it later from the package
/// directory gives the same files whatever config is around. Empty values
/// are left out and words are shell-quoted where needed.
pub fn setup_command(meta: &PkgMetadata) -> String {
    let mut words = vec![
        program_name(),
        "setup".to_string(),
        "--output=.".to_string(),
        meta.name.clone(),
    ];

    let flags = [
        ("--user", &meta.user),
        ("--pkg-version", &meta.version),
        ("--author", &meta.author),
        ("--email", &meta.email),
        ("--description", &meta.description),
        ("--url", &meta.url),
        ("--python", &meta.interpreter),
    ];
    for (flag, value) in flags {
        if !value.is_empty() {
            words.push(flag.to_string());
            words.push(value.clone());
        }
    }

    join_command(words)
}

/// File name this process was started as.
///
/// Reduced to the file name so the generated Makefile does not depend on
/// where pypkg happened to be installed.
fn program_name() -> String {
    std::env::args()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "pypkg".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse_meta(args: &[&str]) -> MetadataArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            meta: MetadataArgs,
        }
        TestCli::parse_from(args).meta
    }

    #[test]
    fn test_cli_values_win() {
        let args = parse_meta(&[
            "test",
            "mypkg",
            "--author",
            "Cli",
            "--pkg-version",
            "3.0",
            "--python",
            "/usr/bin/python3",
        ]);
        let mut config = Config::default();
        config.package.author = Some("Config".to_string());
        config.package.version = Some("2.0".to_string());

        let meta = build_metadata(&args, &config);
        assert_eq!(meta.name, "mypkg");
        assert_eq!(meta.author, "Cli");
        assert_eq!(meta.version, "3.0");
        assert_eq!(meta.interpreter, "/usr/bin/python3");
    }

    #[test]
    fn test_config_fills_gaps() {
        let args = parse_meta(&["test", "mypkg", "--python", "python3"]);
        let mut config = Config::default();
        config.package.author = Some("Config".to_string());
        config.package.email = Some("c@example.com".to_string());
        config.package.user = Some("bob".to_string());

        let meta = build_metadata(&args, &config);
        assert_eq!(meta.author, "Config");
        assert_eq!(meta.email, "c@example.com");
        assert_eq!(meta.dist_name(), "mypkg-bob");
        assert_eq!(meta.version, DEFAULT_VERSION);
        assert_eq!(meta.url, "");
        assert_eq!(meta.description, "");
    }

    #[test]
    fn test_config_interpreter() {
        let args = parse_meta(&["test", "mypkg"]);
        let mut config = Config::default();
        config.python.interpreter = Some(PathBuf::from("/opt/py/bin/python3.12"));

        let meta = build_metadata(&args, &config);
        assert_eq!(meta.interpreter_name(), "python3.12");
    }

    #[test]
    fn test_gen_command_defaults_to_setup_command() {
        let args = parse_meta(&[
            "test",
            "mypkg",
            "--python",
            "python3",
            "--description",
            "my great pkg",
        ]);
        let meta = build_metadata(&args, &Config::default());

        let words = shell_words::split(&meta.gen_command).unwrap();
        assert_eq!(
            words[1..],
            [
                "setup",
                "--output=.",
                "mypkg",
                "--pkg-version",
                DEFAULT_VERSION,
                "--description",
                "my great pkg",
                "--python",
                "python3",
            ]
        );
    }

    #[test]
    fn test_setup_command_spells_out_config_values() {
        let args = parse_meta(&["test", "mypkg", "--python", "python3"]);
        let mut config = Config::default();
        config.package.user = Some("bob".to_string());
        config.package.author = Some("Jane Doe".to_string());

        let meta = build_metadata(&args, &config);
        let words = shell_words::split(&meta.gen_command).unwrap();
        assert!(words.windows(2).any(|w| w == ["--user", "bob"]));
        assert!(words.windows(2).any(|w| w == ["--author", "Jane Doe"]));
        assert!(!words.contains(&"--url".to_string()));
    }

    #[test]
    fn test_explicit_cmd_wins() {
        let args = parse_meta(&["test", "mypkg", "--python", "python3", "--cmd", "gopy pkg x"]);
        let meta = build_metadata(&args, &Config::default());
        assert_eq!(meta.gen_command, "gopy pkg x");
    }

    #[test]
    fn test_program_name_is_bare() {
        let name = program_name();
        assert!(!name.is_empty());
        assert!(!name.contains(std::path::MAIN_SEPARATOR));
    }
}
