//! Package metadata substituted into the packaging templates.

use serde::{Deserialize, Serialize};

use crate::util::diagnostic::Diagnostic;

/// Separator placed between the package name and the user qualifier.
pub const USER_SEPARATOR: char = '-';

/// Version used when neither the caller nor the config supplies one.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// The flat set of parameters a bindings package is described by.
///
/// All fields are plain strings and are substituted into the templates
/// verbatim. Nothing here is escaped: a double quote in `description` ends
/// up as a double quote inside `setup.py`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PkgMetadata {
    /// Package name
    pub name: String,

    /// Optional user qualifier appended to the distribution name
    pub user: String,

    /// Package version
    pub version: String,

    /// Author name
    pub author: String,

    /// Author email
    pub email: String,

    /// One-line description
    pub description: String,

    /// Project homepage
    pub url: String,

    /// Command line that generated the bindings
    pub gen_command: String,

    /// Path to the Python interpreter
    pub interpreter: String,
}

impl PkgMetadata {
    /// Create metadata for a package with every other field empty.
    pub fn new(name: impl Into<String>) -> Self {
        PkgMetadata {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>, email: impl Into<String>) -> Self {
        self.author = author.into();
        self.email = email.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_gen_command(mut self, cmd: impl Into<String>) -> Self {
        self.gen_command = cmd.into();
        self
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// The user qualifier with its leading separator, or an empty string.
    pub fn user_suffix(&self) -> String {
        if self.user.is_empty() {
            String::new()
        } else {
            format!("{}{}", USER_SEPARATOR, self.user)
        }
    }

    /// Distribution name as it appears in `setup.py`.
    pub fn dist_name(&self) -> String {
        format!("{}{}", self.name, self.user_suffix())
    }

    /// Final component of the interpreter path.
    ///
    /// Everything after the last path separator, so a path ending in a
    /// separator yields an empty name.
    pub fn interpreter_name(&self) -> &str {
        self.interpreter
            .rsplit(std::path::is_separator)
            .next()
            .unwrap_or("")
    }

    /// Check for inputs that render into a broken artifact.
    ///
    /// Returns warnings only. The metadata is never modified.
    pub fn lint(&self) -> Vec<Diagnostic> {
        let mut warnings = Vec::new();

        if self.name.trim().is_empty() {
            warnings.push(
                Diagnostic::warning("package name is empty")
                    .with_suggestion("Pass the name of the package the bindings were generated for"),
            );
        }

        let quoted = [
            ("name", &self.name),
            ("user", &self.user),
            ("version", &self.version),
            ("author", &self.author),
            ("email", &self.email),
            ("description", &self.description),
            ("url", &self.url),
        ];
        for (field, value) in quoted {
            if value.contains('"') || value.contains('\\') {
                warnings.push(
                    Diagnostic::warning(format!(
                        "`{}` contains a quote or backslash and will break setup.py",
                        field
                    ))
                    .with_context(format!("{} = {}", field, value))
                    .with_suggestion("Remove or escape the character before generating"),
                );
            }
        }

        if !self.url.is_empty() {
            if let Err(e) = url::Url::parse(&self.url) {
                warnings.push(
                    Diagnostic::warning(format!("`{}` is not a valid url", self.url))
                        .with_context(e.to_string()),
                );
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dist_name_without_user() {
        let meta = PkgMetadata::new("mypkg");
        assert_eq!(meta.user_suffix(), "");
        assert_eq!(meta.dist_name(), "mypkg");
    }

    #[test]
    fn test_dist_name_with_user() {
        let meta = PkgMetadata::new("mypkg").with_user("alice");
        assert_eq!(meta.user_suffix(), "-alice");
        assert_eq!(meta.dist_name(), "mypkg-alice");
    }

    #[test]
    fn test_interpreter_name() {
        let meta = PkgMetadata::new("p").with_interpreter("/usr/bin/python3");
        assert_eq!(meta.interpreter_name(), "python3");

        let meta = PkgMetadata::new("p").with_interpreter("python3.12");
        assert_eq!(meta.interpreter_name(), "python3.12");

        let meta = PkgMetadata::new("p").with_interpreter("/opt/venv/bin/");
        assert_eq!(meta.interpreter_name(), "");

        let meta = PkgMetadata::new("p");
        assert_eq!(meta.interpreter_name(), "");
    }

    #[test]
    fn test_lint_clean_metadata() {
        let meta = PkgMetadata::new("mypkg")
            .with_version("1.0")
            .with_author("A", "a@x.com")
            .with_description("d")
            .with_url("http://x");
        assert!(meta.lint().is_empty());
    }

    #[test]
    fn test_lint_flags_quotes_and_bad_url() {
        let meta = PkgMetadata::new("mypkg")
            .with_description(r#"a "quoted" word"#)
            .with_url("not a url");
        let warnings = meta.lint();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].message.contains("description"));
        assert!(warnings[1].message.contains("not a valid url"));
    }

    #[test]
    fn test_lint_empty_name() {
        let warnings = PkgMetadata::default().lint();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("empty"));
    }

    #[test]
    fn test_lint_does_not_modify() {
        let meta = PkgMetadata::new("x").with_description("say \"hi\"");
        let before = meta.clone();
        let _ = meta.lint();
        assert_eq!(meta, before);
    }
}
