//! Rewriting the generation command for the Makefile `gen` target.
//!
//! The `gen` recipe runs from inside the package directory, so whatever
//! output directory the original invocation used is replaced with `.`.

const OUTPUT_FLAGS: [&str; 2] = ["-output", "--output"];

/// Rewrite `cmd` so that it regenerates into the current directory.
///
/// `cmd` is split into words with shell quoting rules; if the quoting is
/// unbalanced it falls back to splitting on whitespace. Any output flag is
/// removed, whether spelled `-output=DIR`, `--output=DIR`, or as a flag
/// followed by a separate value. A single `<flag>=.` is then inserted after
/// the program and subcommand. The flag keeps the spelling of the first one
/// removed and is `-output` if none was present. Words are re-quoted where
/// needed so the result can be pasted into a shell.
pub fn makefile_gen_command(cmd: &str) -> String {
    let words = shell_words::split(cmd)
        .unwrap_or_else(|_| cmd.split_whitespace().map(str::to_string).collect());

    let mut flag: Option<&str> = None;
    let mut fields: Vec<String> = Vec::with_capacity(words.len() + 1);

    let mut tokens = words.into_iter();
    while let Some(tok) = tokens.next() {
        if let Some(spelling) = output_flag_assignment(&tok) {
            flag.get_or_insert(spelling);
            continue;
        }
        if let Some(spelling) = OUTPUT_FLAGS.iter().copied().find(|f| *f == tok) {
            flag.get_or_insert(spelling);
            // Value is the next token.
            tokens.next();
            continue;
        }
        fields.push(tok);
    }

    let at = fields.len().min(2);
    fields.insert(at, format!("{}=.", flag.unwrap_or(OUTPUT_FLAGS[0])));
    join_command(fields)
}

/// Join words into one command line.
///
/// Only words the shell would split, expand or glob are quoted, so plain
/// flags like `-output=.` stay readable in the Makefile.
pub fn join_command<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| {
            let word = word.as_ref();
            if needs_quoting(word) {
                shell_words::quote(word).into_owned()
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn needs_quoting(word: &str) -> bool {
    word.is_empty()
        || !word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_=./,:@+%".contains(c))
}

/// If `tok` is `<flag>=<value>` for an output flag, return the flag.
fn output_flag_assignment(tok: &str) -> Option<&'static str> {
    let (name, _) = tok.split_once('=')?;
    OUTPUT_FLAGS.iter().copied().find(|f| *f == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_output_after_subcommand() {
        assert_eq!(
            makefile_gen_command("gopy pkg -vm=python3 github.com/x/y"),
            "gopy pkg -output=. -vm=python3 github.com/x/y"
        );
    }

    #[test]
    fn test_replaces_existing_output() {
        assert_eq!(
            makefile_gen_command("gopy pkg -output=/tmp/out -vm=python3 github.com/x/y"),
            "gopy pkg -output=. -vm=python3 github.com/x/y"
        );
    }

    #[test]
    fn test_replaces_trailing_output() {
        assert_eq!(
            makefile_gen_command("gopy build github.com/x/y -output=out"),
            "gopy build -output=. github.com/x/y"
        );
    }

    #[test]
    fn test_keeps_long_flag_spelling() {
        assert_eq!(
            makefile_gen_command("pypkg setup --output /tmp/x mypkg --user bob"),
            "pypkg setup --output=. mypkg --user bob"
        );
        assert_eq!(
            makefile_gen_command("pypkg setup mypkg --output=/tmp/x"),
            "pypkg setup --output=. mypkg"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            makefile_gen_command("  gopy   pkg\tpath  "),
            "gopy pkg -output=. path"
        );
    }

    #[test]
    fn test_short_commands() {
        assert_eq!(makefile_gen_command("gopy"), "gopy -output=.");
        assert_eq!(makefile_gen_command(""), "-output=.");
    }

    #[test]
    fn test_quoted_words_survive() {
        let rewritten = makefile_gen_command("pypkg setup mypkg --description 'my great pkg'");
        assert_eq!(
            shell_words::split(&rewritten).unwrap(),
            ["pypkg", "setup", "--output=.", "mypkg", "--description", "my great pkg"]
        );

        assert_eq!(
            makefile_gen_command("pypkg setup '--output=/tmp/my dir' mypkg"),
            "pypkg setup --output=. mypkg"
        );
    }

    #[test]
    fn test_unbalanced_quote_falls_back_to_whitespace() {
        let rewritten = makefile_gen_command("gopy pkg it's");
        assert_eq!(
            shell_words::split(&rewritten).unwrap(),
            ["gopy", "pkg", "-output=.", "it's"]
        );
    }

    #[test]
    fn test_join_command_quotes_only_when_needed() {
        assert_eq!(
            join_command(["pypkg", "setup", "--output=.", "--url", "https://x.org/a"]),
            "pypkg setup --output=. --url https://x.org/a"
        );

        let joined = join_command(["a", "", "b c", "$HOME", "x\"y"]);
        assert_ne!(joined, "a  b c $HOME x\"y");
        assert_eq!(
            shell_words::split(&joined).unwrap(),
            ["a", "", "b c", "$HOME", "x\"y"]
        );
    }

    #[test]
    fn test_similar_flag_is_kept() {
        assert_eq!(
            makefile_gen_command("gopy pkg -outputs=x y"),
            "gopy pkg -output=. -outputs=x y"
        );
    }
}
