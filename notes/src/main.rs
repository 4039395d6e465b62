use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use notes::dispatch::{self, Command};
use notes::storage::FileNoteStore;

#[derive(Debug, Parser)]
#[command(
    name = "notes",
    about = "Timestamped one-line notes kept in a plain text file",
    version
)]
struct Cli {
    /// Enable verbose logging for debugging.
    #[arg(long, global = true)]
    verbose: bool,
    /// Emit lists and search results as JSON.
    #[arg(long)]
    json: bool,
    /// Note file to read and rewrite.
    #[arg(long, env = "NOTES_FILE", default_value = "notes.txt")]
    file: PathBuf,
    /// `list`, `view`, `update`, `delete`, `search`, or the text of a new note.
    #[arg(allow_hyphen_values = true)]
    command: Option<String>,
    /// Note number for update/delete, keyword for search.
    #[arg(allow_hyphen_values = true)]
    primary: Option<String>,
    /// Replacement text for update.
    #[arg(allow_hyphen_values = true)]
    secondary: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = FileNoteStore::new(&cli.file);
    let command = Command::parse(
        cli.command.as_deref(),
        cli.primary.as_deref(),
        cli.secondary.as_deref(),
    );
    debug!("using note file {:?}", store.path());

    let mut out = io::stdout().lock();
    dispatch::run(&command, &store, &mut out, cli.json)
        .with_context(|| format!("running notes against {:?}", cli.file))
}

/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_arguments_fill_in_order() {
        let cli = Cli::try_parse_from(["notes", "--file", "x.txt", "update", "2", "new text"])
            .expect("parse");
        assert_eq!(cli.file, PathBuf::from("x.txt"));
        assert_eq!(cli.command.as_deref(), Some("update"));
        assert_eq!(cli.primary.as_deref(), Some("2"));
        assert_eq!(cli.secondary.as_deref(), Some("new text"));
    }

    #[test]
    fn negative_numbers_reach_the_dispatcher() {
        let cli = Cli::try_parse_from(["notes", "delete", "-1"]).expect("parse");
        assert_eq!(
            Command::parse(cli.command.as_deref(), cli.primary.as_deref(), None),
            Command::Delete { number: -1 }
        );
    }

    #[test]
    fn hyphen_leading_text_is_positional() {
        let cli = Cli::try_parse_from(["notes", "--json", "- buy milk"]).expect("parse add");
        assert!(cli.json);
        assert_eq!(cli.command.as_deref(), Some("- buy milk"));

        let cli = Cli::try_parse_from(["notes", "update", "1", "-x"]).expect("parse update");
        assert_eq!(
            Command::parse(
                cli.command.as_deref(),
                cli.primary.as_deref(),
                cli.secondary.as_deref()
            ),
            Command::Update {
                number: 1,
                content: "-x".to_string()
            }
        );
    }

    #[test]
    fn no_arguments_is_help() {
        let cli = Cli::try_parse_from(["notes"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }
}
