//! lumenote-md - markdown editing helpers for the command line.
//!
//! The document is read from stdin; results go to stdout.
//!
//! # Usage
//!
//! ```bash
//! lumenote-md title < note.md
//! lumenote-md wrap --from 0 --to 5 --wrapper '**' < note.md
//! lumenote-md toggle --position 12 --prefix '# ' < note.md
//! lumenote-md format table:3x2 --from 4 < note.md
//! ```

use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lumenote_md::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use lumenote_md::document::{DocumentStats, count_words, extract_title};
use lumenote_md::editor::{
    Edit, FormatAction, Selection, toggle_line_prefix_edit, wrap_selection_edit,
};

/// Markdown editing helpers: wrap selections, toggle line prefixes, read titles and word counts
#[derive(Parser, Debug)]
#[command(name = "lumenote-md", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Text inserted by bold/italic/code when nothing is selected
    #[arg(long, global = true, value_name = "TEXT")]
    placeholder: Option<String>,

    /// Text inserted by code-block when nothing is selected
    #[arg(long, global = true, value_name = "TEXT")]
    code_placeholder: Option<String>,

    /// Link text used when nothing is selected
    #[arg(long, global = true, value_name = "TEXT")]
    link_text: Option<String>,

    /// Link target inserted by the link action
    #[arg(long, global = true, value_name = "URL")]
    link_url: Option<String>,

    /// Print the resulting selection (`from..to`) to stderr
    #[arg(long, global = true)]
    print_selection: bool,

    /// Save the current flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the first level-1 heading, or "Untitled"
    Title,
    /// Print the number of words, ignoring markdown markup
    Words,
    /// Print title, word, char and line counts
    Stats,
    /// Surround a char range with a wrapper on both sides
    Wrap {
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
        #[arg(long, allow_hyphen_values = true)]
        wrapper: String,
    },
    /// Add or remove a prefix on the line containing a char offset
    Toggle {
        #[arg(long)]
        position: usize,
        #[arg(long, allow_hyphen_values = true)]
        prefix: String,
    },
    /// Apply a toolbar action (bold, italic, code, code-block, h1-h3, bullet,
    /// numbered, checkbox, link, table, table:ROWSxCOLS)
    Format {
        action: FormatAction,
        #[arg(long, default_value_t = 0)]
        from: usize,
        /// Defaults to --from (an empty selection)
        #[arg(long)]
        to: Option<usize>,
    },
}

impl Cli {
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            placeholder: self.placeholder.clone(),
            code_placeholder: self.code_placeholder.clone(),
            link_text: self.link_text.clone(),
            link_url: self.link_url.clone(),
            print_selection: self.print_selection,
        }
    }
}

fn read_document() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut content)
        .context("Failed to read document from stdin")?;
    Ok(content)
}

fn write_edit(edit: &Edit, print_selection: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(edit.content.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write document to stdout")?;
    if print_selection {
        eprintln!("{}", edit.selection);
    }
    Ok(())
}

fn run(command: Command, flags: &ConfigFlags) -> Result<()> {
    tracing::debug!(?command, "running command");
    match command {
        Command::Title => {
            let content = read_document()?;
            println!("{}", extract_title(&content));
        }
        Command::Words => {
            let content = read_document()?;
            println!("{}", count_words(&content));
        }
        Command::Stats => {
            let stats = DocumentStats::of(&read_document()?);
            println!("title: {}", stats.title);
            println!("words: {}", stats.words);
            println!("chars: {}", stats.chars);
            println!("lines: {}", stats.lines);
        }
        Command::Wrap { from, to, wrapper } => {
            let content = read_document()?;
            let edit = wrap_selection_edit(&content, Selection::new(from, to), &wrapper)
                .context("Cannot wrap selection")?;
            write_edit(&edit, flags.print_selection)?;
        }
        Command::Toggle { position, prefix } => {
            let content = read_document()?;
            let edit = toggle_line_prefix_edit(&content, position, &prefix);
            write_edit(&edit, flags.print_selection)?;
        }
        Command::Format { action, from, to } => {
            let content = read_document()?;
            let selection = Selection::new(from, to.unwrap_or(from));
            let edit = action
                .apply(&content, selection, &flags.toolbar_options())
                .with_context(|| format!("Cannot apply {action}"))?;
            write_edit(&edit, flags.print_selection)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.config_flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    match cli.command {
        Some(command) => run(command, &effective),
        None if cli.save || cli.clear => Ok(()),
        None => anyhow::bail!("No command given; run with --help for usage"),
    }
}
