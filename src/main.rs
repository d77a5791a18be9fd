//! Marktool - apply markdown toolbar actions from the command line.
//!
//! # Usage
//!
//! ```bash
//! marktool apply notes.md bold-button --from 0 --to 5
//! marktool apply notes.md heading-level-2-button task-list-button --from 40
//! marktool templates --json
//! marktool new weekly > report.md
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use marktool::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use marktool::editor::EditorBuffer;
use marktool::file_type::FileType;
use marktool::templates::{self, Locale, TEMPLATES};
use marktool::toolbar::{ToolbarAction, ToolbarOptions};

/// Apply markdown toolbar actions to files
#[derive(Parser, Debug)]
#[command(name = "marktool", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log every dispatched edit
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Language for template names and descriptions
    #[arg(long, value_enum, global = true)]
    locale: Option<Locale>,

    /// Rows in tables inserted by table-button (header included)
    #[arg(long, value_name = "N", global = true)]
    table_rows: Option<usize>,

    /// Columns in tables inserted by table-button
    #[arg(long, value_name = "N", global = true)]
    table_cols: Option<usize>,

    /// Save current command-line flags as defaults
    #[arg(long, global = true)]
    save: bool,

    /// Clear saved defaults
    #[arg(long, global = true)]
    clear: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run toolbar actions against a file and print the result
    Apply {
        /// Markdown file to edit
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Toolbar identifiers, applied in order (see `marktool actions`)
        #[arg(value_name = "ACTION", required = true)]
        actions: Vec<String>,

        /// Selection anchor as a char offset
        #[arg(long, default_value_t = 0)]
        from: usize,

        /// Selection head as a char offset (defaults to --from)
        #[arg(long)]
        to: Option<usize>,

        /// Write the result here instead of stdout
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// List toolbar identifiers
    Actions,

    /// List document templates
    Templates {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a new document from a template
    New {
        /// Template id (see `marktool templates`)
        #[arg(value_name = "ID")]
        id: String,

        /// Date to fill in (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
}

fn run_apply(
    file: &Path,
    actions: &[String],
    selection: (usize, usize),
    out: Option<&Path>,
    options: &ToolbarOptions,
) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File not found: {}", file.display());
    }
    let file_type = FileType::detect(file);
    if !file_type.is_editable() {
        anyhow::bail!("{} is not an editable file ({file_type:?})", file.display());
    }

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let actions = actions
        .iter()
        .map(|id| id.parse::<ToolbarAction>())
        .collect::<marktool::Result<Vec<_>>>()?;

    let mut buffer = EditorBuffer::from_text(&content);
    buffer
        .select(selection.0, selection.1)
        .with_context(|| format!("Invalid selection for {}", file.display()))?;

    for action in actions {
        if !buffer.perform(action, options) {
            tracing::warn!(%action, "nothing to do");
        }
    }
    tracing::info!(
        caret = buffer.caret(),
        edits = buffer.dispatch_count(),
        "applied toolbar actions"
    );

    match out {
        Some(path) => std::fs::write(path, buffer.text())
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{}", buffer.text());
            Ok(())
        }
    }
}

fn print_templates(json: bool, locale: Locale) -> Result<()> {
    if json {
        let listing = serde_json::to_string_pretty(TEMPLATES).context("serialize templates")?;
        println!("{listing}");
        return Ok(());
    }
    for template in TEMPLATES {
        println!(
            "{:<12} {:<22} {}",
            template.id,
            template.name(locale),
            template.description(locale)
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        verbose: cli.verbose,
        locale: cli.locale,
        table_rows: cli.table_rows,
        table_cols: cli.table_cols,
    };

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

    // Initialize logging
    let level = if effective.verbose {
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

    let locale = effective.locale();
    let options = effective.toolbar_options();
    tracing::debug!(?options, ?locale, "effective settings");

    match cli.command {
        Command::Apply {
            file,
            actions,
            from,
            to,
            out,
        } => run_apply(&file, &actions, (from, to.unwrap_or(from)), out.as_deref(), &options),
        Command::Actions => {
            for action in ToolbarAction::all() {
                println!("{action}");
            }
            Ok(())
        }
        Command::Templates { json } => print_templates(json, locale),
        Command::New { id, date } => {
            let template = templates::find(&id)?;
            let date = date.unwrap_or_else(|| chrono::Local::now().format("%Y/%-m/%-d").to_string());
            print!("{}", template.render(&date));
            Ok(())
        }
    }
}
