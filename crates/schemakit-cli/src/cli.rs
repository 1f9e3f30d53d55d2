//! `schemakit` command-line tool
//!
//! Inspects dialect capability rules, searches type catalogs and renders the
//! rows of a schema draft file.

mod logging;
mod output;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use schemakit_core::{
    Dialect, TypeCatalog, available_algorithms, available_index_types, search_data_types,
    shows_algorithm_selector,
};
use schemakit_editor::{EditorSettings, SchemaDraft};

use crate::logging::LoggingConfig;

#[derive(Parser, Debug)]
#[command(name = "schemakit", version, about = "Schema editor rules and drafts from the terminal")]
struct Cli {
    /// Settings file (defaults to <config dir>/schemakit/settings.toml)
    #[arg(long, global = true, env = "SCHEMAKIT_SETTINGS")]
    settings: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show index types, algorithms and column options for a dialect
    Capabilities {
        /// Dialect slug (mysql, postgres, sqlite); defaults to the configured dialect
        #[arg(long)]
        dialect: Option<String>,

        /// Canonical type name used for column options (e.g. integer, timestamp)
        #[arg(long = "type")]
        canonical_type: Option<String>,
    },

    /// Search a type catalog file
    Types {
        /// TOML file with [[data_type]] entries
        #[arg(long)]
        catalog: PathBuf,

        /// Case-insensitive substring of the SQL or canonical name
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Render the column and index rows of a draft file
    Show {
        #[arg(long)]
        draft: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(LoggingConfig::from_verbosity(cli.verbose))?;

    let mut stdout = std::io::stdout().lock();
    run(cli, &mut stdout)
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let settings = match &cli.settings {
        Some(path) => EditorSettings::load_from(path)?,
        None => EditorSettings::load()?,
    };

    match cli.command {
        Command::Capabilities {
            dialect,
            canonical_type,
        } => {
            let dialect = dialect
                .map(Dialect::from)
                .unwrap_or(settings.default_dialect);
            print_capabilities(out, &dialect, canonical_type.as_deref())
        }
        Command::Types { catalog, query } => print_types(out, &catalog, &query),
        Command::Show { draft } => print_draft(out, &draft),
    }
}

fn print_capabilities(
    out: &mut impl Write,
    dialect: &Dialect,
    canonical_type: Option<&str>,
) -> Result<()> {
    if !dialect.is_known() {
        tracing::warn!(dialect = %dialect, "Unknown dialect, only base rules apply");
    }

    writeln!(out, "Dialect: {}", dialect.display_name())?;
    writeln!(out)?;
    writeln!(out, "Index types")?;
    writeln!(out, "{}", output::index_types_table(&available_index_types(dialect)))?;
    writeln!(out)?;

    if shows_algorithm_selector(dialect) {
        writeln!(out, "Index algorithms")?;
        writeln!(out, "{}", output::algorithms_table(&available_algorithms(dialect)))?;
    } else {
        writeln!(out, "Index algorithms: not selectable")?;
    }
    writeln!(out)?;

    writeln!(out, "Column options ({})", canonical_type.unwrap_or("no type"))?;
    writeln!(out, "{}", output::column_options_table(dialect, canonical_type))?;
    Ok(())
}

fn print_types(out: &mut impl Write, path: &Path, query: &str) -> Result<()> {
    let catalog = TypeCatalog::load(path)
        .with_context(|| format!("Failed to load catalog from {:?}", path))?;

    let found = search_data_types(&catalog.data_types, query);
    tracing::debug!(query, total = catalog.data_types.len(), found = found.len(), "Type search");

    if found.is_empty() {
        writeln!(out, "No types match {:?}", query)?;
        return Ok(());
    }
    writeln!(out, "{}", output::data_types_table(&found))?;
    Ok(())
}

fn print_draft(out: &mut impl Write, path: &Path) -> Result<()> {
    let draft = SchemaDraft::load(path)?;

    writeln!(out, "Dialect: {}", draft.dialect.display_name())?;
    writeln!(out)?;

    let fields = draft.fields_list();
    if fields.is_empty() {
        writeln!(out, "No columns")?;
    } else {
        writeln!(out, "Columns")?;
        writeln!(out, "{}", output::columns_table(&fields))?;
    }
    writeln!(out)?;

    let indexes = draft.index_fields();
    if indexes.is_empty() {
        writeln!(out, "No indexes")?;
    } else {
        writeln!(out, "Indexes")?;
        writeln!(out, "{}", output::indexes_table(&indexes))?;
    }
    Ok(())
}
