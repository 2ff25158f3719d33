//! Notely CLI - tag, search, and filter short notes from the terminal
//!
//! Notes live in a single JSON key/value file (see `--store`).

mod cli;
mod commands;
mod error;


use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::background::run_background;
use crate::commands::categories::run_categories;
use crate::commands::common::resolve_store_path;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::search::run_search;
use crate::commands::show::run_show;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("notely=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store_path = resolve_store_path(cli.store);
    tracing::debug!("Using store at {}", store_path.display());

    match cli.command {
        Some(Commands::Add { title, body, tags }) => {
            run_add(&title, body, tags.as_deref(), &store_path)?;
        }
        Some(Commands::List {
            category,
            search,
            limit,
            json,
        }) => {
            run_list(
                category.as_deref(),
                search.as_deref(),
                limit,
                json,
                &store_path,
            )?;
        }
        Some(Commands::Search {
            query,
            category,
            limit,
            json,
        }) => {
            run_search(&query, category.as_deref(), limit, json, &store_path)?;
        }
        Some(Commands::Show { id, json }) => run_show(&id, json, &store_path)?,
        Some(Commands::Edit {
            id,
            title,
            body,
            tags,
        }) => run_edit(&id, title, body, tags, &store_path)?,
        Some(Commands::Delete { id, yes }) => run_delete(&id, yes, &store_path)?,
        Some(Commands::Categories { json }) => run_categories(json, &store_path)?,
        Some(Commands::Background { name, list }) => {
            run_background(name.as_deref(), list, &store_path)?;
        }
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &store_path)?;
        }
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            // Quick capture mode: notely "my note title"
            if cli.note.is_empty() {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            } else {
                run_add(&cli.note, None, None, &store_path)?;
            }
        }
    }

    Ok(())
}
