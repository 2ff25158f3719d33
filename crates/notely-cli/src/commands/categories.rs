use std::path::Path;

use notely_core::query::filter_notes;

use crate::commands::common::{open_app, CategoryItem};
use crate::error::CliError;

pub fn run_categories(as_json: bool, store_path: &Path) -> Result<(), CliError> {
    let app = open_app(store_path)?;
    let items = app
        .categories()
        .iter()
        .map(|category| CategoryItem {
            name: category.name.clone(),
            value: category.value.clone(),
            notes: filter_notes(app.notes(), &category.value, "").len(),
        })
        .collect::<Vec<_>>();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in items {
            println!("#{:<16} {:<16} {}", item.name, item.value, item.notes);
        }
    }
    Ok(())
}
