use std::path::Path;

use crate::commands::common::{list_notes, normalize_search_query, open_app, print_notes};
use crate::error::CliError;

pub fn run_search(
    query: &str,
    category: Option<&str>,
    limit: Option<usize>,
    as_json: bool,
    store_path: &Path,
) -> Result<(), CliError> {
    let normalized_query = normalize_search_query(query)?;
    let mut app = open_app(store_path)?;
    let notes = list_notes(&mut app, category, Some(&normalized_query), limit)?;
    print_notes(&notes, as_json)
}
