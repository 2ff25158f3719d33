use std::path::Path;

use crate::commands::common::{list_notes, open_app, print_notes};
use crate::error::CliError;

pub fn run_list(
    category: Option<&str>,
    search: Option<&str>,
    limit: Option<usize>,
    as_json: bool,
    store_path: &Path,
) -> Result<(), CliError> {
    let mut app = open_app(store_path)?;
    let notes = list_notes(&mut app, category, search, limit)?;
    print_notes(&notes, as_json)
}
