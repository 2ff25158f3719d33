use std::path::Path;

use crate::commands::common::{format_note_detail, note_to_list_item, open_app, resolve_note};
use crate::error::CliError;

pub fn run_show(id: &str, as_json: bool, store_path: &Path) -> Result<(), CliError> {
    let app = open_app(store_path)?;
    let note = resolve_note(&app, id)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&note_to_list_item(&note))?);
    } else {
        println!("{}", format_note_detail(&note));
    }
    Ok(())
}
