use std::path::Path;

use crate::commands::common::{open_app, resolve_note_id, StdinConfirmation};
use crate::error::CliError;

pub fn run_delete(id: &str, skip_confirmation: bool, store_path: &Path) -> Result<(), CliError> {
    let mut app = open_app(store_path)?;
    let note_id = resolve_note_id(&app, id)?;

    let removed = if skip_confirmation {
        app.delete_note(&note_id, &|_: &str| true)?
    } else {
        app.delete_note(&note_id, &StdinConfirmation)?
    };

    if removed {
        println!("{note_id}");
    } else {
        println!("Delete cancelled");
    }
    Ok(())
}
