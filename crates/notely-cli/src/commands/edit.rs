use std::path::Path;

use notely_core::NoteDraft;

use crate::commands::common::{edit_in_editor, open_app, resolve_note};
use crate::error::CliError;

pub fn run_edit(
    id: &str,
    title: Option<String>,
    body: Option<String>,
    tags: Option<String>,
    store_path: &Path,
) -> Result<(), CliError> {
    let mut app = open_app(store_path)?;
    let note = resolve_note(&app, id)?;

    let body = match (&title, body, &tags) {
        (_, Some(body), _) => body,
        (None, None, None) => edit_in_editor(&note.body)?.unwrap_or_default(),
        _ => note.body.clone(),
    };
    let title = title.unwrap_or_else(|| note.title.clone());
    let draft = match tags {
        Some(tags) => NoteDraft::from_input(&title, &body, &tags)?,
        None => NoteDraft::new(&title, &body, &note.tags)?,
    };

    let updated = app.edit_note(&note.id, draft)?;
    println!("{}", updated.id);
    Ok(())
}
