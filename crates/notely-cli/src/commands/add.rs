use std::path::Path;

use notely_core::util::normalize_text_option;
use notely_core::NoteDraft;

use crate::commands::common::{open_app, read_piped_stdin, resolve_title};
use crate::error::CliError;

pub fn run_add(
    title_parts: &[String],
    body: Option<String>,
    tags: Option<&str>,
    store_path: &Path,
) -> Result<(), CliError> {
    let title = resolve_title(title_parts)?;
    let body = match normalize_text_option(body) {
        Some(body) => body,
        None => read_piped_stdin()?.unwrap_or_default(),
    };
    let draft = NoteDraft::from_input(&title, &body, tags.unwrap_or_default())?;

    let mut app = open_app(store_path)?;
    let id = app.create_note(draft)?;

    println!("{id}");
    Ok(())
}
