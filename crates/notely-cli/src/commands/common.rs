use std::env;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Utc};
use notely_core::storage::FileStorage;
use notely_core::store::Confirmation;
use notely_core::{Note, NoteId, NotesApp};
use serde::Serialize;

use crate::error::CliError;

pub type App = NotesApp<FileStorage>;

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created: String,
    pub updated: String,
    pub relative_time: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryItem {
    pub name: String,
    pub value: String,
    pub notes: usize,
}

/// Reads a y/N answer from stdin.
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => parse_confirmation(&answer),
            Err(error) => {
                tracing::warn!("Failed to read confirmation: {}", error);
                false
            }
        }
    }
}

pub fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn open_app(store_path: &Path) -> Result<App, CliError> {
    let storage = FileStorage::open(store_path)?;
    Ok(NotesApp::new(storage))
}

/// Apply optional category and search filters, returning matching notes.
pub fn list_notes(
    app: &mut App,
    category: Option<&str>,
    search: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<Note>, CliError> {
    if let Some(category) = category.and_then(normalize_category) {
        if !app.categories().iter().any(|c| c.value == category) {
            return Err(CliError::UnknownCategory(category));
        }
        app.select_category(&category);
    }
    if let Some(search) = search {
        app.set_search(search);
    }

    let notes = app.visible_notes().into_iter().cloned();
    Ok(match limit {
        Some(limit) => notes.take(limit).collect(),
        None => notes.collect(),
    })
}

pub fn resolve_note(app: &App, note_query: &str) -> Result<Note, CliError> {
    let id = resolve_note_id(app, note_query)?;
    app.store()
        .get(&id)
        .cloned()
        .ok_or_else(|| CliError::NoteNotFound(note_query.to_string()))
}

pub fn resolve_note_id(app: &App, note_query: &str) -> Result<NoteId, CliError> {
    let normalized = normalize_note_identifier(note_query)?;
    app.resolve_id(&normalized).map_err(|error| match error {
        notely_core::Error::NotFound(_) => CliError::NoteNotFound(normalized.clone()),
        notely_core::Error::AmbiguousId { .. } => CliError::AmbiguousNoteId(error.to_string()),
        other => CliError::Core(other),
    })
}

pub fn print_notes(notes: &[Note], as_json: bool) -> Result<(), CliError> {
    if as_json {
        let json_items = notes
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if notes.is_empty() {
        println!("No notes found. Create your first note with `notely add`.");
    } else {
        for line in format_note_lines(notes) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    let now = Utc::now();
    notes
        .iter()
        .map(|note| {
            let short_id = note.id.short();
            let preview = note_preview(note, 40);
            let relative_time = format_relative_time(note.updated, now);
            let tags = render_tags(note);

            if tags.is_empty() {
                format!("{short_id:<13}  {preview:<40}  {relative_time}")
            } else {
                format!("{short_id:<13}  {preview:<40}  {relative_time:<10}  {tags}")
            }
        })
        .collect()
}

pub fn format_note_detail(note: &Note) -> String {
    let mut lines = vec![
        note.title.clone(),
        format!("id:      {}", note.id),
        format!("created: {}", format_utc(note.created)),
        format!("updated: {}", format_utc(note.updated)),
    ];
    let tags = render_tags(note);
    if !tags.is_empty() {
        lines.push(format!("tags:    {tags}"));
    }
    if !note.body.is_empty() {
        lines.push(String::new());
        lines.push(note.body.clone());
    }
    lines.join("\n")
}

pub fn format_utc(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        body: note.body.clone(),
        tags: note.tags.clone(),
        created: note.created.to_rfc3339(),
        updated: note.updated.to_rfc3339(),
        relative_time: format_relative_time(note.updated, Utc::now()),
    }
}

pub fn note_preview(note: &Note, max_chars: usize) -> String {
    let collapsed = note.title.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

pub fn render_tags(note: &Note) -> String {
    note.tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<String>>()
        .join(" ")
}

/// Coarse "3h ago" style age of `then` relative to `now`
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(then);
    if age.num_minutes() < 1 {
        return "just now".to_string();
    }

    let (amount, unit) = if age.num_hours() < 1 {
        (age.num_minutes(), "m")
    } else if age.num_days() < 1 {
        (age.num_hours(), "h")
    } else if age.num_weeks() < 1 {
        (age.num_days(), "d")
    } else if age.num_days() < 30 {
        (age.num_weeks(), "w")
    } else if age.num_days() < 365 {
        (age.num_days() / 30, "mo")
    } else {
        (age.num_days() / 365, "y")
    };
    format!("{amount}{unit} ago")
}

pub fn resolve_title(title_parts: &[String]) -> Result<String, CliError> {
    normalize_content(&title_parts.join(" ")).ok_or(CliError::EmptyTitle)
}

pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn normalize_category(category: &str) -> Option<String> {
    normalize_content(category).map(|value| value.to_lowercase())
}

pub fn normalize_search_query(query: &str) -> Result<String, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn normalize_note_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteId)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Body text piped into the command, if stdin is not a terminal
pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let mut stdin = io::stdin().lock();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut piped = String::new();
    stdin.read_to_string(&mut piped)?;
    Ok(normalize_content(&piped))
}

/// Open `initial` in the user's editor and return the saved text
pub fn edit_in_editor(initial: &str) -> Result<Option<String>, CliError> {
    let mut scratch = tempfile::Builder::new()
        .prefix("notely-")
        .suffix(".md")
        .tempfile()?;
    scratch.write_all(initial.as_bytes())?;
    scratch.flush()?;

    launch_editor(&preferred_editor(), scratch.path())?;
    let edited = std::fs::read_to_string(scratch.path())?;
    Ok(normalize_content(&edited))
}

/// Run `editor` (which may carry arguments) on `file_path` and wait for it
pub fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| CliError::EditorFailed("no editor configured".into()))?;

    let status = Command::new(program).args(words).arg(file_path).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(CliError::EditorFailed(format!("`{editor}` exited with {status}")))
    }
}

/// `$VISUAL`, then `$EDITOR`, then the platform default
pub fn preferred_editor() -> String {
    ["VISUAL", "EDITOR"]
        .into_iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_editor().to_string())
}

pub const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

pub fn resolve_store_path(cli_store_path: Option<PathBuf>) -> PathBuf {
    cli_store_path
        .or_else(|| env::var_os("NOTELY_STORE_PATH").map(PathBuf::from))
        .unwrap_or_else(default_store_path)
}

pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join("notely")
        .join("notes.json")
}
