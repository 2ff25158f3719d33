//! Note export rendering.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::Note;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Render notes as pretty-printed JSON in the persisted schema.
pub fn render_json_export(notes: &[Note]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(notes)
}

/// Render notes in Markdown with frontmatter blocks.
#[must_use]
pub fn render_markdown_export(notes: &[Note]) -> String {
    let mut output = String::new();

    for (index, note) in notes.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let _ = writeln!(output, "---");
        let _ = writeln!(output, "id: {}", note.id);
        let _ = writeln!(output, "title: {}", quote_scalar(&note.title));
        let _ = writeln!(output, "created: {}", note.created.to_rfc3339());
        let _ = writeln!(output, "updated: {}", note.updated.to_rfc3339());
        let _ = writeln!(output, "tags:");
        for tag in &note.tags {
            let _ = writeln!(output, "  - {}", quote_scalar(tag));
        }
        let _ = writeln!(output, "---");
        let _ = writeln!(output);
        let _ = writeln!(output, "# {}", note.title);
        if !note.body.is_empty() {
            let _ = writeln!(output);
            output.push_str(&note.body);
            output.push('\n');
        }
    }

    output
}

/// Double-quoted YAML scalar
fn quote_scalar(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

/// Render notes based on selected export format.
pub fn render_notes_export(notes: &[Note], format: ExportFormat) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(notes),
        ExportFormat::Markdown => Ok(render_markdown_export(notes)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("notely-export-{timestamp_ms}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteDraft;

    fn sample_note() -> Note {
        let mut note = Note::new(
            NoteDraft::new("Hello export", "Body line", ["zeta", "alpha"]).unwrap(),
        );
        note.id = "cccccccc-cccc-7ccc-8ccc-111111111111".parse().unwrap();
        note
    }

    #[test]
    fn render_markdown_export_includes_frontmatter_and_content() {
        let rendered = render_markdown_export(&[sample_note()]);
        assert!(rendered.contains("id: cccccccc-cccc-7ccc-8ccc-111111111111"));
        assert!(rendered.contains("title: \"Hello export\""));
        assert!(rendered.contains("tags:\n  - \"zeta\"\n  - \"alpha\""));
        assert!(rendered.contains("# Hello export\n\nBody line\n"));
    }

    #[test]
    fn render_markdown_export_quotes_frontmatter_values() {
        let note = Note::new(
            NoteDraft::new("Plan: Q3 \"draft\"", "", ["a:b"]).unwrap(),
        );
        let rendered = render_markdown_export(&[note]);
        assert!(rendered.contains("title: \"Plan: Q3 \\\"draft\\\"\"\n"));
        assert!(rendered.contains("  - \"a:b\"\n"));
        assert!(rendered.contains("# Plan: Q3 \"draft\"\n"));
    }

    #[test]
    fn render_json_export_uses_persisted_field_names() {
        let note = sample_note();
        let rendered = render_json_export(std::slice::from_ref(&note)).unwrap();
        let parsed: Vec<Note> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, vec![note]);
        assert!(rendered.contains("\"created\""));
        assert!(rendered.contains("\"body\""));
    }

    #[test]
    fn suggested_export_file_name_uses_format_extension() {
        assert_eq!(
            suggested_export_file_name(ExportFormat::Json, 123),
            "notely-export-123.json"
        );
        assert_eq!(
            suggested_export_file_name(ExportFormat::Markdown, 456),
            "notely-export-456.md"
        );
    }
}
