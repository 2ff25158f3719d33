use std::path::{Path, PathBuf};

use chrono::Utc;
use notely_core::export::{render_notes_export, suggested_export_file_name};

use crate::cli::ExportFormat;
use crate::commands::common::open_app;
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    store_path: &Path,
) -> Result<(), CliError> {
    let app = open_app(store_path)?;
    let rendered = render_notes_export(app.notes(), format.into())?;

    match output_path {
        Some(path) => {
            let target = export_target(path, format);
            std::fs::write(&target, rendered)?;
            println!("{}", target.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Existing directories receive a timestamped file name
pub fn export_target(path: &Path, format: ExportFormat) -> PathBuf {
    if path.is_dir() {
        path.join(suggested_export_file_name(
            format.into(),
            Utc::now().timestamp_millis(),
        ))
    } else {
        path.to_path_buf()
    }
}
