use std::path::Path;

use notely_core::Background;

use crate::commands::common::open_app;
use crate::error::CliError;

pub fn run_background(name: Option<&str>, list: bool, store_path: &Path) -> Result<(), CliError> {
    let mut app = open_app(store_path)?;
    let current = app.background();

    if list {
        for background in Background::ALL {
            let marker = if background == current { "*" } else { " " };
            println!("{marker} {:<8} {}", background.as_str(), background.label());
        }
        return Ok(());
    }

    let Some(name) = name else {
        println!("{current}");
        return Ok(());
    };

    let background = name
        .parse::<Background>()
        .map_err(|_| CliError::UnknownBackground(name.trim().to_string()))?;
    app.set_background(background)?;
    tracing::debug!("Background changed from {} to {}", current, background);
    println!("{background}");
    Ok(())
}
