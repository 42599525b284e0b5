mod cli;
mod demos;
mod shell;

use anyhow::{Context, Result};
use std::io;

use crate::config::Settings;
use crate::ui::theme::Theme;

pub(crate) use cli::as_cli;
use shell::Shell;

/// Run the interactive menu on the process's stdin/stdout.
pub(crate) fn as_shell(settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let theme = Theme::new(settings.color);
    Shell::new(stdin.lock(), stdout.lock(), theme, settings.clone())
        .run()
        .context("Console session failed")?;
    Ok(())
}
