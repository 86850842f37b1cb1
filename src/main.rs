use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use brandhue::app::{r#loop::run_loop, state::AppState};
use brandhue::config::AppConfig;
use brandhue::infrastructure::HttpBrandDirectory;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Everything that can fail on startup happens before raw mode, so a bad
    // config or log path never leaves the terminal unusable.
    let (config, config_warning) = AppConfig::load();
    brandhue::logging::init(&config)?;
    if let Some(warning) = config_warning {
        log::warn!("{warning}");
    }
    let directory = Arc::new(HttpBrandDirectory::new(&config)?);
    let app_state = AppState::new(config.debounce());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, directory).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(state) => {
            if let Some(company) = state.selection.selected_company {
                log::info!("exiting with {} selected", company.domain);
            }
        }
        Err(err) => {
            log::error!("{err:?}");
            eprintln!("{err:?}");
        }
    }

    Ok(())
}
