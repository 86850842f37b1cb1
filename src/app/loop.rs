use crate::app::{
    action::Action, handler::handle_command, input::map_event_to_action, reducer, state::AppState,
    ui,
};
use crate::domain::brand::BrandDirectory;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, sleep_until, Instant};

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'a>,
    directory: Arc<dyn BrandDirectory>,
) -> Result<AppState<'a>> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, directory, event_rx).await
}

/// Runs until the user quits and hands back the final state.
pub async fn run_loop_with_events<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'a>,
    directory: Arc<dyn BrandDirectory>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<AppState<'a>> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let debounce_deadline = app_state.search.controller.deadline();
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),

            // Trailing edge of the search debounce
            () = wait_for(debounce_deadline) => Some(Action::DebounceElapsed),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action, Instant::now());

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, directory.clone(), action_tx.clone());
            }
        }
    }

    Ok(app_state)
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
