use std::sync::Arc;

use analysis::client::validate_input;
use analysis::{normalize, AnalysisClient};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::{AppState, Phase, UiEvent, ViewMode};

/// Dispatches one key event. Returns true when the console should exit.
pub(crate) fn handle_key_event(
    key: KeyEvent,
    app: &mut AppState,
    client: &Arc<AnalysisClient>,
    ui_tx: &mpsc::Sender<UiEvent>,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if app.confirm_quit {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => return true,
            KeyCode::Esc => {
                app.confirm_quit = false;
                return false;
            }
            _ => {
                app.confirm_quit = false;
            }
        }
    }

    if app.view_mode == ViewMode::ResultFullscreen {
        return handle_result_fullscreen_key(key, app);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => app.confirm_quit = true,
        KeyCode::Char('s') | KeyCode::Char('S') if ctrl => submit(app, client, ui_tx),
        KeyCode::Char('l') | KeyCode::Char('L') if ctrl => app.clear_form(),
        KeyCode::Char('r') | KeyCode::Char('R') if ctrl => app.enter_result_fullscreen(),
        KeyCode::Enter => app.push_char('\n'),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(ch) if !ctrl => app.push_char(ch),
        _ => {}
    }
    false
}

/// Starts the one outstanding analysis request. Validation failures surface
/// immediately; a request already in flight keeps the form closed to new
/// submissions.
fn submit(app: &mut AppState, client: &Arc<AnalysisClient>, ui_tx: &mpsc::Sender<UiEvent>) {
    if app.is_loading() {
        return;
    }
    let text = app.input.clone();
    if let Err(message) = validate_input(&text) {
        app.phase = Phase::Error(message);
        return;
    }
    app.phase = Phase::Loading;
    let client = Arc::clone(client);
    let ui_tx = ui_tx.clone();
    tokio::spawn(async move {
        let event = match client.analyze(&text).await {
            Ok(outcome) => match normalize(outcome) {
                Ok(result) => UiEvent::Verdict(Box::new(result)),
                Err(message) => UiEvent::Failed(message),
            },
            Err(message) => UiEvent::Failed(message),
        };
        let _ = ui_tx.send(event).await;
    });
}

fn handle_result_fullscreen_key(key: KeyEvent, app: &mut AppState) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => app.confirm_quit = true,
        KeyCode::Char('r') | KeyCode::Char('R') if ctrl => app.exit_result_fullscreen(),
        KeyCode::Esc => app.exit_result_fullscreen(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::PageDown => app.scroll_down(app.page_size()),
        KeyCode::PageUp => app.scroll_up(app.page_size()),
        KeyCode::Char('f') if ctrl => app.scroll_down(app.page_size()),
        KeyCode::Char('b') if ctrl => app.scroll_up(app.page_size()),
        KeyCode::Char('d') if ctrl => app.scroll_down(app.half_page_size()),
        KeyCode::Char('u') if ctrl => app.scroll_up(app.half_page_size()),
        KeyCode::Char('g') => {
            if app.pending_g {
                app.scroll_to_top();
            } else {
                app.pending_g = true;
            }
        }
        KeyCode::Char('G') => app.scroll_to_bottom(),
        _ => app.pending_g = false,
    }
    false
}
