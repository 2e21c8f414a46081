// Async input handler - non-blocking keyboard polling for the form host

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::widgets::FlashExpired;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Events consumed by the host event loop
#[derive(Debug)]
pub enum AppEvent {
    /// Key press from the terminal
    Key(KeyEvent),
    /// Terminal was resized; redraw
    Resize,
    /// A flash timer scheduled for `field` has fired
    FlashExpired { field: usize, expired: FlashExpired },
}

/// Drop characters that would corrupt the input line (control codes, private-use
/// ranges terminals use for inline images)
fn sanitize_char(c: char) -> bool {
    match c {
        ' '..='~' => true,
        '\u{0080}'..='\u{10FFFF}' => !matches!(
            c,
            '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}'
        ),
        _ => false,
    }
}

fn should_accept_key_event(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char(c) => sanitize_char(c),
        _ => true,
    }
}

/// Translate a raw terminal event, dropping what the form has no use for
fn translate(event: Event) -> Vec<AppEvent> {
    match event {
        Event::Key(key) if should_accept_key_event(&key) => vec![AppEvent::Key(key)],
        // Pasted text is replayed as individual key presses
        Event::Paste(text) => text
            .chars()
            .filter(|c| sanitize_char(*c))
            .map(|c| AppEvent::Key(KeyEvent::from(KeyCode::Char(c))))
            .collect(),
        Event::Resize(_, _) => vec![AppEvent::Resize],
        _ => Vec::new(),
    }
}

/// Spawn a background task that polls the terminal and forwards events.
///
/// The task stops when the receiving side of `tx` is dropped or the terminal
/// stops producing events.
pub fn spawn_input_task(tx: mpsc::UnboundedSender<AppEvent>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || loop {
        if tx.is_closed() {
            break;
        }
        match crossterm::event::poll(POLL_INTERVAL) {
            Ok(true) => match crossterm::event::read() {
                Ok(event) => {
                    if translate(event)
                        .into_iter()
                        .any(|app_event| tx.send(app_event).is_err())
                    {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "terminal read failed");
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(error = %e, "terminal poll failed");
                break;
            }
        }
    })
}
