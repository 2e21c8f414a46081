// App - terminal setup and the form event loop
//
// Input arrives from the polling task and flash expiries from timer tasks,
// both over one channel. Every event is followed by a redraw.

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use tokio::sync::mpsc;

use super::async_input::{spawn_input_task, AppEvent};
use super::form::{FieldFlash, Form, FormOutcome, FormValues};
use super::form_widget::FormWidget;
use crate::config::ColorScheme;

/// Restores the terminal when dropped, including on early return
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

/// Alternate screen plus bracketed paste, so pastes arrive as one event
fn enter_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, EnableBracketedPaste)
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, DisableBracketedPaste, LeaveAlternateScreen)
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        enter_screen(&mut io::stdout()).context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("Failed to create terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = leave_screen(&mut io::stdout());
        let _ = disable_raw_mode();
        let _ = self.terminal.show_cursor();
    }
}

/// Schedule a flash expiry to come back through the event channel
fn schedule_flash(tx: &mpsc::UnboundedSender<AppEvent>, flash: FieldFlash) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let expired = flash.timer.expire().await;
        let _ = tx.send(AppEvent::FlashExpired {
            field: flash.field,
            expired,
        });
    });
}

/// Run the form until it is submitted or cancelled.
///
/// Returns the submitted values, or `None` on cancel.
pub async fn run_form(mut form: Form, colors: &ColorScheme) -> Result<Option<FormValues>> {
    let mut guard = TerminalGuard::enter()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let input_task = spawn_input_task(tx.clone());

    let result = loop {
        guard
            .terminal
            .draw(|frame| {
                frame.render_widget(FormWidget::new(&form, colors), frame.area());
            })
            .context("Failed to draw form")?;

        let Some(event) = rx.recv().await else {
            tracing::warn!("input channel closed");
            break None;
        };

        match event {
            AppEvent::Key(key) => {
                let (outcome, flash) = form.handle_key_event(key);
                if let Some(flash) = flash {
                    schedule_flash(&tx, flash);
                }
                match outcome {
                    FormOutcome::Continue => {}
                    FormOutcome::Submitted(values) => break Some(values),
                    FormOutcome::Cancelled => break None,
                }
            }
            AppEvent::FlashExpired { field, expired } => form.clear_flash(field, expired),
            AppEvent::Resize => {}
        }
    };

    // The polling task notices the closed channel on its next tick
    drop(rx);
    drop(guard);
    let _ = input_task.await;

    match &result {
        Some(_) => tracing::info!("form submitted"),
        None => tracing::info!("form cancelled"),
    }
    Ok(result)
}
