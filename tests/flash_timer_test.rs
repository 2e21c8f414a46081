// Integration tests for duplicate-chip flash timers under paused tokio time

use chipbox::widgets::{ChipCombobox, FlashTimer};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Duration;
use tokio::time::Instant;

fn add_duplicate(widget: &mut ChipCombobox, label: &str) -> FlashTimer {
    for c in label.chars() {
        widget.handle_key_event(KeyEvent::from(KeyCode::Char(c)));
    }
    widget
        .handle_key_event(KeyEvent::from(KeyCode::Enter))
        .flash
        .expect("duplicate should schedule a flash")
}

fn labels() -> ChipCombobox {
    ChipCombobox::new(["backend", "bug"])
        .with_combobox(|c| c.with_allow_new(true))
        .with_chips(["backend", "bug"])
}

#[tokio::test(start_paused = true)]
async fn test_flash_clears_after_default_duration() {
    let mut widget = labels();
    let timer = add_duplicate(&mut widget, "bug");
    assert_eq!(widget.flash_index(), Some(1));
    assert_eq!(timer.delay(), Duration::from_millis(300));

    let start = Instant::now();
    let expired = timer.expire().await;
    assert!(start.elapsed() >= Duration::from_millis(300));

    assert!(widget.clear_flash(expired));
    assert_eq!(widget.flash_index(), None);
}

#[tokio::test(start_paused = true)]
async fn test_stale_expiry_does_not_clear_newer_flash() {
    let mut widget = labels();
    let first = add_duplicate(&mut widget, "backend");
    let second = add_duplicate(&mut widget, "bug");
    assert_eq!(widget.flash_index(), Some(1));

    let first = tokio::spawn(first.expire());
    let second = tokio::spawn(second.expire());

    let expired = first.await.unwrap();
    assert!(!widget.clear_flash(expired));
    assert_eq!(widget.flash_index(), Some(1));

    let expired = second.await.unwrap();
    assert!(widget.clear_flash(expired));
    assert_eq!(widget.flash_index(), None);
}

#[tokio::test(start_paused = true)]
async fn test_reflash_same_chip_extends_flash() {
    let mut widget = labels();
    let first = add_duplicate(&mut widget, "bug");

    tokio::time::sleep(Duration::from_millis(200)).await;
    let second = add_duplicate(&mut widget, "bug");

    // Same chip, but the first flash's generation is outdated
    let expired = first.expire().await;
    assert!(!widget.clear_flash(expired));
    assert_eq!(widget.flash_index(), Some(1));

    let expired = second.expire().await;
    assert!(widget.clear_flash(expired));
}

#[tokio::test(start_paused = true)]
async fn test_configured_flash_duration() {
    let mut widget = labels().with_flash_duration(Duration::from_millis(750));
    let timer = add_duplicate(&mut widget, "backend");
    assert_eq!(timer.delay(), Duration::from_millis(750));

    let start = Instant::now();
    let expired = timer.expire().await;
    assert!(start.elapsed() >= Duration::from_millis(750));
    assert!(widget.clear_flash(expired));
}
