use std::time::Duration;

use toggle_text::{ToggleWidget, wakeup};

#[tokio::test]
async fn test_activation_wakes_host() {
    let (tx, mut rx) = wakeup::channel();
    let mut widget = ToggleWidget::new().with_wakeup(tx);

    widget.activate();

    let woke = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await;
    assert_eq!(woke, Ok(Some(())));
    assert!(widget.is_dirty());
}

#[test]
fn test_one_signal_per_activation() {
    let (tx, mut rx) = wakeup::channel();
    let mut widget = ToggleWidget::new().with_wakeup(tx);

    widget.activate();
    widget.activate();

    assert!(rx.try_recv());
    assert!(rx.try_recv());
    assert!(!rx.try_recv());
}

#[test]
fn test_drain_collapses_pending_signals() {
    let (tx, mut rx) = wakeup::channel();
    let mut widget = ToggleWidget::new().with_wakeup(tx);

    for _ in 0..5 {
        widget.activate();
    }
    rx.drain();

    assert!(!rx.try_recv());
    assert!(!widget.is_visible());
}

#[test]
fn test_full_channel_does_not_block() {
    let (tx, mut rx) = wakeup::channel();
    let mut widget = ToggleWidget::new().with_wakeup(tx);

    for _ in 0..100 {
        widget.activate();
    }

    // 100 activations, an even count
    assert!(widget.is_visible());
    assert!(rx.try_recv());
}

#[test]
fn test_closed_receiver_is_ignored() {
    let (tx, rx) = wakeup::channel();
    drop(rx);
    let mut widget = ToggleWidget::new().with_wakeup(tx);

    widget.activate();

    assert!(!widget.is_visible());
}

#[tokio::test]
async fn test_recv_ends_when_widget_unmounts() {
    let (tx, mut rx) = wakeup::channel();
    let widget = ToggleWidget::new().with_wakeup(tx);

    widget.unmount();

    assert_eq!(rx.recv().await, None);
}

#[test]
fn test_no_wakeup_without_sender() {
    let mut widget = ToggleWidget::new();

    widget.activate();

    assert!(widget.is_dirty());
}
