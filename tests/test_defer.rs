//! Tests for the one-tick deferral that add and submit wait on.

use prepost_form::core::defer;

#[tokio::test(start_paused = true)]
async fn test_settle_waits_one_tick() {
    let start = tokio::time::Instant::now();
    defer::settle().await;
    assert!(start.elapsed() >= defer::SETTLE_DELAY);
}

#[tokio::test(start_paused = true)]
async fn test_settle_not_done_before_delay() {
    let settle = tokio::spawn(defer::settle());
    tokio::time::sleep(defer::SETTLE_DELAY / 2).await;
    assert!(!settle.is_finished());

    tokio::time::sleep(defer::SETTLE_DELAY).await;
    assert!(settle.await.is_ok());
}
