use std::time::Duration;

/// Delay used before applying "add member" and "submit" so the click that
/// triggered them has finished its own handling first.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

pub async fn settle() {
    tokio::time::sleep(SETTLE_DELAY).await;
}
