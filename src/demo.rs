// Demo mode: feed synthetic scans to showcase the kiosk
//
// This module generates card scans the way a scanner at the door would,
// including deliberate repeat scans so both reaction cards show up.
//
// Run with: SCANDESK_DEMO=1 scandesk

use crate::events::ScanEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::oneshot;
use tokio::time::sleep;

/// Pause between synthetic scans, long enough to watch the card revert
const SCAN_GAP: Duration = Duration::from_millis(3500);

/// Generate an endless stream of demo scans until shutdown
pub async fn run_demo(tx: mpsc::Sender<ScanEvent>, mut shutdown_rx: oneshot::Receiver<()>) {
    // Initial delay to let TUI render
    sleep(Duration::from_millis(1500)).await;

    let mut seen: Vec<String> = Vec::new();
    let mut next_card = 4100u32;
    let mut step = 0usize;

    loop {
        // Check for shutdown signal before sending
        if shutdown_rx.try_recv().is_ok() {
            return;
        }

        // Every third scan replays an earlier card so the duplicate
        // reaction shows up too
        let id = if step % 3 == 2 && !seen.is_empty() {
            seen[(step / 3) % seen.len()].clone()
        } else {
            next_card += 17;
            let id = next_card.to_string();
            seen.push(id.clone());
            id
        };
        step += 1;

        if tx.send(ScanEvent::now(id)).await.is_err() {
            return; // UI is gone
        }

        tokio::select! {
            _ = &mut shutdown_rx => {
                tracing::info!("Demo received shutdown signal");
                return;
            }
            _ = sleep(SCAN_GAP) => {}
        }
    }
}
