//! Async tasks behind the scheduler.
//!
//! Each timer runs in its own task; none of them touch dashboard state, they only emit events.

use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{interval, MissedTickBehavior};

use super::{ActionRequest, TelemetryEvent};

/// Emit `make_event()` every `period` until shutdown or until the consumer goes away.
pub async fn ticker_task<F>(
    name: &'static str,
    period: Duration,
    make_event: F,
    event_tx: mpsc::Sender<TelemetryEvent>,
    mut shutdown: broadcast::Receiver<()>,
) where
    F: Fn() -> TelemetryEvent + Send + 'static,
{
    log::debug!("{} ticker started ({:?})", name, period);

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if event_tx.send(make_event()).await.is_err() {
                    log::debug!("{} ticker: receiver dropped", name);
                    break;
                }
            }
            _ = shutdown.recv() => {
                log::debug!("{} ticker shutting down", name);
                break;
            }
        }
    }
}

/// Run simulated actions: wait out the fixed delay, then report completion.
///
/// Each request gets its own task, so a slow cleanup does not hold back a kill.
pub async fn action_task(
    mut action_rx: mpsc::Receiver<ActionRequest>,
    event_tx: mpsc::Sender<TelemetryEvent>,
    kill_delay: Duration,
    clean_delay: Duration,
    mut shutdown: broadcast::Receiver<()>,
) {
    log::debug!("Action task started");

    loop {
        tokio::select! {
            Some(request) = action_rx.recv() => {
                let (delay, completion) = match request {
                    ActionRequest::KillProcess(pid) => {
                        (kill_delay, TelemetryEvent::ProcessKilled(pid))
                    }
                    ActionRequest::CleanCache(ids) => {
                        (clean_delay, TelemetryEvent::CacheCleaned(ids))
                    }
                };

                let tx = event_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if let Err(e) = tx.send(completion).await {
                        log::error!("Failed to deliver action completion: {}", e);
                    }
                });
            }
            _ = shutdown.recv() => {
                log::debug!("Action task shutting down");
                break;
            }
            else => break,
        }
    }
}
