//! Countdown watcher - owns one session's tick task and join confirmation

use super::clock::{Clock, WaitlistNudge};
use super::engine::TierEngine;
use super::CountdownSnapshot;
use crate::config::CountdownConfig;
use crate::session::Session;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Event emitted by a countdown watcher
#[derive(Debug, Clone)]
pub enum CountdownEvent {
    /// Periodic tier/waitlist snapshot
    Snapshot {
        session_id: Uuid,
        snapshot: CountdownSnapshot,
    },

    /// Join acknowledged, confirmation pending
    JoinPending { session_id: Uuid },

    /// Join confirmed; fired exactly once per completed join
    Joined { session_id: Uuid },
}

/// Drives one session's countdown on a fixed cadence
///
/// Owns exactly one periodic tick task and at most one pending join
/// confirmation. Both are aborted on [`CountdownWatcher::shutdown`] and on
/// drop, so no callback outlives the watcher.
pub struct CountdownWatcher {
    session_id: Uuid,
    engine: Arc<Mutex<TierEngine>>,
    event_sender: mpsc::Sender<CountdownEvent>,
    join_confirm: Duration,
    join_pending: Arc<AtomicBool>,
    tick_task: JoinHandle<()>,
    join_task: Option<JoinHandle<()>>,
    torn_down: bool,
}

impl CountdownWatcher {
    /// Spawn the periodic tick task for one session
    pub fn spawn(
        session: &Session,
        config: &CountdownConfig,
        clock: impl Clock,
        nudge: impl WaitlistNudge,
        event_sender: mpsc::Sender<CountdownEvent>,
    ) -> Self {
        let engine = Arc::new(Mutex::new(TierEngine::new(
            session.start_time,
            config.initial_waitlist,
            config.waitlist_cap,
        )));
        let session_id = session.id;

        let tick_task = {
            let engine = Arc::clone(&engine);
            let sender = event_sender.clone();
            let tick = Duration::from_secs(config.tick_seconds.max(1));
            let mut nudge = nudge;
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(tick);
                loop {
                    interval.tick().await;
                    let now = clock.now();
                    let snapshot = engine.lock().await.tick(now, &mut nudge);
                    if sender
                        .send(CountdownEvent::Snapshot {
                            session_id,
                            snapshot,
                        })
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
            })
        };

        tracing::debug!("Spawned countdown watcher for session {}", session_id);

        Self {
            session_id,
            engine,
            event_sender,
            join_confirm: Duration::from_secs(config.join_confirm_seconds),
            join_pending: Arc::new(AtomicBool::new(false)),
            tick_task,
            join_task: None,
            torn_down: false,
        }
    }

    /// Session this watcher is driving
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Request to join the session
    ///
    /// A no-op when the room has closed or the watcher is torn down; ignored
    /// (not queued) while a previous join is still pending. Otherwise emits
    /// `JoinPending` immediately and `Joined` once after the confirmation
    /// delay.
    pub async fn join(&mut self) {
        if self.torn_down {
            return;
        }
        if self.engine.lock().await.is_closed() {
            tracing::debug!("Ignoring join for closed session {}", self.session_id);
            return;
        }
        if self.join_pending.swap(true, Ordering::SeqCst) {
            return;
        }

        let session_id = self.session_id;
        let _ = self
            .event_sender
            .send(CountdownEvent::JoinPending { session_id })
            .await;

        let sender = self.event_sender.clone();
        let pending = Arc::clone(&self.join_pending);
        let delay = self.join_confirm;
        self.join_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(CountdownEvent::Joined { session_id }).await;
            pending.store(false, Ordering::SeqCst);
        }));
    }

    /// Tear down the tick task and any pending join confirmation
    ///
    /// After this no event is delivered for this watcher.
    pub fn shutdown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.tick_task.abort();
        if let Some(task) = self.join_task.take() {
            task.abort();
        }
        tracing::debug!("Tore down countdown watcher for session {}", self.session_id);
    }
}

impl Drop for CountdownWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}
