//! Debounced autosave for the post editor.
//!
//! Edit events for one post collapse into a single persistence call after
//! a quiet period; the latest payload wins. Timers run on a dedicated
//! worker thread, so a save fires even after the session that scheduled it
//! has gone away.

use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::services::PostService;
use crate::domain::PostDraft;
use crate::notify::Notifier;
use crate::storage::ClubStore;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(2000);

/// Topic an editing session subscribes to for one post's save events.
pub fn post_topic(post_id: Uuid) -> String {
    format!("post.{post_id}")
}

pub const SAVED_EVENT: &str = "autosave.saved";

struct PendingSave {
    draft: PostDraft,
    actor: Uuid,
    deadline: Instant,
}

#[derive(Default)]
struct TimerTable {
    pending: HashMap<Uuid, PendingSave>,
    shutdown: bool,
}

struct Shared {
    table: Mutex<TimerTable>,
    signal: Condvar,
    store: Arc<dyn ClubStore>,
    notifier: Arc<Notifier>,
    window: Duration,
}

/// Owns the per-post debounce table and the worker that drains it.
///
/// At most one pending entry exists per post; re-scheduling replaces the
/// payload and restarts the countdown. Persistence failures are logged and
/// swallowed here — no retry, no `saved` event.
pub struct AutosaveCoordinator {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl AutosaveCoordinator {
    pub fn new(store: Arc<dyn ClubStore>, notifier: Arc<Notifier>, window: Duration) -> Self {
        let shared = Arc::new(Shared {
            table: Mutex::new(TimerTable::default()),
            signal: Condvar::new(),
            store,
            notifier,
            window,
        });
        let worker = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || worker_loop(&shared))
        };
        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Records an edit event. Any save already pending for this post is
    /// superseded: its payload is discarded and its countdown restarts.
    pub fn schedule(&self, post_id: Uuid, draft: PostDraft, actor: Uuid) {
        let mut table = lock(&self.shared.table);
        if table.shutdown {
            debug!(%post_id, "coordinator is shut down; edit dropped");
            return;
        }
        let superseded = table
            .pending
            .insert(
                post_id,
                PendingSave {
                    draft,
                    actor,
                    deadline: Instant::now() + self.shared.window,
                },
            )
            .is_some();
        drop(table);
        if superseded {
            debug!(%post_id, "pending autosave superseded");
        }
        self.shared.signal.notify_one();
    }

    /// Number of posts with a save still pending.
    pub fn pending_count(&self) -> usize {
        lock(&self.shared.table).pending.len()
    }

    /// Stops accepting edits, flushes every pending save immediately, and
    /// joins the worker. Idempotent; also runs on drop.
    pub fn shutdown(&mut self) {
        {
            let mut table = lock(&self.shared.table);
            if table.shutdown {
                return;
            }
            table.shutdown = true;
        }
        self.shared.signal.notify_one();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for AutosaveCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn lock(table: &Mutex<TimerTable>) -> MutexGuard<'_, TimerTable> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

fn worker_loop(shared: &Shared) {
    let mut table = lock(&shared.table);
    loop {
        let now = Instant::now();
        // Shutdown flushes everything still pending instead of losing edits.
        let due: Vec<Uuid> = table
            .pending
            .iter()
            .filter(|(_, save)| table.shutdown || save.deadline <= now)
            .map(|(post_id, _)| *post_id)
            .collect();

        if !due.is_empty() {
            let jobs: Vec<(Uuid, PendingSave)> = due
                .into_iter()
                .filter_map(|post_id| table.pending.remove(&post_id).map(|save| (post_id, save)))
                .collect();
            drop(table);
            for (post_id, save) in jobs {
                fire(shared, post_id, save);
            }
            table = lock(&shared.table);
            continue;
        }

        if table.shutdown {
            break;
        }

        table = match table.pending.values().map(|save| save.deadline).min() {
            Some(next) => {
                let wait = next.saturating_duration_since(Instant::now());
                shared
                    .signal
                    .wait_timeout(table, wait)
                    .unwrap_or_else(PoisonError::into_inner)
                    .0
            }
            None => shared
                .signal
                .wait(table)
                .unwrap_or_else(PoisonError::into_inner),
        };
    }
}

fn fire(shared: &Shared, post_id: Uuid, save: PendingSave) {
    match PostService::apply(shared.store.as_ref(), post_id, &save.draft, save.actor) {
        Ok(post) => {
            debug!(%post_id, "autosave committed");
            shared.notifier.publish(
                &post_topic(post_id),
                SAVED_EVENT,
                json!({
                    "post_id": post_id,
                    "updated_at": post.updated_at,
                }),
            );
        }
        Err(err) => {
            // No retry at this layer; the edit stays unsaved and the
            // session keeps its saving indicator.
            warn!(%post_id, %err, "autosave failed; draft not persisted");
        }
    }
}
