//! Filesystem change notification for the watched file pair.
//!
//! [`ChangeNotifier`] registers non-recursive watches on the directories
//! containing both configured files, funnels raw [`notify`] events through
//! a debounce buffer, and recomputes the diff once per settled burst of
//! events. Results (or failures) are published to every subscriber of the
//! shared [`Broadcaster`].

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time;

use crate::differ::FileDiffer;
use crate::error::DifferError;
use crate::view::DiffEvent;

#[path = "notifier_test.rs"]
#[cfg(test)]
mod notifier_test;

const BROADCAST_CAPACITY: usize = 256;
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// A burst of raw events for a path must go quiet for this long before it
/// triggers a recomputation. Editors emit several events per save; one
/// settled window means one recompute.
const DEBOUNCE_WINDOW: Duration = Duration::from_millis(150);
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Fire-and-forget fan-out of [`DiffEvent`]s to all connected viewers.
/// A slow or absent subscriber never blocks publishing.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    sender: broadcast::Sender<DiffEvent>,
}

impl Broadcaster {
    pub fn new() -> Broadcaster {
        let (sender, _) = broadcast::channel(BROADCAST_CAPACITY);
        Broadcaster { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DiffEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: DiffEvent) {
        match self.sender.send(event) {
            Ok(receiver_count) => log::debug!("published diff event to {receiver_count} viewers"),
            Err(_) => log::debug!("published diff event with no viewers connected"),
        }
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Broadcaster::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierState {
    Idle,
    Watching,
    Stopped,
}

/// Watches the two configured paths and pushes recomputed diffs to the
/// broadcaster. `Idle` until [`start`](Self::start); `Stopped` is
/// terminal, a new session needs a new instance.
pub struct ChangeNotifier {
    differ: Arc<FileDiffer>,
    broadcaster: Broadcaster,
    state: NotifierState,
    watcher: Option<RecommendedWatcher>,
    loop_handle: Option<JoinHandle<()>>,
}

impl ChangeNotifier {
    pub fn new(differ: Arc<FileDiffer>, broadcaster: Broadcaster) -> ChangeNotifier {
        ChangeNotifier {
            differ,
            broadcaster,
            state: NotifierState::Idle,
            watcher: None,
            loop_handle: None,
        }
    }

    pub fn state(&self) -> NotifierState {
        self.state
    }

    /// Register the directory watches and spawn the event loop.
    pub fn start(&mut self) -> Result<(), DifferError> {
        if self.state != NotifierState::Idle {
            return Err(DifferError::configuration(
                "Notifier can only be started once, from the idle state",
            ));
        }

        let (event_tx, event_rx) = mpsc::channel::<Event>(EVENT_CHANNEL_CAPACITY);
        let mut watcher =
            notify::recommended_watcher(move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    // Blocks the notify thread if the loop falls behind;
                    // only fails once the loop has shut down, and events
                    // arriving after stop() have nowhere to go.
                    let _ = event_tx.blocking_send(event);
                }
                Err(e) => log::error!("Filesystem watch error: {e}"),
            })?;

        for dir in self.watch_dirs()? {
            watcher.watch(&dir, RecursiveMode::NonRecursive)?;
            log::info!("Watching directory: {}", dir.display());
        }

        let differ = self.differ.clone();
        let broadcaster = self.broadcaster.clone();
        let handle = tokio::spawn(async move {
            event_loop(differ, broadcaster, event_rx).await;
        });

        self.watcher = Some(watcher);
        self.loop_handle = Some(handle);
        self.state = NotifierState::Watching;
        Ok(())
    }

    /// Release the OS watch handles and tear down the event loop.
    pub fn stop(&mut self) {
        if self.state == NotifierState::Stopped {
            return;
        }
        // Dropping the watcher deregisters the OS watches and closes the
        // event channel, which also ends the loop; aborting the task just
        // makes teardown immediate.
        self.watcher.take();
        if let Some(handle) = self.loop_handle.take() {
            handle.abort();
        }
        self.state = NotifierState::Stopped;
        log::info!("Change notifier stopped");
    }

    fn watch_dirs(&self) -> Result<Vec<PathBuf>, DifferError> {
        let mut dirs: Vec<PathBuf> = Vec::new();
        for path in [&self.differ.file1_path, &self.differ.file2_path] {
            let dir = path.parent().ok_or_else(|| {
                DifferError::configuration(format!("File has no parent directory: {path:?}"))
            })?;
            if !dirs.iter().any(|d| d == dir) {
                dirs.push(dir.to_path_buf());
            }
        }
        Ok(dirs)
    }
}

impl Drop for ChangeNotifier {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn event_loop(
    differ: Arc<FileDiffer>,
    broadcaster: Broadcaster,
    mut event_rx: mpsc::Receiver<Event>,
) {
    let targets = [differ.file1_path.clone(), differ.file2_path.clone()];
    let mut pending: HashMap<PathBuf, Instant> = HashMap::new();
    let mut interval = time::interval(TICK_INTERVAL);

    loop {
        tokio::select! {
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(event) => buffer_event(event, &targets, &mut pending),
                    // Watcher dropped; nothing more will arrive.
                    None => break,
                }
            }

            _ = interval.tick() => {
                let now = Instant::now();
                let settled: Vec<PathBuf> = pending
                    .iter()
                    .filter(|(_, seen)| now.duration_since(**seen) >= DEBOUNCE_WINDOW)
                    .map(|(path, _)| path.clone())
                    .collect();
                if settled.is_empty() {
                    continue;
                }
                for path in &settled {
                    pending.remove(path);
                }

                log::debug!("Recomputing diff after changes to {settled:?}");
                // One recompute covers every settled path; this loop is a
                // single task, so recomputations never overlap. Events
                // arriving meanwhile buffer into the next window.
                match differ.compute_diff() {
                    Ok(diff) => broadcaster.publish(DiffEvent::updated(diff)),
                    Err(err) => {
                        log::error!("Failed to recompute diff: {err}");
                        broadcaster.publish(DiffEvent::failed(err.to_string()));
                    }
                }
            }
        }
    }
}

/// Record qualifying events. Directory watches also report sibling files,
/// which are filtered out here by exact canonical-path match.
fn buffer_event(event: Event, targets: &[PathBuf; 2], pending: &mut HashMap<PathBuf, Instant>) {
    let qualifies = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );
    if !qualifies {
        return;
    }

    for path in event.paths {
        if targets.iter().any(|target| *target == path) {
            log::trace!("Buffered {:?} for {}", event.kind, path.display());
            pending.insert(path, Instant::now());
        }
    }
}
