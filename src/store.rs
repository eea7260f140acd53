//! Toast store task.
//!
//! The [`ToastStore`] is the single owner of the toast list. It runs in a
//! dedicated Tokio task, processes [`ToastAction`] messages sequentially, and
//! publishes every change to the displayed list through a `watch` channel.
//! Accessors ([`crate::handle::ToastHandle`]) never touch the list directly;
//! all mutation is mediated by the store's action handler.
//!
//! # Display policy
//!
//! - At most `max_visible` toasts are displayed at once (see
//!   [`crate::config::StoreSettings`]). Overflow queues in FIFO order and is
//!   promoted as slots free up.
//! - Each displayed toast is evicted after its kind's auto-dismiss duration.
//!   The countdown starts at display time, so a queued toast gets its full
//!   duration once promoted.
//! - Kinds without an auto-dismiss duration (error, by default) stay until
//!   dismissed or cleared.
//!
//! # Lifecycle
//!
//! The event loop exits on [`ToastAction::Shutdown`], or once every handle
//! has been dropped and the remaining timed toasts have drained.
//!
//! # Example
//!
//! ```no_run
//! use toastbus::config::StoreSettings;
//! use toastbus::store::ToastStore;
//!
//! # async fn example() {
//! let (store, toasts) = ToastStore::new(StoreSettings::default());
//! tokio::spawn(store.run());
//!
//! toasts.trigger_toast("Profile saved");
//! # }
//! ```

use crate::config::StoreSettings;
use crate::handle::ToastHandle;
use crate::messages::ToastAction;
use crate::toast::{Toast, ToastId, ToastKind, ToastList};
use std::collections::VecDeque;
use std::future;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};
use tracing::{debug, info};

/// A toast currently displayed, together with its eviction deadline.
#[derive(Debug)]
struct Displayed {
    toast: Toast,
    /// `None` for sticky kinds; the toast stays until dismissed.
    expires_at: Option<Instant>,
}

/// State container that owns the toast list and applies display policy.
///
/// Created together with its first [`ToastHandle`] by [`new`](Self::new);
/// additional handles are clones of the first. The store itself holds no
/// sender for its action channel, so the event loop ends naturally when the
/// last handle is dropped.
pub struct ToastStore {
    settings: StoreSettings,
    action_rx: mpsc::UnboundedReceiver<ToastAction>,
    list_tx: watch::Sender<ToastList>,
    visible: Vec<Displayed>,
    queued: VecDeque<Toast>,
}

impl ToastStore {
    /// Create a store and its first connected handle.
    ///
    /// This does not start the event loop. Call [`run`](Self::run) and spawn
    /// it as a Tokio task.
    pub fn new(settings: StoreSettings) -> (Self, ToastHandle) {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (list_tx, list_rx) = watch::channel(ToastList::new());

        let store = Self {
            settings,
            action_rx,
            list_tx,
            visible: Vec::new(),
            queued: VecDeque::new(),
        };
        (store, ToastHandle::new(action_tx, list_rx))
    }

    /// Run the store event loop, processing actions until shutdown.
    ///
    /// Consumes the store; spawn it as a task:
    ///
    /// ```no_run
    /// # use toastbus::{config::StoreSettings, store::ToastStore};
    /// # let (store, _toasts) = ToastStore::new(StoreSettings::default());
    /// tokio::spawn(store.run());
    /// ```
    ///
    /// Actions are applied in the order received. Every change to the
    /// displayed list is published on the watch channel; queue-only changes
    /// are not observable and do not notify.
    pub async fn run(mut self) {
        info!(max_visible = self.settings.max_visible, "toast store started");

        loop {
            let deadline = self.next_deadline();
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    match action {
                        ToastAction::Trigger { message, kind } => {
                            if self.append(message, kind) {
                                self.publish();
                            }
                        }
                        ToastAction::Dismiss { id } => {
                            if self.remove(id) {
                                self.publish();
                            }
                        }
                        ToastAction::Clear => {
                            if self.clear_all() {
                                self.publish();
                            }
                        }
                        ToastAction::Shutdown { response } => {
                            info!("toast store shutting down");
                            let _ = response.send(());
                            break;
                        }
                    }
                }
                () = wait_until(deadline), if deadline.is_some() => {
                    if self.evict_expired() {
                        self.publish();
                    }
                }
                else => {
                    debug!("all toast handles dropped; store stopping");
                    break;
                }
            }
        }
    }

    /// Append a toast, displaying it immediately if a slot is free.
    ///
    /// Returns `true` if the displayed list changed.
    fn append(&mut self, message: String, kind: ToastKind) -> bool {
        let toast = Toast::new(message, kind);
        debug!(id = %toast.id, kind = %toast.kind, "toast triggered");

        if self.visible.len() < self.settings.max_visible {
            self.show(toast);
            true
        } else {
            self.queued.push_back(toast);
            false
        }
    }

    /// Move a toast into the displayed list and arm its eviction deadline.
    fn show(&mut self, toast: Toast) {
        let expires_at = self
            .settings
            .display
            .auto_dismiss(toast.kind)
            .map(|after| Instant::now() + after);
        self.visible.push(Displayed { toast, expires_at });
    }

    /// Remove the toast with the given id, wherever it currently lives.
    ///
    /// Returns `true` if the displayed list changed. Unknown ids are ignored.
    fn remove(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.visible.iter().position(|shown| shown.toast.id == id) {
            let shown = self.visible.remove(pos);
            debug!(id = %shown.toast.id, "toast dismissed");
            self.promote_queued();
            return true;
        }

        if let Some(pos) = self.queued.iter().position(|toast| toast.id == id) {
            let _ = self.queued.remove(pos);
            debug!(%id, "queued toast dismissed");
            return false;
        }

        debug!(%id, "dismiss for unknown toast id ignored");
        false
    }

    /// Drop every toast, displayed and queued.
    ///
    /// Returns `true` if the displayed list changed.
    fn clear_all(&mut self) -> bool {
        let dropped = self.visible.len() + self.queued.len();
        if dropped > 0 {
            debug!(count = dropped, "clearing all toasts");
        }

        let had_visible = !self.visible.is_empty();
        self.visible.clear();
        self.queued.clear();
        had_visible
    }

    /// Evict displayed toasts whose deadline has passed.
    ///
    /// Returns `true` if the displayed list changed.
    fn evict_expired(&mut self) -> bool {
        let now = Instant::now();
        let before = self.visible.len();
        self.visible
            .retain(|shown| shown.expires_at.is_none_or(|at| at > now));

        let evicted = before - self.visible.len();
        if evicted == 0 {
            return false;
        }
        debug!(count = evicted, "evicted expired toasts");
        self.promote_queued();
        true
    }

    /// Fill free display slots from the queue, oldest first.
    fn promote_queued(&mut self) {
        while self.visible.len() < self.settings.max_visible {
            match self.queued.pop_front() {
                Some(toast) => {
                    debug!(id = %toast.id, "promoting queued toast");
                    self.show(toast);
                }
                None => break,
            }
        }
    }

    /// Earliest eviction deadline among displayed toasts.
    fn next_deadline(&self) -> Option<Instant> {
        self.visible.iter().filter_map(|shown| shown.expires_at).min()
    }

    /// Publish the current displayed list to all watchers.
    fn publish(&self) {
        self.list_tx.send_replace(self.current_list());
    }

    fn current_list(&self) -> ToastList {
        self.visible.iter().map(|shown| shown.toast.clone()).collect()
    }
}

/// Sleep until the deadline, or forever when there is none.
///
/// The forever case only exists so the eviction arm of the store's `select!`
/// can stay disabled without a deadline; it is never polled then.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => time::sleep_until(at).await,
        None => future::pending::<()>().await,
    }
}

// =============================================================================
// Tests
// =============================================================================
