//! Accessor handle for the toast store.
//!
//! A [`ToastHandle`] is the caller-facing face of the store: a reactive
//! read-only view of the displayed toast list plus a dispatch surface for
//! trigger, dismiss, and clear requests. It is a reference-and-projection
//! pair (action sender, list watch receiver) and holds no toast state of its
//! own.
//!
//! # Contract
//!
//! - [`toasts`](ToastHandle::toasts) always reads the store's current list;
//!   no resubscription is needed after changes.
//! - Dispatch methods are synchronous, never block, and return nothing:
//!   completion is observed through the reactive view, not through a return
//!   value. A dispatch to a stopped store is logged and dropped.
//! - Handles are cheap to clone; all clones address the same store.
//!
//! # Example
//!
//! ```no_run
//! use toastbus::config::StoreSettings;
//! use toastbus::store::ToastStore;
//! use toastbus::toast::ToastKind;
//!
//! # async fn example() -> Result<(), tokio::sync::watch::error::RecvError> {
//! let (store, toasts) = ToastStore::new(StoreSettings::default());
//! tokio::spawn(store.run());
//!
//! toasts.trigger_toast("Profile saved");
//! toasts.trigger_toast_with("Disk almost full", ToastKind::Warning);
//!
//! let mut list = toasts.watch();
//! list.changed().await?;
//! for toast in list.borrow().iter() {
//!     println!("{toast}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{ToastError, ToastResult};
use crate::messages::ToastAction;
use crate::toast::{ToastId, ToastKind, ToastList};
use std::fmt;
use tokio::sync::{mpsc, watch};
use tracing::warn;

/// Cloneable accessor for a running [`crate::store::ToastStore`].
#[derive(Clone)]
pub struct ToastHandle {
    action_tx: mpsc::UnboundedSender<ToastAction>,
    list_rx: watch::Receiver<ToastList>,
}

impl fmt::Debug for ToastHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastHandle")
            .field("visible_toasts", &self.list_rx.borrow().len())
            .field("store_closed", &self.action_tx.is_closed())
            .finish()
    }
}

impl ToastHandle {
    /// Build a handle from explicit channel halves.
    ///
    /// [`crate::store::ToastStore::new`] calls this for you; it is public so
    /// callers can wire a handle to channels they own, for instance to
    /// observe raw dispatched actions in tests.
    pub fn new(
        action_tx: mpsc::UnboundedSender<ToastAction>,
        list_rx: watch::Receiver<ToastList>,
    ) -> Self {
        Self { action_tx, list_rx }
    }

    /// Current displayed toast list.
    ///
    /// Each call reads the latest published value; a list updated by the
    /// store after a dispatch is reflected by the next read without any
    /// resubscription.
    pub fn toasts(&self) -> ToastList {
        self.list_rx.borrow().clone()
    }

    /// Subscribe to list changes.
    ///
    /// Returns a receiver whose `changed()` future resolves on every list
    /// the store publishes after the call:
    /// ```rust,ignore
    /// let mut list = toasts.watch();
    /// while list.changed().await.is_ok() {
    ///     render(&list.borrow_and_update());
    /// }
    /// ```
    pub fn watch(&self) -> watch::Receiver<ToastList> {
        self.list_rx.clone()
    }

    /// Trigger a toast with the default kind ([`ToastKind::Success`]).
    ///
    /// Fire-and-forget: the call enqueues the trigger and returns
    /// immediately. The store appends the toast and applies display and
    /// removal policy asynchronously.
    pub fn trigger_toast(&self, message: impl Into<String>) {
        self.dispatch(ToastAction::trigger(message));
    }

    /// Trigger a toast with an explicit kind.
    pub fn trigger_toast_with(&self, message: impl Into<String>, kind: ToastKind) {
        self.dispatch(ToastAction::trigger_with(message, kind));
    }

    /// Request removal of one toast ahead of its deadline.
    ///
    /// Unknown ids are ignored by the store.
    pub fn dismiss(&self, id: ToastId) {
        self.dispatch(ToastAction::dismiss(id));
    }

    /// Request removal of all toasts, displayed and queued.
    pub fn clear(&self) {
        self.dispatch(ToastAction::Clear);
    }

    /// Stop the store task and wait for its acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`ToastError::StoreClosed`] if the store has already stopped.
    pub async fn shutdown(&self) -> ToastResult<()> {
        let (action, ack) = ToastAction::shutdown();
        self.action_tx
            .send(action)
            .map_err(|_| ToastError::StoreClosed)?;
        ack.await.map_err(|_| ToastError::StoreClosed)
    }

    /// Send an action, logging and dropping it if the store is gone.
    fn dispatch(&self, action: ToastAction) {
        if let Err(err) = self.action_tx.send(action) {
            warn!(action = ?err.0, "toast store closed; dropping action");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
