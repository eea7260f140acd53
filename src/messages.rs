//! Action types dispatched to the toast store.
//!
//! This module defines the message protocol between accessors
//! ([`crate::handle::ToastHandle`]) and the store task
//! ([`crate::store::ToastStore`]). Actions travel over an unbounded mpsc
//! channel and are applied sequentially by the store; only [`Shutdown`]
//! carries a response channel, because every other action is fire-and-forget
//! by contract.
//!
//! # Message Flow
//!
//! ```text
//! Caller                             Store Task
//! ------                             ----------
//! 1. Build action (helper ctor)
//! 2. Send via mpsc channel    ------>
//!                                    3. Receive action
//!                                    4. Apply (mutate toast list)
//!                                    5. Publish new list on watch
//! 6. Observe via watch        <------
//! ```
//!
//! [`Shutdown`]: ToastAction::Shutdown

use crate::toast::{ToastId, ToastKind};
use tokio::sync::oneshot;

/// Actions that can be sent to the toast store.
///
/// Trigger payloads carry exactly the `{message, kind}` pair; the store owns
/// everything after that (id assignment, display duration, removal). Use the
/// helper constructors such as [`trigger`](Self::trigger) to build actions,
/// and [`shutdown`](Self::shutdown) to get the paired acknowledgement
/// receiver.
#[derive(Debug)]
pub enum ToastAction {
    /// Append a new toast.
    ///
    /// The store assigns the id and timestamp, decides whether the toast is
    /// displayed immediately or queued, and schedules its removal.
    Trigger {
        /// Message text, forwarded verbatim.
        message: String,
        /// Toast category. Defaults to [`ToastKind::Success`] when triggered
        /// without an explicit kind.
        kind: ToastKind,
    },

    /// Remove one toast ahead of its deadline.
    ///
    /// Unknown ids are ignored; dismissal is idempotent.
    Dismiss {
        /// Id of the toast to remove.
        id: ToastId,
    },

    /// Remove all toasts, both displayed and queued.
    Clear,

    /// Stop the store task.
    ///
    /// The store acknowledges on the embedded channel after it has stopped
    /// processing actions. Actions sent after the acknowledgement are dropped.
    Shutdown {
        /// Acknowledgement channel, signalled just before the task exits.
        response: oneshot::Sender<()>,
    },
}

impl ToastAction {
    /// Helper to create a Trigger action with the default kind.
    pub fn trigger(message: impl Into<String>) -> Self {
        Self::Trigger {
            message: message.into(),
            kind: ToastKind::default(),
        }
    }

    /// Helper to create a Trigger action with an explicit kind.
    pub fn trigger_with(message: impl Into<String>, kind: ToastKind) -> Self {
        Self::Trigger {
            message: message.into(),
            kind,
        }
    }

    /// Helper to create a Dismiss action.
    pub fn dismiss(id: ToastId) -> Self {
        Self::Dismiss { id }
    }

    /// Helper to create a Shutdown action together with its acknowledgement
    /// receiver.
    pub fn shutdown() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self::Shutdown { response: tx }, rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_applies_default_kind() {
        match ToastAction::trigger("Saved") {
            ToastAction::Trigger { message, kind } => {
                assert_eq!(message, "Saved");
                assert_eq!(kind, ToastKind::Success);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn trigger_with_keeps_explicit_kind() {
        match ToastAction::trigger_with("Careful", ToastKind::Warning) {
            ToastAction::Trigger { message, kind } => {
                assert_eq!(message, "Careful");
                assert_eq!(kind, ToastKind::Warning);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[tokio::test]
    async fn shutdown_helper_pairs_action_with_receiver() {
        let (action, rx) = ToastAction::shutdown();
        match action {
            ToastAction::Shutdown { response } => {
                response.send(()).unwrap();
            }
            other => panic!("unexpected variant: {:?}", other),
        }
        rx.await.unwrap();
    }
}
