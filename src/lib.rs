//! # toastbus
//!
//! Store-backed toast notifications with a reactive read handle and
//! fire-and-forget dispatch.
//!
//! A [`store::ToastStore`] task owns the toast list: it processes dispatched
//! actions sequentially, applies display and removal policy (visible cap,
//! FIFO queue, per-kind auto-dismiss), and publishes every change through a
//! `watch` channel. A [`handle::ToastHandle`] is the caller-facing accessor:
//! a reactive read of the current list plus trigger/dismiss/clear dispatch.
//! Store and handle are wired explicitly; there is no process-global state.
//!
//! ## Crate Structure
//!
//! - **`config`**: figment-based settings (TOML file plus `TOASTBUS_`
//!   environment overrides) for the display policy and logging.
//! - **`error`**: the `ToastError` enum for the fallible edges
//!   (configuration, logging setup, store teardown).
//! - **`handle`**: the `ToastHandle` accessor.
//! - **`logging`**: tracing subscriber setup with pretty, compact, and JSON
//!   output formats.
//! - **`messages`**: the `ToastAction` protocol between handles and the
//!   store.
//! - **`store`**: the `ToastStore` task and its display policy.
//! - **`toast`**: the `Toast` record, `ToastKind` categories, and id
//!   allocation.
//!
//! ## Example
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
//! println!("{} toast(s) showing", list.borrow().len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handle;
pub mod logging;
pub mod messages;
pub mod store;
pub mod toast;
