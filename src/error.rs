//! Error types for the toast store and its surrounding plumbing.
//!
//! The accessor surface ([`crate::handle::ToastHandle`]) is deliberately
//! error-transparent: triggering, dismissing, or clearing toasts never returns
//! an error to the caller. `ToastError` therefore only covers the edges that
//! can genuinely fail:
//!
//! - **`Config`**: wraps errors from `figment`, raised while reading the
//!   configuration file or environment overrides.
//! - **`Validation`**: semantic configuration problems that parse fine but are
//!   logically wrong (an unknown log level, a zero display duration). These
//!   surface from [`crate::config::Settings::validate`].
//! - **`Tracing`**: failures while installing the tracing subscriber.
//! - **`StoreClosed`**: the store task is gone, reported only by operations
//!   that await an acknowledgement (shutdown).

use thiserror::Error;

/// Convenience alias for results using the crate error type.
pub type ToastResult<T> = std::result::Result<T, ToastError>;

/// Errors produced by configuration loading, logging setup, and store
/// lifecycle operations.
#[derive(Error, Debug)]
pub enum ToastError {
    /// Configuration file or environment override could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    /// Configuration parsed but failed semantic validation.
    #[error("Configuration validation error: {0}")]
    Validation(String),

    /// Tracing subscriber could not be installed.
    #[error("Tracing setup error: {0}")]
    Tracing(String),

    /// The store task has stopped and no longer accepts actions.
    #[error("Toast store is closed")]
    StoreClosed,
}
