//! Toast data model.
//!
//! A [`Toast`] is a transient notification record: a message, a [`ToastKind`]
//! category, a monotonically assigned [`ToastId`], and a creation timestamp.
//! Records are created by the store in response to trigger actions and removed
//! by store policy (timed eviction or explicit dismissal); nothing outside the
//! store mutates them.
//!
//! # Wire format
//!
//! The kind serializes under the field name `type` with lowercase values, so a
//! serialized toast is interchangeable with the JSON shape used by existing
//! frontends:
//!
//! ```json
//! { "id": 7, "message": "Saved", "type": "success", "created_at": "..." }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Ordered sequence of toasts as published by the store.
pub type ToastList = Vec<Toast>;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

// =============================================================================
// ToastId
// =============================================================================

/// Unique identifier for a toast, assigned at creation time.
///
/// Ids are process-wide monotonic, so they double as a stable ordering and a
/// rendering key for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocate the next id from the process-wide counter.
    pub fn next() -> Self {
        Self(NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of the id.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ToastKind
// =============================================================================

/// Category of a toast, controlling its styling and display policy.
///
/// `Success` is the default applied when a trigger does not name a kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Confirmation of a completed operation.
    #[default]
    Success,
    /// Neutral informational notice.
    Info,
    /// Something needs attention but nothing failed.
    Warning,
    /// An operation failed. Error toasts stay until dismissed.
    Error,
}

impl ToastKind {
    /// All kinds, in severity order.
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Success,
        ToastKind::Info,
        ToastKind::Warning,
        ToastKind::Error,
    ];

    /// Lowercase name as used on the wire and in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a toast kind from text fails.
#[derive(Debug, Error)]
#[error("Unknown toast kind '{0}'. Must be one of: success, info, warning, error")]
pub struct ParseKindError(String);

impl FromStr for ToastKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(ToastKind::Success),
            "info" => Ok(ToastKind::Info),
            "warning" => Ok(ToastKind::Warning),
            "error" => Ok(ToastKind::Error),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

// =============================================================================
// Toast
// =============================================================================

/// A single notification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Unique, monotonically assigned identifier.
    pub id: ToastId,
    /// Message text, stored verbatim as triggered.
    pub message: String,
    /// Category of the toast. Serialized as `type` for wire compatibility.
    #[serde(rename = "type")]
    pub kind: ToastKind,
    /// Moment the toast was created by the store.
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// Create a toast with a fresh id and the current timestamp.
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: ToastId::next(),
            message: message.into(),
            kind,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

// =============================================================================
// Tests
// =============================================================================
