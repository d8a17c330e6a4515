//! User-facing notifications (toasts)

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Destructive,
}

/// A single toast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

impl From<&EditorError> for Notification {
    fn from(err: &EditorError) -> Self {
        let description = match err {
            EditorError::Io { .. } => "Could not read the file.".to_string(),
            other => other.to_string(),
        };
        Notification::destructive(err.title(), description)
    }
}

/// Pending notifications, drained by the UI each frame
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Info => tracing::info!(
                title = %notification.title,
                "{}",
                notification.description
            ),
            Severity::Destructive => tracing::warn!(
                title = %notification.title,
                "{}",
                notification.description
            ),
        }
        self.pending.push_back(notification);
    }

    /// Take all pending notifications in arrival order
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn peek_last(&self) -> Option<&Notification> {
        self.pending.back()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
