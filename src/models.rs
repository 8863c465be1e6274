//! Frontend Models
//!
//! Data structures matching the remote task service.

use serde::{Deserialize, Serialize};

/// Task record (matches the service's JSON shape)
///
/// The id is assigned by the service on creation; every local mutation is
/// keyed by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Status filter applied to the rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub fn all() -> [Self; 3] {
        [Self::All, Self::Completed, Self::Pending]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }

    /// Whether `task` is visible under this filter
    pub fn accepts(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }
}

/// In-progress retitling of a single task
///
/// At most one session exists at a time; `draft` holds the unsaved text.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub id: u64,
    pub draft: String,
}

/// Trim a candidate title, rejecting input that is empty after the trim
pub fn normalize_title(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("buy milk"), Some("buy milk"));
        assert_eq!(normalize_title("  buy milk  "), Some("buy milk"));
        assert_eq!(normalize_title(""), None);
        assert_eq!(normalize_title("   "), None);
        assert_eq!(normalize_title("\t\n"), None);
    }

    #[test]
    fn test_task_decodes_service_payload() {
        let task: Task =
            serde_json::from_str(r#"{"id":7,"title":"write spec","completed":false}"#).unwrap();
        assert_eq!(
            task,
            Task {
                id: 7,
                title: "write spec".to_string(),
                completed: false,
            }
        );
    }

    #[test]
    fn test_filter_accepts() {
        let done = Task {
            id: 1,
            title: "a".to_string(),
            completed: true,
        };
        let open = Task {
            id: 2,
            title: "b".to_string(),
            completed: false,
        };

        assert!(Filter::All.accepts(&done) && Filter::All.accepts(&open));
        assert!(Filter::Completed.accepts(&done) && !Filter::Completed.accepts(&open));
        assert!(!Filter::Pending.accepts(&done) && Filter::Pending.accepts(&open));
    }
}
