//! Todo entity owned by a single user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a todo name, in characters
pub const MAX_TODO_NAME_LENGTH: usize = 255;

/// Todo priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Database and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("Unknown priority: {}", other)),
        }
    }
}

/// Todo entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub name: String,
    pub priority: Priority,
    pub completed: bool,
    /// Owning user; every read, update and delete is checked against it
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new, not yet completed todo
    pub fn new(user_id: Uuid, name: String, priority: Priority) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            priority,
            completed: false,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` owns this todo
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Applies a partial update and bumps `updated_at`
    pub fn apply(&mut self, changes: TodoChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(completed) = changes.completed {
            self.completed = completed;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update of a todo; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub name: Option<String>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

impl TodoChanges {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.priority.is_none() && self.completed.is_none()
    }
}

/// Filter for listing a user's todos
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub priority: Option<Priority>,
}

/// Trim a todo name and check its length
///
/// # Returns
///
/// `None` when the trimmed name is empty or longer than
/// [`MAX_TODO_NAME_LENGTH`] characters
pub fn sanitize_todo_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    (1..=MAX_TODO_NAME_LENGTH)
        .contains(&len)
        .then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_defaults() {
        let owner = Uuid::new_v4();
        let todo = Todo::new(owner, "Buy milk".to_string(), Priority::High);
        assert!(!todo.completed);
        assert!(todo.is_owned_by(owner));
        assert!(!todo.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn test_apply_partial_changes() {
        let mut todo = Todo::new(Uuid::new_v4(), "Buy milk".to_string(), Priority::Low);
        todo.apply(TodoChanges {
            completed: Some(true),
            ..Default::default()
        });
        assert!(todo.completed);
        assert_eq!(todo.name, "Buy milk");
        assert_eq!(todo.priority, Priority::Low);
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
        assert!("URGENT".parse::<Priority>().is_err());
        assert!("High".parse::<Priority>().is_err());
    }

    #[test]
    fn test_sanitize_todo_name() {
        assert_eq!(sanitize_todo_name("  Buy milk "), Some("Buy milk".to_string()));
        assert_eq!(sanitize_todo_name("   "), None);
        assert_eq!(sanitize_todo_name(&"x".repeat(255)).map(|n| n.len()), Some(255));
        assert_eq!(sanitize_todo_name(&"x".repeat(256)), None);
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(TodoChanges::default().is_empty());
        assert!(!TodoChanges {
            priority: Some(Priority::Medium),
            ..Default::default()
        }
        .is_empty());
    }
}
