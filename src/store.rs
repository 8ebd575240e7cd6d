use chrono::Utc;

use crate::models::{TodoItem, TodoRequest};

/// In-memory todo collection plus the next-ID counter. IDs are handed out
/// sequentially starting at 1 and never reused within one store's lifetime.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
    next_id: i64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Snapshot copy of all items, in insertion order.
    pub fn get_all(&self) -> Vec<TodoItem> {
        self.todos.clone()
    }

    pub fn get_by_id(&self, id: i64) -> Option<TodoItem> {
        self.todos.iter().find(|t| t.id == id).cloned()
    }

    /// `completed_at` always starts out null; only `update` derives it.
    pub fn create(&mut self, req: TodoRequest) -> TodoItem {
        let todo = TodoItem {
            id: self.next_id,
            title: req.title,
            description: req.description,
            is_completed: req.is_completed,
            created_at: Utc::now(),
            completed_at: None,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    /// Wholesale overwrite of title, description and the completion flag.
    /// Returns `None` without mutating anything when the ID is unknown.
    pub fn update(&mut self, id: i64, req: TodoRequest) -> Option<TodoItem> {
        let existing = self.todos.iter_mut().find(|t| t.id == id)?;

        // Three-way completion bookkeeping: an incomplete→complete transition
        // stamps the time, any incoming false clears it, and complete→complete
        // keeps the original timestamp.
        if req.is_completed && !existing.is_completed {
            existing.completed_at = Some(Utc::now());
        } else if !req.is_completed {
            existing.completed_at = None;
        }

        existing.title = req.title;
        existing.description = req.description;
        existing.is_completed = req.is_completed;

        Some(existing.clone())
    }

    pub fn delete(&mut self, id: i64) -> bool {
        let len_before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() < len_before
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
