//! In-memory repositories for the test suite.
//!
//! They mirror the MongoDB implementations closely enough for controller and
//! use-case tests: store-assigned ids and timestamps, newest-first ordering
//! with id tie-breaks, and the same error kinds and messages.

use super::{
    TaskRepository, UserRepository, ADD_TASK_FAILED, ADD_USER_FAILED, LIST_TASKS_FAILED,
    TASK_DOES_NOT_EXIST, UPDATE_TASK_FAILED, USER_NOT_FOUND,
};
use crate::{
    models::{Task, TaskPage, User},
    utils::AppError,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct StoredTask {
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct TaskState {
    next_seq: u64,
    by_user: HashMap<String, Vec<StoredTask>>,
}

#[derive(Default)]
pub struct InMemoryTaskRepository {
    state: Mutex<TaskState>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first; later inserts win ties on the timestamp.
fn sort_newest_first(tasks: &mut [StoredTask]) {
    tasks.sort_by(|a, b| {
        b.task
            .created_at
            .cmp(&a.task.created_at)
            .then(b.seq.cmp(&a.seq))
    });
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn add_task(&self, task: &Task, user_id: &str) -> Result<(), AppError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| AppError::bad_request(ADD_TASK_FAILED))?;
        state.next_seq += 1;
        let seq = state.next_seq;

        let stored = StoredTask {
            seq,
            task: Task {
                id: format!("task-{:06}", seq),
                created_at: Some(Utc::now()),
                ..task.clone()
            },
        };
        state
            .by_user
            .entry(user_id.to_string())
            .or_default()
            .push(stored);
        Ok(())
    }

    async fn get_tasks(
        &self,
        user_id: &str,
        limit: u32,
        start_after: Option<&str>,
    ) -> Result<TaskPage, AppError> {
        let state = self
            .state
            .lock()
            .map_err(|_| AppError::not_found(LIST_TASKS_FAILED))?;

        let mut ordered = state.by_user.get(user_id).cloned().unwrap_or_default();
        sort_newest_first(&mut ordered);

        let start = match start_after {
            Some(cursor) => {
                let position = ordered
                    .iter()
                    .position(|stored| stored.task.id == cursor)
                    .ok_or_else(|| AppError::not_found(LIST_TASKS_FAILED))?;
                position + 1
            }
            None => 0,
        };

        let tasks = ordered
            .iter()
            .skip(start)
            .take(limit as usize)
            .map(|stored| stored.task.clone())
            .collect();

        Ok(TaskPage {
            tasks,
            total_count: ordered.len() as u64,
        })
    }

    async fn update_task(&self, task: &Task, user_id: &str) -> Result<(), AppError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| AppError::bad_request(UPDATE_TASK_FAILED))?;

        let stored = state
            .by_user
            .get_mut(user_id)
            .and_then(|tasks| tasks.iter_mut().find(|stored| stored.task.id == task.id))
            .ok_or_else(|| AppError::bad_request(UPDATE_TASK_FAILED))?;

        stored.task.name = task.name.clone();
        stored.task.completed = task.completed;
        stored.task.description = task.description.clone();
        Ok(())
    }

    async fn delete_task(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| AppError::bad_request(TASK_DOES_NOT_EXIST))?;

        let tasks = state
            .by_user
            .get_mut(user_id)
            .ok_or_else(|| AppError::bad_request(TASK_DOES_NOT_EXIST))?;
        let position = tasks
            .iter()
            .position(|stored| stored.task.id == id)
            .ok_or_else(|| AppError::bad_request(TASK_DOES_NOT_EXIST))?;

        tasks.remove(position);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add_user(&self, user: &User) -> Result<(), AppError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| AppError::bad_request(ADD_USER_FAILED))?;
        let id = format!("user-{:06}", users.len() + 1);
        users.push(User {
            id,
            email: user.email.clone(),
            created_at: Some(Utc::now()),
        });
        Ok(())
    }

    async fn get_user(&self, email: &str) -> Result<User, AppError> {
        let users = self
            .users
            .lock()
            .map_err(|_| AppError::not_found(USER_NOT_FOUND))?;
        users
            .iter()
            .find(|user| user.email == email)
            .cloned()
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded(names: &[&str]) -> InMemoryTaskRepository {
        let repo = InMemoryTaskRepository::new();
        for name in names {
            repo.add_task(&Task::new(*name), "u1").await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_added_task_is_listed_incomplete() {
        let repo = seeded(&["buy milk"]).await;

        let page = repo.get_tasks("u1", 10, None).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.tasks[0].name, "buy milk");
        assert!(!page.tasks[0].completed);
        assert!(!page.tasks[0].id.is_empty());
        assert!(page.tasks[0].created_at.is_some());
    }

    #[tokio::test]
    async fn test_limit_and_newest_first() {
        let repo = seeded(&["a", "b", "c", "d"]).await;

        let page = repo.get_tasks("u1", 3, None).await.unwrap();
        let names: Vec<_> = page.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["d", "c", "b"]);
        assert_eq!(page.total_count, 4);

        let created: Vec<_> = page.tasks.iter().map(|t| t.created_at).collect();
        assert!(created.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_cursor_resumes_strictly_after() {
        let repo = seeded(&["a", "b", "c", "d"]).await;

        let first = repo.get_tasks("u1", 2, None).await.unwrap();
        let cursor = first.tasks.last().unwrap().id.clone();
        let second = repo.get_tasks("u1", 2, Some(&cursor)).await.unwrap();

        let names: Vec<_> = second.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(second.total_count, 4);
    }

    #[tokio::test]
    async fn test_unknown_cursor_is_not_found() {
        let repo = seeded(&["a"]).await;
        let result = repo.get_tasks("u1", 2, Some("nope")).await;
        assert_eq!(result, Err(AppError::not_found(LIST_TASKS_FAILED)));
    }

    #[tokio::test]
    async fn test_tasks_are_scoped_per_user() {
        let repo = seeded(&["mine"]).await;
        let page = repo.get_tasks("u2", 10, None).await.unwrap();
        assert!(page.tasks.is_empty());
        assert_eq!(page.total_count, 0);
    }
}
