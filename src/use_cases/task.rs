use crate::{
    models::{Task, TaskPage},
    repositories::TaskRepository,
    utils::AppError,
};
use std::sync::Arc;

pub struct AddTaskUseCase {
    task_repository: Arc<dyn TaskRepository>,
}

impl AddTaskUseCase {
    pub fn new(task_repository: Arc<dyn TaskRepository>) -> Self {
        Self { task_repository }
    }

    pub async fn execute(&self, task: &Task, user_id: &str) -> Result<(), AppError> {
        self.task_repository.add_task(task, user_id).await
    }
}

pub struct GetTasksUseCase {
    task_repository: Arc<dyn TaskRepository>,
}

impl GetTasksUseCase {
    pub fn new(task_repository: Arc<dyn TaskRepository>) -> Self {
        Self { task_repository }
    }

    /// `start_after` é o id da última tarefa da página anterior
    pub async fn execute(
        &self,
        user_id: &str,
        limit: u32,
        start_after: Option<&str>,
    ) -> Result<TaskPage, AppError> {
        self.task_repository
            .get_tasks(user_id, limit, start_after)
            .await
    }
}

pub struct UpdateTaskUseCase {
    task_repository: Arc<dyn TaskRepository>,
}

impl UpdateTaskUseCase {
    pub fn new(task_repository: Arc<dyn TaskRepository>) -> Self {
        Self { task_repository }
    }

    pub async fn execute(&self, task: &Task, user_id: &str) -> Result<(), AppError> {
        self.task_repository.update_task(task, user_id).await
    }
}

pub struct DeleteTaskUseCase {
    task_repository: Arc<dyn TaskRepository>,
}

impl DeleteTaskUseCase {
    pub fn new(task_repository: Arc<dyn TaskRepository>) -> Self {
        Self { task_repository }
    }

    pub async fn execute(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        self.task_repository.delete_task(user_id, id).await
    }
}
