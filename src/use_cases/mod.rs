pub mod task;
pub mod user;

pub use task::*;
pub use user::*;

use crate::repositories::{TaskRepository, UserRepository};
use std::sync::Arc;

/// Todos os casos de uso da camada HTTP, compartilhados via `web::Data`
pub struct UseCases {
    pub add_task: AddTaskUseCase,
    pub get_tasks: GetTasksUseCase,
    pub update_task: UpdateTaskUseCase,
    pub delete_task: DeleteTaskUseCase,
    pub add_user: AddUserUseCase,
    pub get_user: GetUserUseCase,
}

impl UseCases {
    pub fn new(
        task_repository: Arc<dyn TaskRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            add_task: AddTaskUseCase::new(task_repository.clone()),
            get_tasks: GetTasksUseCase::new(task_repository.clone()),
            update_task: UpdateTaskUseCase::new(task_repository.clone()),
            delete_task: DeleteTaskUseCase::new(task_repository),
            add_user: AddUserUseCase::new(user_repository.clone()),
            get_user: GetUserUseCase::new(user_repository),
        }
    }
}
