//! Contratos de persistência e suas implementações.
//!
//! Os controllers não acessam os repositórios diretamente: passam pelos
//! casos de uso, que guardam cada repositório como trait object.

pub mod task_repository;
pub mod timestamp;
pub mod user_repository;

#[cfg(test)]
pub mod memory;

pub use task_repository::MongoTaskRepository;
pub use user_repository::MongoUserRepository;

use crate::models::{Task, TaskPage, User};
use crate::utils::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Grava uma nova tarefa do usuário `user_id`. O banco gera o id e o
    /// `createdAt`; `task.id` e `task.created_at` são ignorados.
    async fn add_task(&self, task: &Task, user_id: &str) -> Result<(), AppError>;

    /// Até `limit` tarefas, das mais novas para as mais antigas, começando
    /// depois da tarefa `start_after`. `total_count` conta a coleção inteira
    /// em uma consulta separada.
    async fn get_tasks(
        &self,
        user_id: &str,
        limit: u32,
        start_after: Option<&str>,
    ) -> Result<TaskPage, AppError>;

    /// Sobrescreve name, completed e description da tarefa `task.id`.
    async fn update_task(&self, task: &Task, user_id: &str) -> Result<(), AppError>;

    /// Falha com `BadRequest` quando a tarefa não existe.
    async fn delete_task(&self, user_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn add_user(&self, user: &User) -> Result<(), AppError>;

    /// Primeiro usuário com exatamente este email, ou `NotFound`.
    async fn get_user(&self, email: &str) -> Result<User, AppError>;
}

// Mensagens devolvidas ao cliente (compatíveis com o frontend existente)
pub const ADD_TASK_FAILED: &str = "No se pudo agregar la tarea";
pub const LIST_TASKS_FAILED: &str = "No se encontró el usuario con email";
pub const UPDATE_TASK_FAILED: &str = "No se pudo actualizar la tarea";
pub const TASK_DOES_NOT_EXIST: &str = "La tarea no existe";
pub const DELETE_TASK_FAILED: &str = "No se pudo borrar la tarea";
pub const ADD_USER_FAILED: &str = "No se pudo agregar el usuario";
pub const USER_NOT_FOUND: &str = "No se encontró el usuario";
