use crate::{
    api::responses::{handle_error, user_not_found, ErrorResponse, MessageResponse},
    models::{Task, TaskPage, User},
    use_cases::UseCases,
    utils::AppError,
};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TasksQuery {
    /// Page size, defaults to 10
    pub limit: Option<u32>,
    /// Id of the last task of the previous page
    pub start_after: Option<String>,
}

impl TasksQuery {
    fn page_size(&self) -> Result<u32, AppError> {
        match self.limit.unwrap_or(DEFAULT_PAGE_SIZE) {
            0 => Err(AppError::bad_request("El límite debe ser mayor que 0")),
            limit => Ok(limit),
        }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct NewTask {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddTaskRequest {
    pub task: NewTask,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct TaskChanges {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateTaskRequest {
    pub task: TaskChanges,
}

fn require_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::bad_request("El nombre de la tarea es obligatorio"));
    }
    Ok(())
}

/// Resolves the owner of a task route, or the response to send instead.
/// The email is trimmed the same way `POST /api/users` stores it.
async fn resolve_user(use_cases: &UseCases, email: &str) -> Result<User, HttpResponse> {
    let email = email.trim();
    match use_cases.get_user.execute(email).await {
        Ok(user) => Ok(user),
        Err(AppError::NotFound(_)) => {
            log::warn!("⚠️  User {} not found", email);
            Err(user_not_found())
        }
        Err(e) => Err(handle_error(&e)),
    }
}

/// GET /api/users/{email}/tasks - Página de tarefas, mais recentes primeiro
#[utoipa::path(
    get,
    path = "/api/users/{email}/tasks",
    tag = "Tasks",
    params(("email" = String, Path, description = "Owner email"), TasksQuery),
    responses(
        (status = 200, description = "One page of tasks", body = TaskPage),
        (status = 404, description = "Unknown owner or cursor", body = MessageResponse)
    )
)]
pub async fn get_user_tasks(
    use_cases: web::Data<UseCases>,
    email: web::Path<String>,
    query: web::Query<TasksQuery>,
) -> HttpResponse {
    let limit = match query.page_size() {
        Ok(limit) => limit,
        Err(e) => return handle_error(&e),
    };

    log::info!("📋 GET /users/{}/tasks - limit {}", email, limit);

    let user = match resolve_user(&use_cases, &email).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match use_cases
        .get_tasks
        .execute(&user.id, limit, query.start_after.as_deref())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => handle_error(&e),
    }
}

/// POST /api/users/{email}/tasks
#[utoipa::path(
    post,
    path = "/api/users/{email}/tasks",
    tag = "Tasks",
    params(("email" = String, Path, description = "Owner email")),
    request_body = AddTaskRequest,
    responses(
        (status = 201, description = "Task created", body = MessageResponse),
        (status = 400, description = "Invalid task or write failure", body = ErrorResponse),
        (status = 404, description = "Unknown owner", body = MessageResponse)
    )
)]
pub async fn add_user_task(
    use_cases: web::Data<UseCases>,
    email: web::Path<String>,
    request: web::Json<AddTaskRequest>,
) -> HttpResponse {
    let NewTask {
        name,
        description,
        completed,
    } = request.into_inner().task;
    if let Err(e) = require_name(&name) {
        return handle_error(&e);
    }

    log::info!("📝 POST /users/{}/tasks - Adding '{}'", email, name);

    let user = match resolve_user(&use_cases, &email).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let task = Task::new(name)
        .with_description(description)
        .with_completed(completed);

    match use_cases.add_task.execute(&task, &user.id).await {
        Ok(()) => HttpResponse::Created().json(MessageResponse::new("Tarea agregada exitosamente")),
        Err(e) => handle_error(&e),
    }
}

/// PUT /api/users/{email}/tasks - Atualiza nome, descrição e status
#[utoipa::path(
    put,
    path = "/api/users/{email}/tasks",
    tag = "Tasks",
    params(("email" = String, Path, description = "Owner email")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = MessageResponse),
        (status = 400, description = "Invalid task or unknown task id", body = ErrorResponse),
        (status = 404, description = "Unknown owner", body = MessageResponse)
    )
)]
pub async fn update_user_task(
    use_cases: web::Data<UseCases>,
    email: web::Path<String>,
    request: web::Json<UpdateTaskRequest>,
) -> HttpResponse {
    let changes = request.into_inner().task;
    if let Err(e) = require_name(&changes.name) {
        return handle_error(&e);
    }

    log::info!("🔧 PUT /users/{}/tasks - Updating {}", email, changes.id);

    let user = match resolve_user(&use_cases, &email).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    // id e createdAt não são alterados pelo repositório
    let task = Task {
        id: changes.id,
        ..Task::new(changes.name)
            .with_description(changes.description)
            .with_completed(changes.completed)
    };

    match use_cases.update_task.execute(&task, &user.id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Tarea actualizada exitosamente")),
        Err(e) => handle_error(&e),
    }
}

/// DELETE /api/users/{email}/tasks/{id}
#[utoipa::path(
    delete,
    path = "/api/users/{email}/tasks/{id}",
    tag = "Tasks",
    params(
        ("email" = String, Path, description = "Owner email"),
        ("id" = String, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 400, description = "Task does not exist", body = ErrorResponse),
        (status = 404, description = "Unknown owner", body = MessageResponse)
    )
)]
pub async fn delete_user_task(
    use_cases: web::Data<UseCases>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (email, id) = path.into_inner();

    log::info!("🗑️  DELETE /users/{}/tasks/{}", email, id);

    let user = match resolve_user(&use_cases, &email).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match use_cases.delete_task.execute(&user.id, &id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Tarea eliminada exitosamente")),
        Err(e) => handle_error(&e),
    }
}
