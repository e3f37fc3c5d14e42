use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Service API",
        version = "1.0.0",
        description = "Users and their tasks.\n\n**Features:**\n- User registration and lookup by email\n- Per-user task CRUD\n- Cursor pagination (`limit`, `startAfter`), newest first"
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Users
        crate::api::users::add_user,
        crate::api::users::get_user,

        // Tasks
        crate::api::tasks::get_user_tasks,
        crate::api::tasks::add_user_task,
        crate::api::tasks::update_user_task,
        crate::api::tasks::delete_user_task,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::responses::ErrorResponse,
            crate::api::responses::MessageResponse,

            crate::models::User,
            crate::api::users::AddUserRequest,
            crate::api::users::AddUserResponse,

            crate::models::Task,
            crate::models::TaskPage,
            crate::api::tasks::NewTask,
            crate::api::tasks::AddTaskRequest,
            crate::api::tasks::TaskChanges,
            crate::api::tasks::UpdateTaskRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service health."),
        (name = "Users", description = "Create users and look them up by email."),
        (name = "Tasks", description = "Tasks scoped to the user identified by email."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for expected in [
            "/health",
            "/api/users",
            "/api/users/{email}",
            "/api/users/{email}/tasks",
            "/api/users/{email}/tasks/{id}",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {}", expected);
        }
    }
}
