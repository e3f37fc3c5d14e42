use super::{health, responses, tasks, users};
use actix_web::web;

/// Route table shared by the server and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(responses::json_config())
        .app_data(responses::query_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/users", web::post().to(users::add_user))
                .route("/users/{email}", web::get().to(users::get_user))
                .route("/users/{email}/tasks", web::get().to(tasks::get_user_tasks))
                .route("/users/{email}/tasks", web::post().to(tasks::add_user_task))
                .route("/users/{email}/tasks", web::put().to(tasks::update_user_task))
                .route("/users/{email}/tasks/{id}", web::delete().to(tasks::delete_user_task)),
        );
}
