use crate::{
    api::responses::{handle_error, ErrorResponse},
    models::User,
    use_cases::UseCases,
    utils::AppError,
};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddUserRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddUserResponse {
    pub user: User,
    pub message: String,
}

/// POST /api/users - Cria usuário e devolve o registro persistido
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = AddUserRequest,
    responses(
        (status = 201, description = "User created", body = AddUserResponse),
        (status = 400, description = "Invalid email or write failure", body = ErrorResponse)
    )
)]
pub async fn add_user(
    use_cases: web::Data<UseCases>,
    request: web::Json<AddUserRequest>,
) -> HttpResponse {
    let email = request.into_inner().email.trim().to_string();
    if email.is_empty() {
        return handle_error(&AppError::bad_request("El email es obligatorio"));
    }

    log::info!("📝 POST /users - Adding {}", email);

    let user = User::new(email);
    if let Err(e) = use_cases.add_user.execute(&user).await {
        return handle_error(&e);
    }

    // Relê para devolver id e createdAt atribuídos pelo banco
    match use_cases.get_user.execute(&user.email).await {
        Ok(created) => {
            log::info!("✅ User added: {}", created.id);
            HttpResponse::Created().json(AddUserResponse {
                user: created,
                message: "User added successfully".to_string(),
            })
        }
        Err(e) => handle_error(&e),
    }
}

/// GET /api/users/{email}
#[utoipa::path(
    get,
    path = "/api/users/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with this email", body = ErrorResponse)
    )
)]
pub async fn get_user(use_cases: web::Data<UseCases>, email: web::Path<String>) -> HttpResponse {
    // Mesma normalização do cadastro
    match use_cases.get_user.execute(email.trim()).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => handle_error(&e),
    }
}
