use crate::utils::AppError;
use actix_web::{error::InternalError, web, HttpResponse};
use serde::{Deserialize, Serialize};

pub const USER_NOT_FOUND_MESSAGE: &str = "Usuario no encontrado";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Erros tipados mantêm status e mensagem; qualquer outro vira 500
pub fn handle_error(error: &(dyn std::error::Error + 'static)) -> HttpResponse {
    if let Some(app_error) = error.downcast_ref::<AppError>() {
        log::warn!("⚠️  {}", app_error);
        return HttpResponse::build(app_error.status_code()).json(ErrorResponse {
            error: app_error.message().to_string(),
        });
    }

    log::error!("❌ Unexpected error: {}", error);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: INTERNAL_SERVER_ERROR.to_string(),
    })
}

/// Dono não encontrado nas rotas de tarefas (chave `message`, não `error`)
pub fn user_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(MessageResponse::new(USER_NOT_FOUND_MESSAGE))
}

/// JSON inválido responde como qualquer outro `BadRequest`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = handle_error(&AppError::bad_request(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = handle_error(&AppError::bad_request(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}
