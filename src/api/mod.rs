pub mod health;
pub mod responses;
pub mod routes;
pub mod swagger;
pub mod tasks;
pub mod users;

/// Use cases over fresh in-memory repositories.
#[cfg(test)]
pub(crate) fn test_use_cases() -> actix_web::web::Data<crate::use_cases::UseCases> {
    use crate::repositories::memory::{InMemoryTaskRepository, InMemoryUserRepository};
    use std::sync::Arc;

    actix_web::web::Data::new(crate::use_cases::UseCases::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
    ))
}
