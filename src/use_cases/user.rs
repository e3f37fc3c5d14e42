use crate::{models::User, repositories::UserRepository, utils::AppError};
use std::sync::Arc;

pub struct AddUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl AddUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    pub async fn execute(&self, user: &User) -> Result<(), AppError> {
        self.user_repository.add_user(user).await
    }
}

pub struct GetUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Falha com `NotFound` quando nenhum usuário tem este email
    pub async fn execute(&self, email: &str) -> Result<User, AppError> {
        self.user_repository.get_user(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryUserRepository;

    #[tokio::test]
    async fn test_get_unknown_user_is_not_found() {
        let get = GetUserUseCase::new(Arc::new(InMemoryUserRepository::new()));
        let err = get.execute("nobody@x.com").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_added_user_is_returned_unchanged() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let add = AddUserUseCase::new(repo.clone());
        let get = GetUserUseCase::new(repo);

        add.execute(&User::new("a@x.com")).await.unwrap();
        let first = get.execute("a@x.com").await.unwrap();
        let again = get.execute("a@x.com").await.unwrap();

        assert_eq!(first.email, "a@x.com");
        assert!(!first.id.is_empty());
        assert_eq!(first, again);
    }

    #[tokio::test]
    async fn test_duplicate_emails_resolve_to_first_user() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let add = AddUserUseCase::new(repo.clone());
        let get = GetUserUseCase::new(repo);

        add.execute(&User::new("dup@x.com")).await.unwrap();
        let first = get.execute("dup@x.com").await.unwrap();
        add.execute(&User::new("dup@x.com")).await.unwrap();

        assert_eq!(get.execute("dup@x.com").await.unwrap().id, first.id);
    }
}
