use super::{timestamp::created_at_from_bson, UserRepository, ADD_USER_FAILED, USER_NOT_FOUND};
use crate::{
    database::{MongoDB, USERS_COLLECTION},
    models::User,
    utils::AppError,
};
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection,
};

#[derive(Clone)]
pub struct MongoUserRepository {
    db: MongoDB,
}

impl MongoUserRepository {
    pub fn new(db: MongoDB) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<Document> {
        self.db.collection(USERS_COLLECTION)
    }
}

pub(crate) fn user_from_document(document: &Document) -> User {
    let id = document
        .get_object_id("_id")
        .map(|oid| oid.to_hex())
        .unwrap_or_default();
    let created_at = created_at_from_bson(document.get("createdAt"), &format!("user: {}", id));

    User {
        email: document.get_str("email").unwrap_or_default().to_string(),
        created_at,
        id,
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn add_user(&self, user: &User) -> Result<(), AppError> {
        // Email não é único: nenhuma verificação antes de inserir
        self.users()
            .update_one(
                doc! { "_id": ObjectId::new() },
                doc! {
                    "$set": { "email": user.email.as_str() },
                    "$currentDate": { "createdAt": true }
                },
            )
            .upsert(true)
            .await
            .map_err(|e| {
                log::error!("❌ Failed to add user {}: {}", user.email, e);
                AppError::bad_request(ADD_USER_FAILED)
            })?;

        Ok(())
    }

    async fn get_user(&self, email: &str) -> Result<User, AppError> {
        let found = self
            .users()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| {
                log::error!("❌ Failed to look up user {}: {}", email, e);
                AppError::not_found(USER_NOT_FOUND)
            })?;

        match found {
            Some(document) => Ok(user_from_document(&document)),
            None => {
                log::debug!("User {} not found", email);
                Err(AppError::not_found(USER_NOT_FOUND))
            }
        }
    }
}
