// ==================== MONGODB TASK REPOSITORY ====================
// Cada usuário tem a sua própria coleção de tarefas: users.{userId}.tasks

use super::{
    timestamp::created_at_from_bson, TaskRepository, ADD_TASK_FAILED, DELETE_TASK_FAILED,
    LIST_TASKS_FAILED, TASK_DOES_NOT_EXIST, UPDATE_TASK_FAILED,
};
use crate::{
    database::{MongoDB, USERS_COLLECTION},
    models::{Task, TaskPage},
    utils::AppError,
};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    Collection,
};

#[derive(Clone)]
pub struct MongoTaskRepository {
    db: MongoDB,
}

impl MongoTaskRepository {
    pub fn new(db: MongoDB) -> Self {
        Self { db }
    }

    fn tasks(&self, user_id: &str) -> Collection<Document> {
        self.db.collection(&tasks_collection_name(user_id))
    }

    /// Filter selecting the documents that come after the cursor task.
    async fn resume_filter(
        &self,
        collection: &Collection<Document>,
        cursor_id: &str,
    ) -> Result<Document, AppError> {
        let cursor_oid = ObjectId::parse_str(cursor_id).map_err(|_| {
            log::warn!("⚠️  Malformed pagination cursor: {}", cursor_id);
            AppError::not_found(LIST_TASKS_FAILED)
        })?;

        let cursor_doc = collection
            .find_one(doc! { "_id": cursor_oid })
            .await
            .map_err(list_failed)?
            .ok_or_else(|| {
                log::warn!("⚠️  Pagination cursor {} not found", cursor_id);
                AppError::not_found(LIST_TASKS_FAILED)
            })?;

        // createdAt inválido não impede a paginação: o valor bruto é usado
        Ok(resume_after_filter(cursor_doc.get("createdAt"), cursor_oid))
    }
}

pub(crate) fn tasks_collection_name(user_id: &str) -> String {
    format!("{}.{}.tasks", USERS_COLLECTION, user_id)
}

/// MongoDB sort brackets for `createdAt`, lowest first. Values from
/// different brackets never compare with `$lt`, so they are selected by type.
const SORT_BRACKETS: &[&[&str]] = &[
    &["minKey"],
    &["null"],
    &["int", "long", "double", "decimal"],
    &["symbol", "string"],
    &["object"],
    &["array"],
    &["binData"],
    &["objectId"],
    &["bool"],
    &["date"],
    &["timestamp"],
    &["regex"],
    &["maxKey"],
];

const NULL_BRACKET: usize = 1;
const MAX_KEY_BRACKET: usize = 12;

/// Missing fields sort as null.
fn sort_bracket(value: &Bson) -> usize {
    match value {
        Bson::MinKey => 0,
        Bson::Null | Bson::Undefined => NULL_BRACKET,
        Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_) | Bson::Decimal128(_) => 2,
        Bson::Symbol(_) | Bson::String(_) => 3,
        Bson::Document(_) => 4,
        Bson::Array(_) => 5,
        Bson::Binary(_) => 6,
        Bson::ObjectId(_) => 7,
        Bson::Boolean(_) => 8,
        Bson::DateTime(_) => 9,
        Bson::Timestamp(_) => 10,
        Bson::RegularExpression(_) => 11,
        Bson::MaxKey => MAX_KEY_BRACKET,
        // JavaScript, DbPointer: tratados como os maiores antes de maxKey
        _ => 11,
    }
}

/// Ordering is (createdAt desc, _id desc), so "after" the cursor means the
/// same createdAt with a smaller id, an older value of the same type, or any
/// value of a lower sort bracket (null and missing included).
pub(crate) fn resume_after_filter(created_at: Option<&Bson>, id: ObjectId) -> Document {
    let value = created_at.cloned().unwrap_or(Bson::Null);
    let bracket = sort_bracket(&value);

    let mut branches = vec![Bson::Document(
        doc! { "createdAt": value.clone(), "_id": { "$lt": id } },
    )];

    if bracket > NULL_BRACKET && bracket < MAX_KEY_BRACKET {
        branches.push(Bson::Document(doc! { "createdAt": { "$lt": value } }));
    }

    if bracket > NULL_BRACKET {
        // { createdAt: null } também casa com o campo ausente
        branches.push(Bson::Document(doc! { "createdAt": Bson::Null }));
    }

    let lower_types: Vec<Bson> = SORT_BRACKETS[..bracket]
        .iter()
        .enumerate()
        .filter(|(rank, _)| *rank != NULL_BRACKET)
        .flat_map(|(_, aliases)| aliases.iter().map(|alias| Bson::String(alias.to_string())))
        .collect();
    if !lower_types.is_empty() {
        branches.push(Bson::Document(
            doc! { "createdAt": { "$type": lower_types } },
        ));
    }

    doc! { "$or": branches }
}

pub(crate) fn task_from_document(document: &Document) -> Task {
    let id = document
        .get_object_id("_id")
        .map(|oid| oid.to_hex())
        .unwrap_or_default();
    let created_at = created_at_from_bson(document.get("createdAt"), &format!("task: {}", id));

    Task {
        name: document.get_str("name").unwrap_or_default().to_string(),
        completed: document.get_bool("completed").unwrap_or(false),
        description: document.get_str("description").unwrap_or_default().to_string(),
        created_at,
        id,
    }
}

fn list_failed(e: mongodb::error::Error) -> AppError {
    log::error!("❌ Failed to list tasks: {}", e);
    AppError::not_found(LIST_TASKS_FAILED)
}

#[async_trait]
impl TaskRepository for MongoTaskRepository {
    async fn add_task(&self, task: &Task, user_id: &str) -> Result<(), AppError> {
        // Upsert com $currentDate: o timestamp vem do relógio do servidor
        self.tasks(user_id)
            .update_one(
                doc! { "_id": ObjectId::new() },
                doc! {
                    "$set": {
                        "name": task.name.as_str(),
                        "completed": task.completed,
                        "description": task.description.as_str()
                    },
                    "$currentDate": { "createdAt": true }
                },
            )
            .upsert(true)
            .await
            .map_err(|e| {
                log::error!("❌ Failed to add task for user {}: {}", user_id, e);
                AppError::bad_request(ADD_TASK_FAILED)
            })?;

        log::debug!("✅ Task added for user {}", user_id);
        Ok(())
    }

    async fn get_tasks(
        &self,
        user_id: &str,
        limit: u32,
        start_after: Option<&str>,
    ) -> Result<TaskPage, AppError> {
        let collection = self.tasks(user_id);

        let filter = match start_after {
            Some(cursor_id) => self.resume_filter(&collection, cursor_id).await?,
            None => Document::new(),
        };

        // limit(0) significa "sem limite" no MongoDB
        let tasks = if limit == 0 {
            Vec::new()
        } else {
            let documents: Vec<Document> = collection
                .find(filter)
                .sort(doc! { "createdAt": -1, "_id": -1 })
                .limit(i64::from(limit))
                .await
                .map_err(list_failed)?
                .try_collect()
                .await
                .map_err(list_failed)?;
            documents.iter().map(task_from_document).collect()
        };

        // Contagem independente da página (não transacional)
        let total_count = collection
            .count_documents(doc! {})
            .await
            .map_err(list_failed)?;

        Ok(TaskPage { tasks, total_count })
    }

    async fn update_task(&self, task: &Task, user_id: &str) -> Result<(), AppError> {
        let oid = ObjectId::parse_str(&task.id).map_err(|_| {
            log::warn!("⚠️  Cannot update task with malformed id: {}", task.id);
            AppError::bad_request(UPDATE_TASK_FAILED)
        })?;

        let result = self
            .tasks(user_id)
            .update_one(
                doc! { "_id": oid },
                doc! {
                    "$set": {
                        "name": task.name.as_str(),
                        "completed": task.completed,
                        "description": task.description.as_str()
                    }
                },
            )
            .await
            .map_err(|e| {
                log::error!("❌ Failed to update task {}: {}", task.id, e);
                AppError::bad_request(UPDATE_TASK_FAILED)
            })?;

        if result.matched_count == 0 {
            log::warn!("⚠️  Task {} not found for user {}", task.id, user_id);
            return Err(AppError::bad_request(UPDATE_TASK_FAILED));
        }

        Ok(())
    }

    async fn delete_task(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            log::warn!("⚠️  Task {} does not exist (malformed id)", id);
            return Err(AppError::bad_request(TASK_DOES_NOT_EXIST));
        };

        let collection = self.tasks(user_id);

        let existing = collection
            .find_one(doc! { "_id": oid })
            .projection(doc! { "_id": 1 })
            .await
            .map_err(|e| {
                log::error!("❌ Error deleting task {}: {}", id, e);
                AppError::bad_request(DELETE_TASK_FAILED)
            })?;

        if existing.is_none() {
            log::warn!("⚠️  Task {} does not exist for user {}", id, user_id);
            return Err(AppError::bad_request(TASK_DOES_NOT_EXIST));
        }

        collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| {
                log::error!("❌ Error deleting task {}: {}", id, e);
                AppError::bad_request(DELETE_TASK_FAILED)
            })?;

        Ok(())
    }
}
