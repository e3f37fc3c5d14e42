use chrono::{DateTime, Utc};
use mongodb::bson::Bson;

/// Como um `createdAt` armazenado foi lido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StoredTimestamp {
    Valid(DateTime<Utc>),
    /// String vazia: ausente, sem aviso
    Empty,
    /// Qualquer outro valor: ausente, com aviso no log
    Invalid,
}

impl StoredTimestamp {
    pub(crate) fn read(value: Option<&Bson>) -> Self {
        match value {
            Some(Bson::DateTime(stored)) => {
                match DateTime::from_timestamp_millis(stored.timestamp_millis()) {
                    Some(converted) => StoredTimestamp::Valid(converted),
                    None => StoredTimestamp::Invalid,
                }
            }
            Some(Bson::String(text)) if text.is_empty() => StoredTimestamp::Empty,
            _ => StoredTimestamp::Invalid,
        }
    }

    pub(crate) fn warns(&self) -> bool {
        matches!(self, StoredTimestamp::Invalid)
    }
}

/// Converte um `createdAt` armazenado para UTC.
///
/// Só datas do banco são convertidas. Qualquer outro valor vira `None` e,
/// exceto a string vazia, gera um aviso no log.
pub fn created_at_from_bson(value: Option<&Bson>, owner: &str) -> Option<DateTime<Utc>> {
    let stored = StoredTimestamp::read(value);
    if stored.warns() {
        log::warn!("⚠️  Invalid createdAt value for {}", owner);
    }

    match stored {
        StoredTimestamp::Valid(converted) => Some(converted),
        StoredTimestamp::Empty | StoredTimestamp::Invalid => None,
    }
}
