//! Document store gateway.
//!
//! Handlers never talk to a backend directly. They go through [`StoreGateway`],
//! which serializes typed records to BSON, delegates to a [`DocumentStore`]
//! backend and turns stored identifiers into plain strings on the way out.

use async_trait::async_trait;
use metrics::counter;
use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use serde::{de::DeserializeOwned, Serialize};
use service_core::error::AppError;
use std::sync::Arc;

/// Collections written by the HTTP surface.
pub mod collections {
    pub const CONSULTATION: &str = "consultation";
    pub const MESSAGE: &str = "message";
    pub const REMINDER: &str = "reminder";
    pub const VITAL: &str = "vital";
    pub const OFFLINE_MESSAGE: &str = "offlinemessage";
}

/// Backend for schema-less records addressed by collection name.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend label, e.g. "mongo".
    fn backend_name(&self) -> &'static str;

    fn database_name(&self) -> &str;

    /// Store `record` as-is. The record already carries its `_id`.
    async fn insert(&self, collection: &str, record: Document) -> Result<(), AppError>;

    /// Records whose fields equal every field of `filter`, in store order.
    /// A `limit` of zero or less means no limit.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError>;

    async fn list_collections(&self) -> Result<Vec<String>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

/// Typed front door to a [`DocumentStore`].
#[derive(Clone)]
pub struct StoreGateway {
    backend: Arc<dyn DocumentStore>,
}

impl StoreGateway {
    pub fn new(backend: Arc<dyn DocumentStore>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    pub fn database_name(&self) -> &str {
        self.backend.database_name()
    }

    /// Store a record and return its new identifier.
    pub async fn create(&self, collection: &str, mut record: Document) -> Result<String, AppError> {
        let id = ObjectId::new();
        record.insert("_id", id);

        self.backend.insert(collection, record).await.map_err(|e| {
            tracing::error!(collection = %collection, error = %e, "Failed to insert record");
            e
        })?;

        counter!("medlink_records_created_total", "collection" => collection.to_string())
            .increment(1);
        tracing::debug!(collection = %collection, id = %id, "Record created");

        Ok(id.to_hex())
    }

    /// Up to `limit` records matching `filter`, each with a string `_id`.
    pub async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let records = self
            .backend
            .find(collection, filter, limit)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, error = %e, "Failed to query records");
                e
            })?;

        Ok(records.into_iter().map(stringify_id).collect())
    }

    pub async fn insert_record<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<String, AppError> {
        let mut document = bson::to_document(record)?;
        // Identifiers are always assigned here, never taken from the caller.
        document.remove("_id");
        self.create(collection, document).await
    }

    pub async fn find_records<T: DeserializeOwned>(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<T>, AppError> {
        self.query(collection, filter, limit)
            .await?
            .into_iter()
            .map(|doc| bson::from_document(doc).map_err(AppError::from))
            .collect()
    }

    /// First `limit` collection names.
    pub async fn list_collections(&self, limit: usize) -> Result<Vec<String>, AppError> {
        let mut names = self.backend.list_collections().await?;
        names.truncate(limit);
        Ok(names)
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.backend.health_check().await
    }
}

fn stringify_id(mut record: Document) -> Document {
    let id = match record.get("_id") {
        Some(Bson::ObjectId(oid)) => Some(oid.to_hex()),
        Some(Bson::String(_)) | None => None,
        Some(other) => Some(other.to_string()),
    };
    if let Some(id) = id {
        record.insert("_id", id);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reminder;
    use crate::services::MemoryStore;
    use mongodb::bson::doc;

    fn gateway() -> StoreGateway {
        StoreGateway::new(Arc::new(MemoryStore::new("medlink_test")))
    }

    fn reminder(email: &str, medicine: &str) -> Reminder {
        Reminder {
            id: None,
            user_email: email.to_string(),
            medicine_name: medicine.to_string(),
            time: "08:30".to_string(),
            duration_days: 5,
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_returns_hex_object_id() {
        let store = gateway();
        let id = store
            .create("reminder", doc! { "user_email": "a@example.com" })
            .await
            .unwrap();
        assert!(ObjectId::parse_str(&id).is_ok());
    }

    #[tokio::test]
    async fn query_stringifies_identifiers() {
        let store = gateway();
        let id = store
            .create("vital", doc! { "user_email": "a@example.com" })
            .await
            .unwrap();

        let records = store.query("vital", doc! {}, 10).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get_str("_id").unwrap(), id);
    }

    #[tokio::test]
    async fn typed_round_trip_filters_by_owner() {
        let store = gateway();
        store
            .insert_record("reminder", &reminder("a@example.com", "ORS"))
            .await
            .unwrap();
        store
            .insert_record("reminder", &reminder("b@example.com", "Zinc"))
            .await
            .unwrap();

        let found: Vec<Reminder> = store
            .find_records("reminder", doc! { "user_email": "a@example.com" }, 100)
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].medicine_name, "ORS");
        assert!(found[0].id.is_some());
    }

    #[tokio::test]
    async fn caller_supplied_id_is_ignored() {
        let store = gateway();
        let mut record = reminder("a@example.com", "ORS");
        record.id = Some("not-an-object-id".to_string());

        let id = store.insert_record("reminder", &record).await.unwrap();
        let found: Vec<Reminder> = store.find_records("reminder", doc! {}, 10).await.unwrap();

        assert_eq!(found[0].id.as_deref(), Some(id.as_str()));
    }

    #[test]
    fn stringify_keeps_string_ids() {
        let record = stringify_id(doc! { "_id": "abc" });
        assert_eq!(record.get_str("_id").unwrap(), "abc");
    }
}
