use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
    Client as MongoClient, Database,
};
use service_core::error::AppError;

use super::store::DocumentStore;

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend_name(&self) -> &'static str {
        "mongo"
    }

    fn database_name(&self) -> &str {
        self.db.name()
    }

    async fn insert(&self, collection: &str, record: Document) -> Result<(), AppError> {
        self.db
            .collection::<Document>(collection)
            .insert_one(record, None)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!(e.to_string())))?;
        Ok(())
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let find_options = FindOptions::builder()
            .limit((limit > 0).then_some(limit))
            .build();

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, find_options)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!(e.to_string())))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!(e.to_string())))
    }

    async fn list_collections(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!(e.to_string())))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }
}
