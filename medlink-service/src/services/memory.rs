use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::Document;
use service_core::error::AppError;

use super::store::DocumentStore;

/// In-process store for local development and tests. Data lives as long as
/// the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    database: String,
    collections: DashMap<String, Vec<Document>>,
}

impl MemoryStore {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collections: DashMap::new(),
        }
    }
}

fn matches(record: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| record.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn database_name(&self) -> &str {
        &self.database
    }

    async fn insert(&self, collection: &str, record: Document) -> Result<(), AppError> {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let Some(records) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };

        let matching = records.iter().filter(|r| matches(r, &filter)).cloned();
        let found = if limit > 0 {
            matching.take(limit as usize).collect()
        } else {
            matching.collect()
        };
        Ok(found)
    }

    async fn list_collections(&self) -> Result<Vec<String>, AppError> {
        let mut names: Vec<String> = self
            .collections
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn find_on_missing_collection_is_empty() {
        let store = MemoryStore::new("test");
        let found = store.find("vital", doc! {}, 20).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn find_applies_equality_filter_and_limit() {
        let store = MemoryStore::new("test");
        for i in 0..5 {
            store
                .insert("vital", doc! { "user_email": "a@example.com", "n": i })
                .await
                .unwrap();
        }
        store
            .insert("vital", doc! { "user_email": "b@example.com", "n": 99 })
            .await
            .unwrap();

        let found = store
            .find("vital", doc! { "user_email": "a@example.com" }, 3)
            .await
            .unwrap();

        assert_eq!(found.len(), 3);
        // insertion order is the native order
        assert_eq!(found[0].get_i32("n").unwrap(), 0);
        assert_eq!(found[2].get_i32("n").unwrap(), 2);
    }

    #[tokio::test]
    async fn non_positive_limit_returns_everything() {
        let store = MemoryStore::new("test");
        for _ in 0..4 {
            store.insert("reminder", doc! {}).await.unwrap();
        }
        assert_eq!(store.find("reminder", doc! {}, 0).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn lists_collections_sorted() {
        let store = MemoryStore::new("test");
        store.insert("vital", doc! {}).await.unwrap();
        store.insert("consultation", doc! {}).await.unwrap();
        assert_eq!(
            store.list_collections().await.unwrap(),
            vec!["consultation".to_string(), "vital".to_string()]
        );
    }
}
