use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{document_id, ensure_document_id, Document, DocumentStore, Filter};
use crate::errors::Error;

/// Collections held in insertion order behind a single lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Document>, Error> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| filter.matches(document))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<usize, Error> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .map(|documents| documents.iter().filter(|d| filter.matches(d)).count())
            .unwrap_or(0))
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), Error> {
        let id = document_id(&document)?.to_string();
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        if documents
            .iter()
            .any(|existing| document_id(existing).ok() == Some(id.as_str()))
        {
            return Err(Error::Uniqueness {
                field: "id".to_string(),
            });
        }

        documents.push(document);
        Ok(())
    }

    async fn replace_one(
        &self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> Result<(), Error> {
        ensure_document_id(&document, id)?;

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        match documents
            .iter_mut()
            .find(|existing| document_id(existing).ok() == Some(id))
        {
            Some(slot) => *slot = document,
            None => documents.push(document),
        }

        Ok(())
    }

    async fn delete_one(&self, collection: &str, id: &str) -> Result<bool, Error> {
        let mut collections = self.collections.write().await;

        let Some(documents) = collections.get_mut(collection) else {
            return Ok(false);
        };

        let before = documents.len();
        documents.retain(|existing| document_id(existing).ok() != Some(id));
        Ok(documents.len() != before)
    }
}
