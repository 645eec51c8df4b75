//! Document store abstraction.
//!
//! Every entity lives in one flat collection of JSON documents keyed by their
//! `id` field. Handlers never talk to a concrete backend; they hold an
//! `Arc<dyn DocumentStore>` built once at startup.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::Error;

/// DynamoDB backend
pub mod dynamo;

/// In-process backend
pub mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

pub type Document = Value;

pub const HOSPITALS: &str = "hospitals";
pub const MEDICINES: &str = "medicines";
pub const PRESCRIPTIONS: &str = "prescriptions";
pub const CARTS: &str = "carts";
pub const ORDERS: &str = "orders";

/// Query predicate evaluated against top-level document fields.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    MatchAll,
    Eq { field: String, value: Value },
    /// Case-insensitive substring match; `needle` is stored lowercased.
    Contains { field: String, needle: String },
    Or(Vec<Filter>),
    And(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn contains(field: &str, needle: &str) -> Self {
        Self::Contains {
            field: field.to_string(),
            needle: needle.to_lowercase(),
        }
    }

    pub fn or(clauses: Vec<Filter>) -> Self {
        Self::collapse(clauses, Self::Or)
    }

    pub fn and(clauses: Vec<Filter>) -> Self {
        Self::collapse(clauses, Self::And)
    }

    fn collapse(mut clauses: Vec<Filter>, wrap: fn(Vec<Filter>) -> Filter) -> Self {
        clauses.retain(|clause| *clause != Self::MatchAll);
        match clauses.len() {
            0 => Self::MatchAll,
            1 => clauses.remove(0),
            _ => wrap(clauses),
        }
    }

    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Self::MatchAll => true,
            Self::Eq { field, value } => document.get(field) == Some(value),
            Self::Contains { field, needle } => document
                .get(field)
                .and_then(Value::as_str)
                .map(|text| text.to_lowercase().contains(needle.as_str()))
                .unwrap_or(false),
            Self::Or(clauses) => clauses.iter().any(|clause| clause.matches(document)),
            Self::And(clauses) => clauses.iter().all(|clause| clause.matches(document)),
        }
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Matching documents in retrieval order, at most `limit` of them.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Document>, Error>;

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, Error> {
        Ok(self.find(collection, filter, 1).await?.into_iter().next())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, Error> {
        self.find_one(collection, &Filter::eq("id", id)).await
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<usize, Error>;

    /// Fails with `Error::Uniqueness` when a document with the same id exists.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), Error>;

    /// Inserts in order and stops at the first failure.
    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<usize, Error> {
        let mut inserted = 0;
        for document in documents {
            self.insert_one(collection, document).await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Upsert by id. The document's own `id` must equal `id`.
    async fn replace_one(&self, collection: &str, id: &str, document: Document)
        -> Result<(), Error>;

    /// Returns whether a document was removed.
    async fn delete_one(&self, collection: &str, id: &str) -> Result<bool, Error>;
}

pub fn to_document<T: Serialize>(value: &T) -> Result<Document, Error> {
    serde_json::to_value(value).map_err(Error::store)
}

pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, Error> {
    serde_json::from_value(document).map_err(Error::store)
}

pub(crate) fn document_id(document: &Document) -> Result<&str, Error> {
    document
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::validation("id", "document has no string id"))
}

pub(crate) fn ensure_document_id(document: &Document, id: &str) -> Result<(), Error> {
    let found = document_id(document)?;
    if found != id {
        return Err(Error::validation(
            "id",
            format!("document id '{found}' does not match '{id}'"),
        ));
    }
    Ok(())
}
