use std::sync::Arc;

use async_trait::async_trait;
use cqrs_es::{
    persist::{PersistenceError, ViewContext, ViewRepository},
    Aggregate, EventEnvelope, View as CqrsView,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Order;
use crate::{
    errors::Error,
    store::{from_document, to_document, DocumentStore, ORDERS},
};

const VERSION_FIELD: &str = "viewVersion";

/// Order document as stored in the `orders` collection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct View {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default)]
    pub command_id: String,
}

impl CqrsView<Order> for View {
    fn update(&mut self, event: &EventEnvelope<Order>) {
        self.command_id = event
            .metadata
            .get("command_id")
            .cloned()
            .unwrap_or_default();
        self.order.apply(event.payload.clone());
    }
}

/// Writes order views into the document store, versioned per order.
pub struct DocumentViewRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocumentViewRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

fn persistence(err: Error) -> PersistenceError {
    match err {
        Error::Uniqueness { .. } => PersistenceError::OptimisticLockError,
        other => PersistenceError::UnknownError(Box::new(other)),
    }
}

#[async_trait]
impl ViewRepository<View, Order> for DocumentViewRepository {
    async fn load(&self, view_id: &str) -> Result<Option<View>, PersistenceError> {
        Ok(self
            .load_with_context(view_id)
            .await?
            .map(|(view, _)| view))
    }

    async fn load_with_context(
        &self,
        view_id: &str,
    ) -> Result<Option<(View, ViewContext)>, PersistenceError> {
        let Some(document) = self.store.get(ORDERS, view_id).await.map_err(persistence)? else {
            return Ok(None);
        };

        let version = document
            .get(VERSION_FIELD)
            .and_then(Value::as_i64)
            .unwrap_or(1);
        let view: View = from_document(document)
            .map_err(|err| PersistenceError::DeserializationError(Box::new(err)))?;

        Ok(Some((view, ViewContext::new(view_id.to_string(), version))))
    }

    async fn update_view(&self, view: View, context: ViewContext) -> Result<(), PersistenceError> {
        let mut document = to_document(&view).map_err(persistence)?;
        if let Some(fields) = document.as_object_mut() {
            fields.insert(VERSION_FIELD.to_string(), Value::from(context.version + 1));
        }

        if context.version == 0 {
            self.store.insert_one(ORDERS, document).await
        } else {
            self.store
                .replace_one(ORDERS, &context.view_instance_id, document)
                .await
        }
        .map_err(persistence)
    }
}

/// Projection keeping the `orders` collection in step with the event log.
pub struct Query {
    repo: Arc<dyn ViewRepository<View, Order>>,
}

impl Query {
    pub fn new(repo: Arc<dyn ViewRepository<View, Order>>) -> Self {
        Self { repo }
    }

    async fn update(
        &self,
        order_id: &str,
        events: &[EventEnvelope<Order>],
    ) -> Result<(), PersistenceError> {
        let (mut view, view_context) = match self.repo.load_with_context(order_id).await? {
            None => (View::default(), ViewContext::new(order_id.to_string(), 0)),
            Some((view, context)) => (view, context),
        };

        for event in events {
            view.update(event);
        }

        self.repo.update_view(view, view_context).await
    }
}

#[async_trait]
impl cqrs_es::Query<Order> for Query {
    async fn dispatch(&self, order_id: &str, events: &[EventEnvelope<Order>]) {
        if let Err(err) = self.update(order_id, events).await {
            tracing::error!(order_id, "Order projection failed: {}", err);
        }
    }
}
