use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use cqrs_es::{
    mem_store::MemStore,
    persist::{PersistedEventStore, ViewRepository},
    CqrsFramework, EventStore,
};
use dynamo_es::DynamoEventRepository;
use ulid::Ulid;

use super::{Command, DocumentViewRepository, Order, Query, Services, View};
use crate::{errors::Error, store::DocumentStore};

/// Entry point for order commands, independent of the event store behind it.
#[async_trait]
pub trait OrderCommandBus: Send + Sync {
    async fn dispatch(&self, order_id: &str, command: Command) -> Result<(), Error>;
}

#[async_trait]
impl<ES> OrderCommandBus for CqrsFramework<Order, ES>
where
    ES: EventStore<Order>,
{
    async fn dispatch(&self, order_id: &str, command: Command) -> Result<(), Error> {
        let mut metadata = HashMap::new();
        metadata.insert("command_id".to_string(), Ulid::new().to_string());

        self.execute_with_metadata(order_id, command, metadata)
            .await
            .map_err(Error::from)
    }
}

pub fn init(
    client: aws_sdk_dynamodb::Client,
    repo: Arc<dyn ViewRepository<View, Order>>,
    event_log_table: &str,
    event_snapshots_table: &str,
) -> Arc<CqrsFramework<Order, PersistedEventStore<DynamoEventRepository, Order>>> {
    let store: PersistedEventStore<DynamoEventRepository, Order> =
        PersistedEventStore::new_snapshot_store(
            DynamoEventRepository::new(client)
                .with_tables(event_log_table, event_snapshots_table),
            5,
        );

    let query: Box<dyn cqrs_es::Query<Order>> = Box::new(Query::new(repo));

    Arc::new(CqrsFramework::new(store, vec![query], Services::default()))
}

/// Event log held in process; used with the in-memory document store.
pub fn init_in_memory(
    repo: Arc<dyn ViewRepository<View, Order>>,
    services: Services,
) -> Arc<CqrsFramework<Order, MemStore<Order>>> {
    let query: Box<dyn cqrs_es::Query<Order>> = Box::new(Query::new(repo));

    Arc::new(CqrsFramework::new(
        MemStore::<Order>::default(),
        vec![query],
        services,
    ))
}

pub fn init_repo(store: Arc<dyn DocumentStore>) -> Arc<dyn ViewRepository<View, Order>> {
    Arc::new(DocumentViewRepository::new(store))
}
