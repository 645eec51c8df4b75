use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client};

use super::{ensure_document_id, Document, DocumentStore, Filter};
use crate::errors::Error;

type Item = HashMap<String, AttributeValue>;

/// One DynamoDB table per collection, named `{prefix}-{collection}`.
///
/// DynamoDB has no case-insensitive matching, so `find` scans the table page by
/// page and evaluates the filter in process.
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
    table_prefix: String,
}

impl DynamoStore {
    pub fn new(client: Client, table_prefix: impl Into<String>) -> Self {
        Self {
            client,
            table_prefix: table_prefix.into(),
        }
    }

    fn table(&self, collection: &str) -> String {
        format!("{}-{}", self.table_prefix, collection)
    }

    async fn scan(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, Error> {
        let table = self.table(collection);
        let mut matched = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&table)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| Error::store(DisplayErrorContext(e)))?;

            for item in output.items.unwrap_or_default() {
                let document = from_item(item)?;
                if filter.matches(&document) {
                    matched.push(document);
                    if limit.is_some_and(|limit| matched.len() >= limit) {
                        return Ok(matched);
                    }
                }
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => return Ok(matched),
            }
        }
    }
}

fn from_item(item: Item) -> Result<Document, Error> {
    serde_dynamo::from_item(item).map_err(Error::store)
}

fn to_item(document: &Document) -> Result<Item, Error> {
    serde_dynamo::to_item(document).map_err(Error::store)
}

#[async_trait]
impl DocumentStore for DynamoStore {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Document>, Error> {
        self.scan(collection, filter, Some(limit)).await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, Error> {
        let output = self
            .client
            .get_item()
            .table_name(self.table(collection))
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| Error::store(DisplayErrorContext(e)))?;

        output.item.map(from_item).transpose()
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<usize, Error> {
        Ok(self.scan(collection, filter, None).await?.len())
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), Error> {
        let result = self
            .client
            .put_item()
            .table_name(self.table(collection))
            .set_item(Some(to_item(&document)?))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_conditional_check_failed_exception()) =>
            {
                Err(Error::Uniqueness {
                    field: "id".to_string(),
                })
            }
            Err(err) => Err(Error::store(DisplayErrorContext(err))),
        }
    }

    async fn replace_one(
        &self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> Result<(), Error> {
        ensure_document_id(&document, id)?;

        self.client
            .put_item()
            .table_name(self.table(collection))
            .set_item(Some(to_item(&document)?))
            .send()
            .await
            .map_err(|e| Error::store(DisplayErrorContext(e)))?;

        Ok(())
    }

    async fn delete_one(&self, collection: &str, id: &str) -> Result<bool, Error> {
        let output = self
            .client
            .delete_item()
            .table_name(self.table(collection))
            .key("id", AttributeValue::S(id.to_string()))
            .return_values(aws_sdk_dynamodb::types::ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| Error::store(DisplayErrorContext(e)))?;

        Ok(output.attributes.is_some_and(|old| !old.is_empty()))
    }
}
