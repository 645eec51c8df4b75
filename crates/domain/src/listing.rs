//! Listing Service
//!
//! Turns a free-text search (plus optional structured filters) into a store
//! predicate, fetches the matching records and applies the entity's in-memory
//! ranking. Shared by the hospital and medicine catalogs.

use std::{marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    errors::Error,
    store::{from_document, DocumentStore, Filter},
};

/// Upper bound on records fetched per list call. Anything past it is dropped
/// without notice; there is no pagination.
pub const MAX_LIST_RESULTS: usize = 100;

/// A record type served by the Listing Service.
pub trait Listable: Serialize + DeserializeOwned + Send + Sync + Sized {
    const COLLECTION: &'static str;
    const ENTITY: &'static str;
    /// Text fields a search term is matched against, OR-combined.
    const SEARCH_FIELDS: [&'static str; 3];

    /// Orders a retrieved batch in place. Must be a stable sort.
    fn rank(records: &mut [Self]);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub filters: Vec<Filter>,
}

impl ListQuery {
    pub fn search(term: Option<String>) -> Self {
        Self {
            search: term,
            filters: Vec::new(),
        }
    }

    pub fn and(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// OR of substring matches over `fields`, ANDed with every structured filter.
    pub fn to_filter(&self, fields: &[&str]) -> Filter {
        let mut clauses = Vec::with_capacity(self.filters.len() + 1);

        if let Some(term) = self.search.as_deref().filter(|term| !term.is_empty()) {
            clauses.push(Filter::or(
                fields
                    .iter()
                    .map(|field| Filter::contains(field, term))
                    .collect(),
            ));
        }

        clauses.extend(self.filters.iter().cloned());
        Filter::and(clauses)
    }
}

pub struct ListingService<T> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Listable> ListingService<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<T>, Error> {
        let filter = query.to_filter(&T::SEARCH_FIELDS);
        let documents = self
            .store
            .find(T::COLLECTION, &filter, MAX_LIST_RESULTS)
            .await?;

        let mut records = documents
            .into_iter()
            .map(from_document)
            .collect::<Result<Vec<T>, _>>()?;
        T::rank(&mut records);

        tracing::debug!(
            collection = T::COLLECTION,
            results = records.len(),
            "Listed records"
        );

        Ok(records)
    }

    pub async fn get(&self, id: &str) -> Result<T, Error> {
        self.store
            .get(T::COLLECTION, id)
            .await?
            .map(from_document)
            .transpose()?
            .ok_or_else(|| Error::not_found(T::ENTITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Place {
        id: String,
        name: String,
        location: String,
        address: String,
        score: u32,
    }

    impl Listable for Place {
        const COLLECTION: &'static str = "places";
        const ENTITY: &'static str = "Place";
        const SEARCH_FIELDS: [&'static str; 3] = ["name", "location", "address"];

        fn rank(records: &mut [Self]) {
            records.sort_by(|a, b| b.score.cmp(&a.score));
        }
    }

    async fn store_with(places: &[(&str, &str, &str, &str, u32)]) -> Arc<dyn DocumentStore> {
        let store = Arc::new(MemoryStore::new());
        for (id, name, location, address, score) in places {
            store
                .insert_one(
                    "places",
                    json!({
                        "id": id,
                        "name": name,
                        "location": location,
                        "address": address,
                        "score": score,
                    }),
                )
                .await
                .unwrap();
        }
        store
    }

    fn ids(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn no_search_and_no_filters_matches_all() {
        assert_eq!(ListQuery::default().to_filter(&["a"]), Filter::MatchAll);
        assert_eq!(
            ListQuery::search(Some(String::new())).to_filter(&["a"]),
            Filter::MatchAll
        );
    }

    #[test]
    fn search_with_structured_filter_is_a_conjunction() {
        let filter = ListQuery::search(Some("Flu".to_string()))
            .and(Filter::eq("category", "cold_flu"))
            .to_filter(&["name", "category", "description"]);

        assert_eq!(
            filter,
            Filter::And(vec![
                Filter::Or(vec![
                    Filter::contains("name", "flu"),
                    Filter::contains("category", "flu"),
                    Filter::contains("description", "flu"),
                ]),
                Filter::eq("category", "cold_flu"),
            ])
        );
    }

    #[tokio::test]
    async fn search_matches_any_of_three_fields_case_insensitively() {
        let store = store_with(&[
            ("a", "Harbor Clinic", "Docks", "1 Pier Rd", 1),
            ("b", "Hill Clinic", "Harbor View", "2 High St", 2),
            ("c", "Valley Clinic", "Valley", "3 harbor lane", 3),
            ("d", "Lake Clinic", "Lakeside", "4 Shore Rd", 4),
        ])
        .await;
        let service = ListingService::<Place>::new(store);

        let found = service
            .list(&ListQuery::search(Some("HARBOR".to_string())))
            .await
            .unwrap();

        assert_eq!(ids(&found), vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn search_is_substring_not_token() {
        let store = store_with(&[("a", "Northgate", "North", "x", 1)]).await;
        let service = ListingService::<Place>::new(store);

        let found = service
            .list(&ListQuery::search(Some("thga".to_string())))
            .await
            .unwrap();
        assert_eq!(ids(&found), vec!["a"]);

        let found = service
            .list(&ListQuery::search(Some("north gate".to_string())))
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn list_is_capped() {
        let store = Arc::new(MemoryStore::new());
        for i in 0..(MAX_LIST_RESULTS + 20) {
            store
                .insert_one(
                    "places",
                    json!({
                        "id": format!("p{i}"),
                        "name": "n",
                        "location": "l",
                        "address": "a",
                        "score": 0,
                    }),
                )
                .await
                .unwrap();
        }
        let service = ListingService::<Place>::new(store);

        let found = service.list(&ListQuery::default()).await.unwrap();
        assert_eq!(found.len(), MAX_LIST_RESULTS);
    }

    #[tokio::test]
    async fn repeated_lists_are_identical() {
        let store = store_with(&[
            ("a", "A", "x", "x", 1),
            ("b", "B", "x", "x", 1),
            ("c", "C", "x", "x", 5),
        ])
        .await;
        let service = ListingService::<Place>::new(store);

        let first = service.list(&ListQuery::default()).await.unwrap();
        let second = service.list(&ListQuery::default()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn get_returns_record_or_not_found() {
        let store = store_with(&[("a", "A", "x", "x", 1)]).await;
        let service = ListingService::<Place>::new(store);

        assert_eq!(service.get("a").await.unwrap().name, "A");
        assert_eq!(
            service.get("not-a-ulid").await.unwrap_err(),
            Error::not_found("Place")
        );
    }
}
