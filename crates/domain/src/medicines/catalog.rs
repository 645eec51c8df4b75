use std::cmp::Reverse;

use super::{Medicine, MedicineCategory};
use crate::{
    listing::{ListQuery, Listable, ListingService},
    store::{Filter, MEDICINES},
};

pub type MedicineCatalog = ListingService<Medicine>;

impl Listable for Medicine {
    const COLLECTION: &'static str = MEDICINES;
    const ENTITY: &'static str = "Medicine";
    const SEARCH_FIELDS: [&'static str; 3] = ["name", "category", "description"];

    /// Purchasable items first, then alphabetical.
    fn rank(records: &mut [Self]) {
        records.sort_by_cached_key(|m| (Reverse(m.in_stock()), m.name.to_lowercase()));
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MedicineQuery {
    pub search: Option<String>,
    pub category: Option<MedicineCategory>,
    pub prescription_required: Option<bool>,
}

impl From<MedicineQuery> for ListQuery {
    fn from(query: MedicineQuery) -> Self {
        let mut list = ListQuery::search(query.search);
        if let Some(category) = query.category {
            list = list.and(Filter::eq("category", category.as_str()));
        }
        if let Some(required) = query.prescription_required {
            list = list.and(Filter::eq("prescriptionRequired", required));
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;
    use crate::{
        medicines::seed::reference_medicines,
        store::{to_document, DocumentStore, MemoryStore},
    };

    async fn catalog_with(medicines: &[Medicine]) -> MedicineCatalog {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        for medicine in medicines {
            store
                .insert_one(MEDICINES, to_document(medicine).unwrap())
                .await
                .unwrap();
        }
        MedicineCatalog::new(store)
    }

    fn names(medicines: &[Medicine]) -> Vec<&str> {
        medicines.iter().map(|m| m.name.as_str()).collect()
    }

    /// Two overlapping predicates: "relief" hits pain_relief, cold_flu and
    /// anything describing relief; prescription_required narrows that down.
    #[tokio::test]
    async fn search_and_structured_filter_intersect() {
        let all = reference_medicines(Utc::now());
        let catalog = catalog_with(&all).await;

        let by_search = catalog
            .list(&ListQuery::search(Some("relief".to_string())))
            .await
            .unwrap();
        let by_flag = catalog
            .list(
                &MedicineQuery {
                    prescription_required: Some(false),
                    ..Default::default()
                }
                .into(),
            )
            .await
            .unwrap();
        let both = catalog
            .list(
                &MedicineQuery {
                    search: Some("relief".to_string()),
                    prescription_required: Some(false),
                    ..Default::default()
                }
                .into(),
            )
            .await
            .unwrap();

        assert!(by_search.iter().any(|m| m.prescription_required));
        assert!(both.len() < by_search.len());
        assert!(both.len() < by_flag.len());
        for medicine in &both {
            assert!(!medicine.prescription_required);
            assert!(by_search.contains(medicine));
        }
        for medicine in &by_search {
            if !medicine.prescription_required {
                assert!(both.contains(medicine));
            }
        }
    }

    #[tokio::test]
    async fn category_filter_is_exact() {
        let catalog = catalog_with(&reference_medicines(Utc::now())).await;

        let found = catalog
            .list(
                &MedicineQuery {
                    category: Some(MedicineCategory::Antibiotics),
                    ..Default::default()
                }
                .into(),
            )
            .await
            .unwrap();

        assert_eq!(names(&found), vec!["Amoxicillin 500mg"]);
    }

    #[tokio::test]
    async fn out_of_stock_sinks_and_names_sort() {
        let catalog = catalog_with(&reference_medicines(Utc::now())).await;

        let found = catalog.list(&ListQuery::default()).await.unwrap();

        assert_eq!(found.len(), MedicineCategory::ALL.len());
        assert_eq!(found.first().unwrap().name, "Amoxicillin 500mg");
        let last = found.last().unwrap();
        assert!(!last.in_stock());

        let in_stock: Vec<String> = found
            .iter()
            .filter(|m| m.in_stock())
            .map(|m| m.name.to_lowercase())
            .collect();
        let mut sorted = in_stock.clone();
        sorted.sort();
        assert_eq!(in_stock, sorted);
    }
}
