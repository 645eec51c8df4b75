use serde::Deserialize;

use super::Hospital;
use crate::{
    listing::{ListQuery, Listable, ListingService},
    store::HOSPITALS,
};

pub type HospitalCatalog = ListingService<Hospital>;

impl Listable for Hospital {
    const COLLECTION: &'static str = HOSPITALS;
    const ENTITY: &'static str = "Hospital";
    const SEARCH_FIELDS: [&'static str; 3] = ["name", "location", "address"];

    /// Most free beds first, better rating breaks ties; equal pairs keep
    /// retrieval order.
    fn rank(records: &mut [Self]) {
        records.sort_by(|a, b| {
            b.total_beds()
                .cmp(&a.total_beds())
                .then_with(|| b.rating.total_cmp(&a.rating))
        });
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct HospitalQuery {
    pub search: Option<String>,
}

impl From<HospitalQuery> for ListQuery {
    fn from(query: HospitalQuery) -> Self {
        ListQuery::search(query.search)
    }
}
