use chrono::Utc;
use serde::Serialize;

use crate::{
    errors::Error,
    hospitals::seed::reference_hospitals,
    medicines::seed::reference_medicines,
    store::{to_document, DocumentStore, Filter, HOSPITALS, MEDICINES},
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SeedReport {
    pub hospitals: usize,
    pub medicines: usize,
}

/// Fills empty reference collections. A collection with any document is left
/// alone; a seeder racing another one skips ids that already landed.
pub async fn seed_reference_data(store: &dyn DocumentStore) -> Result<SeedReport, Error> {
    let medicines = reference_medicines(Utc::now());
    for medicine in &medicines {
        medicine.validate()?;
    }

    Ok(SeedReport {
        hospitals: seed_collection(store, HOSPITALS, &reference_hospitals()).await?,
        medicines: seed_collection(store, MEDICINES, &medicines).await?,
    })
}

async fn seed_collection<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    records: &[T],
) -> Result<usize, Error> {
    let existing = store.count(collection, &Filter::MatchAll).await?;
    if existing > 0 {
        tracing::debug!(collection, existing, "Collection already seeded");
        return Ok(0);
    }

    let mut inserted = 0;
    for record in records {
        match store.insert_one(collection, to_document(record)?).await {
            Ok(()) => inserted += 1,
            Err(Error::Uniqueness { .. }) => {
                tracing::warn!(collection, "Seed document already present, skipping");
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(collection, inserted, "Reference data initialized");
    Ok(inserted)
}
