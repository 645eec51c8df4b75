use crate::{
    errors::Error,
    store::{from_document, to_document, DocumentStore, MEDICINES},
};

use super::Medicine;

/// Takes `quantity` units out of stock, flooring at zero. Read-modify-write
/// with no locking; concurrent orders may race.
pub async fn withdraw_stock(
    store: &dyn DocumentStore,
    medicine_id: &str,
    quantity: u32,
) -> Result<Medicine, Error> {
    let mut medicine: Medicine = store
        .get(MEDICINES, medicine_id)
        .await?
        .map(from_document)
        .transpose()?
        .ok_or_else(|| Error::not_found("Medicine"))?;

    medicine.stock = medicine.stock.saturating_sub(quantity);
    store
        .replace_one(MEDICINES, medicine_id, to_document(&medicine)?)
        .await?;

    Ok(medicine)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{medicines::seed::reference_medicines, store::MemoryStore};

    #[tokio::test]
    async fn withdraw_reduces_and_floors_at_zero() {
        let store = MemoryStore::new();
        let medicine = reference_medicines(Utc::now()).remove(0);
        let start = medicine.stock;
        store
            .insert_one(MEDICINES, to_document(&medicine).unwrap())
            .await
            .unwrap();

        let updated = withdraw_stock(&store, &medicine.id, 3).await.unwrap();
        assert_eq!(updated.stock, start - 3);

        let drained = withdraw_stock(&store, &medicine.id, start + 10).await.unwrap();
        assert_eq!(drained.stock, 0);
    }

    #[tokio::test]
    async fn withdraw_unknown_medicine_is_not_found() {
        let store = MemoryStore::new();
        let err = withdraw_stock(&store, "missing", 1).await.unwrap_err();
        assert_eq!(err, Error::not_found("Medicine"));
    }
}
