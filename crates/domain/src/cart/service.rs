use std::sync::Arc;

use super::{inputs::AddToCartInput, model::add_quantity, Cart, CartItem};
use crate::{
    errors::Error,
    medicines::MedicineCatalog,
    prescriptions::PrescriptionService,
    store::{from_document, to_document, DocumentStore, Filter, CARTS},
};

pub struct CartService {
    store: Arc<dyn DocumentStore>,
    medicines: Arc<MedicineCatalog>,
    prescriptions: Arc<PrescriptionService>,
}

impl CartService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        medicines: Arc<MedicineCatalog>,
        prescriptions: Arc<PrescriptionService>,
    ) -> Self {
        Self {
            store,
            medicines,
            prescriptions,
        }
    }

    /// The stored cart, or a fresh empty one that is not persisted.
    pub async fn get(&self, user_id: &str) -> Result<Cart, Error> {
        Ok(self
            .load(user_id)
            .await?
            .unwrap_or_else(|| Cart::empty(user_id)))
    }

    pub async fn add(&self, user_id: &str, input: AddToCartInput) -> Result<Cart, Error> {
        if input.quantity == 0 {
            return Err(Error::validation("quantity", "must be at least 1"));
        }

        let medicine = self.medicines.get(&input.medicine_id).await?;

        match (&input.prescription_id, medicine.prescription_required) {
            (Some(prescription_id), _) => {
                self.prescriptions.usable_by(prescription_id, user_id).await?;
            }
            (None, true) => {
                return Err(Error::validation(
                    "prescriptionId",
                    format!("{} requires a prescription", medicine.name),
                ));
            }
            (None, false) => {}
        }

        let mut cart = self.get(user_id).await?;
        let wanted = add_quantity(cart.quantity_of(&medicine.id), input.quantity)?;
        medicine.ensure_stock(wanted)?;

        cart.add(CartItem::new(
            medicine.id.clone(),
            medicine.name.clone(),
            medicine.price,
            input.quantity,
            input.prescription_id,
        ))?;

        tracing::debug!(user_id, medicine_id = %medicine.id, "Cart item added");
        self.save(cart).await
    }

    pub async fn update(
        &self,
        user_id: &str,
        medicine_id: &str,
        quantity: u32,
    ) -> Result<Cart, Error> {
        let mut cart = self.get(user_id).await?;

        if quantity > 0 {
            if cart.quantity_of(medicine_id) == 0 {
                return Err(Error::not_found("CartItem"));
            }
            let medicine = self.medicines.get(medicine_id).await?;
            medicine.ensure_stock(quantity)?;
        }

        if !cart.set_quantity(medicine_id, quantity) {
            return Err(Error::not_found("CartItem"));
        }
        self.save(cart).await
    }

    pub async fn remove(&self, user_id: &str, medicine_id: &str) -> Result<Cart, Error> {
        let mut cart = self.get(user_id).await?;
        if !cart.remove(medicine_id) {
            return Err(Error::not_found("CartItem"));
        }
        self.save(cart).await
    }

    pub async fn clear(&self, user_id: &str) -> Result<Cart, Error> {
        if let Some(cart) = self.load(user_id).await? {
            self.store.delete_one(CARTS, &cart.id).await?;
            tracing::debug!(user_id, "Cart cleared");
        }
        Ok(Cart::empty(user_id))
    }

    async fn load(&self, user_id: &str) -> Result<Option<Cart>, Error> {
        self.store
            .find_one(CARTS, &Filter::eq("userId", user_id))
            .await?
            .map(from_document)
            .transpose()
    }

    async fn save(&self, cart: Cart) -> Result<Cart, Error> {
        self.store
            .replace_one(CARTS, &cart.id, to_document(&cart)?)
            .await?;
        Ok(cart)
    }
}
