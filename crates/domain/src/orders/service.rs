use std::{collections::HashMap, sync::Arc};

use ulid::Ulid;

use super::{
    inputs::PlaceOrderInput, Command, Order, OrderCommandBus, OrderItem, OrderStatus,
    AGGREGATE_TYPE,
};
use crate::{
    cart::{model::add_quantity, CartService},
    errors::Error,
    listing::MAX_LIST_RESULTS,
    medicines::{inventory::withdraw_stock, MedicineCatalog},
    prescriptions::PrescriptionService,
    store::{from_document, DocumentStore, Filter, ORDERS},
};

pub struct OrderService {
    store: Arc<dyn DocumentStore>,
    commands: Arc<dyn OrderCommandBus>,
    medicines: Arc<MedicineCatalog>,
    carts: Arc<CartService>,
    prescriptions: Arc<PrescriptionService>,
}

impl OrderService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        commands: Arc<dyn OrderCommandBus>,
        medicines: Arc<MedicineCatalog>,
        carts: Arc<CartService>,
        prescriptions: Arc<PrescriptionService>,
    ) -> Self {
        Self {
            store,
            commands,
            medicines,
            carts,
            prescriptions,
        }
    }

    /// Places the order, then withdraws stock, consumes prescriptions and
    /// clears the cart. The follow-up steps are not transactional: a failure
    /// there is logged and the order stands.
    pub async fn place(&self, input: PlaceOrderInput) -> Result<Order, Error> {
        for prescription_id in &input.prescription_ids {
            self.prescriptions
                .usable_by(prescription_id, &input.user_id)
                .await?;
        }
        let items = self.price_items(&input).await?;

        let order_id = Ulid::new().to_string();
        let command = Command::PlaceOrder {
            id: order_id.clone(),
            user_id: input.user_id.clone(),
            items: items.clone(),
            delivery_address: input.delivery_address,
            contact_number: input.contact_number,
            payment_method: input.payment_method,
            notes: input.notes,
            prescription_ids: input.prescription_ids.clone(),
        };

        self.commands.dispatch(&order_id, command).await?;
        tracing::info!(order_id = %order_id, user_id = %input.user_id, "Order placed");

        self.settle(&input.user_id, &items, &input.prescription_ids)
            .await;
        self.projected(&order_id).await
    }

    /// Rebuilds the lines from the catalog: current name and price, stock
    /// covering the combined quantity per medicine, and a listed prescription
    /// on every line that needs one.
    async fn price_items(&self, input: &PlaceOrderInput) -> Result<Vec<OrderItem>, Error> {
        let mut wanted: HashMap<&str, u32> = HashMap::new();
        let mut items = Vec::with_capacity(input.items.len());

        for item in &input.items {
            let medicine = self.medicines.get(&item.medicine_id).await?;

            let already = wanted.get(item.medicine_id.as_str()).copied().unwrap_or(0);
            let total = add_quantity(already, item.quantity)?;
            medicine.ensure_stock(total)?;
            wanted.insert(item.medicine_id.as_str(), total);

            if medicine.prescription_required {
                let listed = item
                    .prescription_id
                    .as_ref()
                    .is_some_and(|id| input.prescription_ids.contains(id));
                if !listed {
                    return Err(Error::validation(
                        "prescriptionId",
                        format!("{} requires a prescription listed on the order", medicine.name),
                    ));
                }
            }

            items.push(OrderItem::new(
                medicine.id,
                medicine.name,
                medicine.price,
                item.quantity,
                item.prescription_id.clone(),
            ));
        }

        Ok(items)
    }

    async fn settle(&self, user_id: &str, items: &[OrderItem], prescription_ids: &[String]) {
        for item in items {
            if let Err(err) =
                withdraw_stock(self.store.as_ref(), &item.medicine_id, item.quantity).await
            {
                tracing::warn!(medicine_id = %item.medicine_id, "Stock not withdrawn: {}", err);
            }
        }

        for prescription_id in prescription_ids {
            if let Err(err) = self.prescriptions.mark_used(prescription_id).await {
                tracing::warn!(
                    prescription_id = %prescription_id,
                    "Prescription not marked used: {}",
                    err
                );
            }
        }

        if let Err(err) = self.carts.clear(user_id).await {
            tracing::warn!(user_id, "Cart not cleared: {}", err);
        }
    }

    /// The order document after a committed command. A missing document here
    /// means the projection failed, not that the order does not exist.
    async fn projected(&self, id: &str) -> Result<Order, Error> {
        match self.get(id).await {
            Err(Error::NotFound { .. }) => Err(Error::store(format!(
                "order {id} was recorded but its view is not available"
            ))),
            result => result,
        }
    }

    pub async fn get(&self, id: &str) -> Result<Order, Error> {
        self.store
            .get(ORDERS, id)
            .await?
            .map(from_document)
            .transpose()?
            .ok_or_else(|| Error::not_found(AGGREGATE_TYPE))
    }

    /// Newest order first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Order>, Error> {
        let mut orders = self
            .store
            .find(ORDERS, &Filter::eq("userId", user_id), MAX_LIST_RESULTS)
            .await?
            .into_iter()
            .map(from_document)
            .collect::<Result<Vec<Order>, _>>()?;

        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(orders)
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, Error> {
        let command = match status {
            OrderStatus::Cancelled => Command::CancelOrder,
            status => Command::AdvanceStatus { status },
        };

        self.commands.dispatch(id, command).await?;
        tracing::info!(order_id = id, %status, "Order status changed");

        self.projected(id).await
    }
}
