use std::sync::Arc;

use domain::{
    cart::CartService,
    hospitals::HospitalCatalog,
    medicines::MedicineCatalog,
    orders::{OrderCommandBus, OrderService},
    prescriptions::PrescriptionService,
    store::DocumentStore,
};

#[derive(Clone)]
pub struct AppState {
    pub hospitals: Arc<HospitalCatalog>,
    pub medicines: Arc<MedicineCatalog>,
    pub prescriptions: Arc<PrescriptionService>,
    pub carts: Arc<CartService>,
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, commands: Arc<dyn OrderCommandBus>) -> Self {
        let hospitals = Arc::new(HospitalCatalog::new(store.clone()));
        let medicines = Arc::new(MedicineCatalog::new(store.clone()));
        let prescriptions = Arc::new(PrescriptionService::new(store.clone()));
        let carts = Arc::new(CartService::new(
            store.clone(),
            medicines.clone(),
            prescriptions.clone(),
        ));
        let orders = Arc::new(OrderService::new(
            store,
            commands,
            medicines.clone(),
            carts.clone(),
            prescriptions.clone(),
        ));

        Self {
            hospitals,
            medicines,
            prescriptions,
            carts,
            orders,
        }
    }
}
