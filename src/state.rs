use std::sync::Arc;

use crate::{repository::ProductoRepository, storage::StorageService};

#[derive(Clone)]
pub struct AppState {
    pub productos: Arc<dyn ProductoRepository>,
    pub storage: Arc<dyn StorageService>,
}

impl AppState {
    pub fn new(productos: Arc<dyn ProductoRepository>, storage: Arc<dyn StorageService>) -> Self {
        Self { productos, storage }
    }
}
