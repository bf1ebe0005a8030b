use serde::{Deserialize, Serialize};

/// A product as the service sees it. `id` stays `None` until the store
/// assigns one on first save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id: Option<i64>,
    pub nombre: String,
    pub precio: f64,
    pub stock: i32,
    pub imagen: Option<String>,
}

impl Producto {
    pub fn new(nombre: impl Into<String>, precio: f64, stock: i32) -> Self {
        Self {
            id: None,
            nombre: nombre.into(),
            precio,
            stock,
            imagen: None,
        }
    }
}
