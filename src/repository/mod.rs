use async_trait::async_trait;

use crate::{
    error::{AppError, AppResult},
    models::Producto,
};

mod orm;

pub use orm::SeaOrmProductoRepository;

/// Optional predicates of a product query. Both set means both must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductoFilter {
    /// Case-insensitive substring of `nombre`.
    pub nombre: Option<String>,
    /// Inclusive lower bound on `precio`.
    pub precio_min: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn of(page: i64, size: i64) -> AppResult<Self> {
        if page < 0 || size < 1 || page.checked_mul(size).is_none() {
            return Err(AppError::bad_request(
                "Selección de Datos",
                "Parámetros de consulta incorrectos",
            ));
        }
        Ok(Self {
            page: page as u64,
            size: size as u64,
        })
    }

    pub fn offset(&self) -> u64 {
        self.page * self.size
    }
}

/// A filtered page of products, ordered by `nombre` ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductoQuery {
    pub filter: ProductoFilter,
    pub page: PageRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.size)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

/// Persistence of the product collection.
///
/// The store accepts whatever it is handed; field checks happen before
/// a product reaches it.
#[async_trait]
pub trait ProductoRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Producto>>;

    /// All products in insertion order.
    async fn find_all(&self) -> AppResult<Vec<Producto>>;

    async fn find_by_nombre_contains(&self, nombre: &str) -> AppResult<Vec<Producto>>;

    async fn find_page(&self, query: &ProductoQuery) -> AppResult<Page<Producto>>;

    /// Inserts when `id` is unset, otherwise overwrites the row with that id.
    /// An id with no stored row is `ProductoNotFound`; ids are only ever
    /// assigned by the store.
    async fn save(&self, producto: Producto) -> AppResult<Producto>;

    async fn delete(&self, producto: &Producto) -> AppResult<()>;
}
