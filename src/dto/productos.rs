use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductoDto {
    pub id: Option<i64>,
    pub nombre: String,
    pub precio: f64,
    pub stock: i32,
    pub imagen: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProductoDto {
    pub nombre: Option<String>,
    pub precio: Option<f64>,
    pub stock: Option<i32>,
    pub imagen: Option<String>,
}

/// Body of `PUT /{id}`. Carries the full product shape, but only
/// `nombre`, `precio` and `stock` are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductoRequest {
    pub id: Option<i64>,
    pub nombre: Option<String>,
    pub precio: Option<f64>,
    pub stock: Option<i32>,
    pub imagen: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProductoPageDto {
    pub data: Vec<ProductoDto>,
    pub total_pages: u64,
    pub total_elements: u64,
    pub current_page: u64,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub nombre: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub nombre: Option<String>,
    pub precio: Option<f64>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Multipart body of `POST /create`, for the API docs only.
#[derive(ToSchema)]
pub struct CreateProductoForm {
    pub producto: CreateProductoDto,
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
