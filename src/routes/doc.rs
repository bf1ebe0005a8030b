use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::productos::{
        CreateProductoDto, CreateProductoForm, ListProductoPageDto, ProductoDto,
        UpdateProductoRequest,
    },
    error::ErrorData,
    response::ApiResponse,
    routes::{health, productos},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        productos::welcome,
        productos::list_productos,
        productos::get_producto,
        productos::create_producto,
        productos::update_producto,
        productos::delete_producto,
        productos::create_producto_with_image,
        productos::list_productos_page
    ),
    components(
        schemas(
            ProductoDto,
            CreateProductoDto,
            UpdateProductoRequest,
            ListProductoPageDto,
            CreateProductoForm,
            ErrorData,
            health::HealthData,
            ApiResponse<ErrorData>,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Productos", description = "Producto endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
