use axum::{
    Json, Router,
    extract::{Multipart, State, multipart::MultipartRejection},
    routing::{get, post},
};

use crate::{
    dto::productos::{
        CreateProductoDto, CreateProductoForm, ListProductoPageDto, ListQuery, PageQuery,
        ProductoDto, UpdateProductoRequest,
    },
    error::{AppError, AppResult, ErrorData},
    middleware::extract::{AppJson, AppPath, AppQuery},
    response::ApiResponse,
    services::producto_service::{self, UploadedFile},
    state::AppState,
};

/// Product routes mounted under `base`, e.g. `/rest/auth/productos`.
/// The collection answers both with and without the trailing slash.
pub fn router(base: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{base}/test"), get(welcome))
        .route(base, get(list_productos).post(create_producto))
        .route(&format!("{base}/"), get(list_productos).post(create_producto))
        .route(&format!("{base}/all"), get(list_productos_page))
        .route(&format!("{base}/create"), post(create_producto_with_image))
        .route(
            &format!("{base}/{{id}}"),
            get(get_producto).put(update_producto).delete(delete_producto),
        )
}

#[utoipa::path(
    get,
    path = "/rest/auth/productos/test",
    responses(
        (status = 200, description = "Mensaje de bienvenida", body = String)
    ),
    tag = "Productos"
)]
pub async fn welcome() -> &'static str {
    "Hola REST 2DAM. Todo OK"
}

#[utoipa::path(
    get,
    path = "/rest/auth/productos/",
    params(
        ("limit" = Option<String>, Query, description = "Maximum number of items returned"),
        ("nombre" = Option<String>, Query, description = "Case-insensitive name filter"),
    ),
    responses(
        (status = 200, description = "List productos", body = Vec<ProductoDto>),
        (status = 404, description = "No productos found", body = ApiResponse<ErrorData>),
        (status = 400, description = "Invalid query parameters", body = ApiResponse<ErrorData>),
    ),
    tag = "Productos"
)]
pub async fn list_productos(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> AppResult<Json<Vec<ProductoDto>>> {
    let data =
        producto_service::list_productos(&state, query.limit.as_deref(), query.nombre.as_deref())
            .await?;
    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/rest/auth/productos/{id}",
    params(
        ("id" = i64, Path, description = "Producto ID")
    ),
    responses(
        (status = 200, description = "Get producto", body = ProductoDto),
        (status = 404, description = "Producto not found", body = ApiResponse<ErrorData>),
    ),
    tag = "Productos"
)]
pub async fn get_producto(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<ProductoDto>> {
    let data = producto_service::get_producto(&state, id).await?;
    Ok(Json(data))
}

#[utoipa::path(
    post,
    path = "/rest/auth/productos/",
    request_body = CreateProductoDto,
    responses(
        (status = 200, description = "Create producto", body = ProductoDto),
        (status = 400, description = "Invalid producto", body = ApiResponse<ErrorData>),
    ),
    tag = "Productos"
)]
pub async fn create_producto(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductoDto>,
) -> AppResult<Json<ProductoDto>> {
    let data = producto_service::create_producto(&state, payload).await?;
    Ok(Json(data))
}

#[utoipa::path(
    put,
    path = "/rest/auth/productos/{id}",
    params(
        ("id" = i64, Path, description = "Producto ID")
    ),
    request_body = UpdateProductoRequest,
    responses(
        (status = 200, description = "Updated producto", body = ProductoDto),
        (status = 404, description = "Producto not found", body = ApiResponse<ErrorData>),
        (status = 400, description = "Invalid producto", body = ApiResponse<ErrorData>),
    ),
    tag = "Productos"
)]
pub async fn update_producto(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateProductoRequest>,
) -> AppResult<Json<ProductoDto>> {
    let data = producto_service::update_producto(&state, id, payload).await?;
    Ok(Json(data))
}

#[utoipa::path(
    delete,
    path = "/rest/auth/productos/{id}",
    params(
        ("id" = i64, Path, description = "Producto ID")
    ),
    responses(
        (status = 200, description = "Deleted producto", body = ProductoDto),
        (status = 404, description = "Producto not found", body = ApiResponse<ErrorData>),
        (status = 400, description = "Delete failed", body = ApiResponse<ErrorData>),
    ),
    tag = "Productos"
)]
pub async fn delete_producto(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<ProductoDto>> {
    let data = producto_service::delete_producto(&state, id).await?;
    Ok(Json(data))
}

#[utoipa::path(
    post,
    path = "/rest/auth/productos/create",
    request_body(content = CreateProductoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Create producto with image", body = ProductoDto),
        (status = 400, description = "Invalid producto", body = ApiResponse<ErrorData>),
    ),
    tag = "Productos"
)]
pub async fn create_producto_with_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ProductoDto>> {
    let mut multipart =
        multipart.map_err(|rejection| AppError::bad_request("Insertar", rejection.body_text()))?;

    let mut producto: Option<CreateProductoDto> = None;
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request("Insertar", err.body_text()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("producto") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::bad_request("Insertar", err.body_text()))?;
                let dto = serde_json::from_slice(&bytes).map_err(|err| {
                    AppError::bad_request("Insertar", format!("Producto incorrecto: {err}"))
                })?;
                producto = Some(dto);
            }
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::bad_request("Insertar", err.body_text()))?;
                file = Some(UploadedFile {
                    file_name,
                    content: content.to_vec(),
                });
            }
            _ => {}
        }
    }

    let producto = producto
        .ok_or_else(|| AppError::bad_request("Insertar", "Falta la parte 'producto'"))?;
    let data = producto_service::create_producto_with_image(&state, producto, file).await?;
    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/rest/auth/productos/all",
    params(
        ("nombre" = Option<String>, Query, description = "Case-insensitive name filter"),
        ("precio" = Option<f64>, Query, description = "Minimum price, inclusive"),
        ("page" = Option<i64>, Query, description = "Page number, default 0"),
        ("size" = Option<i64>, Query, description = "Items per page, default 10"),
    ),
    responses(
        (status = 200, description = "Paged productos", body = ListProductoPageDto),
        (status = 400, description = "Invalid query parameters", body = ApiResponse<ErrorData>),
    ),
    tag = "Productos"
)]
pub async fn list_productos_page(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PageQuery>,
) -> AppResult<Json<ListProductoPageDto>> {
    let data = producto_service::list_productos_page(&state, query).await?;
    Ok(Json(data))
}
