use crate::{
    dto::productos::{
        CreateProductoDto, ListProductoPageDto, PageQuery, ProductoDto, UpdateProductoRequest,
    },
    error::{AppError, AppResult},
    mapper,
    models::Producto,
    repository::{PageRequest, ProductoFilter, ProductoQuery},
    state::AppState,
};

const SELECCION: &str = "Selección de Datos";
const SELECCION_MSG: &str = "Parámetros de consulta incorrectos";
const INSERTAR_MSG: &str = "Error al insertar el producto. Campos incorrectos";

/// A file part received alongside a product.
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

pub async fn list_productos(
    state: &AppState,
    limit: Option<&str>,
    nombre: Option<&str>,
) -> AppResult<Vec<ProductoDto>> {
    let limit = limit
        .map(|raw| parse_limit(raw).ok_or_else(|| AppError::bad_request(SELECCION, SELECCION_MSG)))
        .transpose()?;

    let mut productos = match nombre {
        Some(nombre) => state.productos.find_by_nombre_contains(nombre).await,
        None => state.productos.find_all().await,
    }
    .map_err(|err| err.within(SELECCION, SELECCION_MSG))?;

    if productos.is_empty() {
        return Err(AppError::ProductosNotFound);
    }

    if let Some(limit) = limit {
        productos.truncate(limit);
    }

    tracing::debug!(count = productos.len(), "productos listed");
    Ok(mapper::to_dto_list(productos))
}

/// A 32-bit, non-negative integer with no surrounding whitespace.
fn parse_limit(raw: &str) -> Option<usize> {
    let limit = raw.parse::<i32>().ok()?;
    usize::try_from(limit).ok()
}

pub async fn get_producto(state: &AppState, id: i64) -> AppResult<ProductoDto> {
    let producto = find_existing(state, id).await?;
    Ok(mapper::to_dto(producto))
}

pub async fn create_producto(state: &AppState, dto: CreateProductoDto) -> AppResult<ProductoDto> {
    let producto = mapper::from_dto(dto)?;
    let created = insert(state, producto).await?;
    Ok(mapper::to_dto(created))
}

/// Creates a product and, when `file` carries bytes, stores it as the
/// product image. Field checks run before anything is written.
pub async fn create_producto_with_image(
    state: &AppState,
    dto: CreateProductoDto,
    file: Option<UploadedFile>,
) -> AppResult<ProductoDto> {
    let mut producto = mapper::from_dto(dto)?;

    let mut stored = None;
    if let Some(file) = file.filter(|f| !f.is_empty()) {
        let id = state
            .storage
            .store(file.file_name.as_deref(), &file.content)
            .await
            .map_err(|err| AppError::Internal(err).within("Insertar", INSERTAR_MSG))?;
        producto.imagen = Some(state.storage.url(&id));
        stored = Some(id);
    }

    match insert(state, producto).await {
        Ok(created) => Ok(mapper::to_dto(created)),
        Err(err) => {
            if let Some(id) = stored {
                if let Err(cleanup) = state.storage.delete(&id).await {
                    tracing::warn!(id = %id, error = %cleanup, "orphaned image left in storage");
                }
            }
            Err(err)
        }
    }
}

async fn insert(state: &AppState, producto: Producto) -> AppResult<Producto> {
    let created = state
        .productos
        .save(producto)
        .await
        .map_err(|err| err.within("Insertar", INSERTAR_MSG))?;
    tracing::info!(id = ?created.id, nombre = %created.nombre, "producto created");
    Ok(created)
}

pub async fn update_producto(
    state: &AppState,
    id: i64,
    payload: UpdateProductoRequest,
) -> AppResult<ProductoDto> {
    const MSG: &str = "Error al actualizar el producto. Campos incorrectos";

    let mut producto = find_existing(state, id)
        .await
        .map_err(|err| err.within("Actualizar", MSG))?;
    mapper::update_data(&payload)?.apply_to(&mut producto);

    let updated = state
        .productos
        .save(producto)
        .await
        .map_err(|err| err.within("Actualizar", MSG))?;
    tracing::info!(id, "producto updated");
    Ok(mapper::to_dto(updated))
}

/// Deletes the product and returns what was removed.
pub async fn delete_producto(state: &AppState, id: i64) -> AppResult<ProductoDto> {
    const MSG: &str = "Error al borrar el producto";

    let producto = find_existing(state, id)
        .await
        .map_err(|err| err.within("Eliminar", MSG))?;
    state
        .productos
        .delete(&producto)
        .await
        .map_err(|err| err.within("Eliminar", MSG))?;
    tracing::info!(id, "producto deleted");
    Ok(mapper::to_dto(producto))
}

pub async fn list_productos_page(
    state: &AppState,
    query: PageQuery,
) -> AppResult<ListProductoPageDto> {
    let page = PageRequest::of(query.page.unwrap_or(0), query.size.unwrap_or(10))?;
    let query = ProductoQuery {
        filter: ProductoFilter {
            nombre: query.nombre,
            precio_min: query.precio,
        },
        page,
    };

    let result = state
        .productos
        .find_page(&query)
        .await
        .map_err(|err| err.within(SELECCION, SELECCION_MSG))?;

    let total_pages = result.total_pages();
    let result = result.map(mapper::to_dto);
    Ok(ListProductoPageDto {
        data: result.content,
        total_pages,
        total_elements: result.total_elements,
        current_page: result.number,
    })
}

async fn find_existing(state: &AppState, id: i64) -> AppResult<Producto> {
    state
        .productos
        .find_by_id(id)
        .await?
        .ok_or(AppError::ProductoNotFound(id))
}
