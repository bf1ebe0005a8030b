//! Conversions between the wire DTOs and the domain `Producto`, plus the
//! field checks every write goes through.

use crate::{
    dto::productos::{CreateProductoDto, ProductoDto, UpdateProductoRequest},
    error::{AppError, AppResult},
    models::Producto,
};

/// Validated writable fields of a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductoData {
    pub nombre: String,
    pub precio: f64,
    pub stock: i32,
}

/// Checks nombre, precio and stock in that order. The first failing rule
/// is reported.
pub fn check_producto_data(
    nombre: Option<&str>,
    precio: Option<f64>,
    stock: Option<i32>,
) -> AppResult<ProductoData> {
    let nombre = match nombre {
        Some(nombre) if !nombre.is_empty() => nombre,
        _ => return Err(invalid("Nombre", "El nombre es obligatorio")),
    };
    let precio = match precio {
        Some(precio) if precio < 0.0 => {
            return Err(invalid("Precio", "El precio debe ser mayor que 0"));
        }
        Some(precio) => precio,
        None => return Err(invalid("Precio", "El precio es obligatorio")),
    };
    let stock = match stock {
        Some(stock) if stock < 0 => {
            return Err(invalid("Stock", "El stock debe ser mayor o igual que 0"));
        }
        Some(stock) => stock,
        None => return Err(invalid("Stock", "El stock es obligatorio")),
    };

    Ok(ProductoData {
        nombre: nombre.to_string(),
        precio,
        stock,
    })
}

fn invalid(field: &'static str, message: &str) -> AppError {
    AppError::ProductoBadRequest {
        field,
        message: message.to_string(),
    }
}

pub fn from_dto(dto: CreateProductoDto) -> AppResult<Producto> {
    let data = check_producto_data(dto.nombre.as_deref(), dto.precio, dto.stock)?;
    Ok(Producto {
        id: None,
        nombre: data.nombre,
        precio: data.precio,
        stock: data.stock,
        imagen: dto.imagen.filter(|imagen| !imagen.is_empty()),
    })
}

pub fn update_data(dto: &UpdateProductoRequest) -> AppResult<ProductoData> {
    check_producto_data(dto.nombre.as_deref(), dto.precio, dto.stock)
}

impl ProductoData {
    /// Copies the mutable fields onto an existing product. `id` and
    /// `imagen` are left untouched.
    pub fn apply_to(self, producto: &mut Producto) {
        producto.nombre = self.nombre;
        producto.precio = self.precio;
        producto.stock = self.stock;
    }
}

pub fn to_dto(producto: Producto) -> ProductoDto {
    ProductoDto {
        id: producto.id,
        nombre: producto.nombre,
        precio: producto.precio,
        stock: producto.stock,
        imagen: producto.imagen,
    }
}

pub fn to_dto_list(productos: Vec<Producto>) -> Vec<ProductoDto> {
    productos.into_iter().map(to_dto).collect()
}
