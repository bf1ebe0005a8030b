use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbBackend, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    entity::productos::{ActiveModel, Column, Entity as Productos, Model as ProductoModel},
    error::{AppError, AppResult},
    models::Producto,
};

use super::{Page, ProductoFilter, ProductoQuery, ProductoRepository};

/// `ProductoRepository` backed by any database sea-orm can reach.
#[derive(Debug, Clone)]
pub struct SeaOrmProductoRepository {
    conn: DatabaseConnection,
}

impl SeaOrmProductoRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn backend(&self) -> DbBackend {
        self.conn.get_database_backend()
    }
}

#[async_trait]
impl ProductoRepository for SeaOrmProductoRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Producto>> {
        let model = Productos::find_by_id(id).one(&self.conn).await?;
        Ok(model.map(producto_from_entity))
    }

    async fn find_all(&self) -> AppResult<Vec<Producto>> {
        let items = Productos::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(producto_from_entity)
            .collect();
        Ok(items)
    }

    async fn find_by_nombre_contains(&self, nombre: &str) -> AppResult<Vec<Producto>> {
        let items = Productos::find()
            .filter(nombre_contains(self.backend(), nombre))
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(producto_from_entity)
            .collect();
        Ok(items)
    }

    async fn find_page(&self, query: &ProductoQuery) -> AppResult<Page<Producto>> {
        let finder = Productos::find()
            .filter(condition(self.backend(), &query.filter))
            .order_by_asc(Column::Nombre)
            .order_by_asc(Column::Id);

        let total = finder.clone().count(&self.conn).await?;

        let content = finder
            .limit(query.page.size)
            .offset(query.page.offset())
            .all(&self.conn)
            .await?
            .into_iter()
            .map(producto_from_entity)
            .collect();

        Ok(Page {
            content,
            number: query.page.page,
            size: query.page.size,
            total_elements: total,
        })
    }

    async fn save(&self, producto: Producto) -> AppResult<Producto> {
        let model = match producto.id {
            None => active_model(&producto, NotSet).insert(&self.conn).await?,
            Some(id) => {
                match active_model(&producto, Set(id)).update(&self.conn).await {
                    Ok(model) => model,
                    Err(DbErr::RecordNotUpdated) => return Err(AppError::ProductoNotFound(id)),
                    Err(err) => return Err(err.into()),
                }
            }
        };
        tracing::debug!(id = model.id, "producto saved");
        Ok(producto_from_entity(model))
    }

    async fn delete(&self, producto: &Producto) -> AppResult<()> {
        if let Some(id) = producto.id {
            let result = Productos::delete_by_id(id).exec(&self.conn).await?;
            tracing::debug!(id, rows = result.rows_affected, "producto deleted");
        }
        Ok(())
    }
}

fn condition(backend: DbBackend, filter: &ProductoFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(nombre) = filter.nombre.as_deref() {
        condition = condition.add(nombre_contains(backend, nombre));
    }

    if let Some(precio_min) = filter.precio_min {
        condition = condition.add(Column::Precio.gte(precio_min));
    }

    condition
}

/// Case-insensitive substring match on `nombre`. Postgres folds both sides
/// with ILIKE. SQLite's `lower()` only folds ASCII, so the needle gets the
/// same ASCII-only folding and both sides stay comparable.
fn nombre_contains(backend: DbBackend, nombre: &str) -> SimpleExpr {
    match backend {
        DbBackend::Postgres => {
            let pattern = format!("%{}%", escape_like(nombre));
            Expr::col(Column::Nombre).ilike(LikeExpr::new(pattern).escape('\\'))
        }
        _ => {
            let pattern = format!("%{}%", escape_like(&nombre.to_ascii_lowercase()));
            Expr::expr(Func::lower(Expr::col(Column::Nombre)))
                .like(LikeExpr::new(pattern).escape('\\'))
        }
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn active_model(producto: &Producto, id: ActiveValue<i64>) -> ActiveModel {
    ActiveModel {
        id,
        nombre: Set(producto.nombre.clone()),
        precio: Set(producto.precio),
        stock: Set(producto.stock),
        imagen: Set(producto.imagen.clone()),
    }
}

fn producto_from_entity(model: ProductoModel) -> Producto {
    Producto {
        id: Some(model.id),
        nombre: model.nombre,
        precio: model.precio,
        stock: model.stock,
        imagen: model.imagen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("widget"), "widget");
    }
}
