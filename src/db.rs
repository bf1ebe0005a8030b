use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entity::Productos;

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Creates the tables derived from the entities when they are missing.
/// The DDL is built for whichever backend `conn` points at.
pub async fn create_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut productos = schema.create_table_from_entity(Productos);
    productos.if_not_exists();
    conn.execute(backend.build(&productos)).await?;

    Ok(())
}
