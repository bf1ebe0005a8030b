use productos_api::{
    config::AppConfig,
    db::{create_orm_conn, create_schema},
    models::Producto,
    repository::{ProductoRepository, SeaOrmProductoRepository},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure the schema exists.
    create_schema(&orm).await?;

    let repository = SeaOrmProductoRepository::new(orm);
    let inserted = seed_productos(&repository).await?;

    println!("Seed completed. Productos inserted: {inserted}");
    Ok(())
}

async fn seed_productos(repository: &SeaOrmProductoRepository) -> anyhow::Result<usize> {
    if !repository.find_all().await?.is_empty() {
        return Ok(0);
    }

    let productos = [
        Producto::new("Teclado mecánico", 59.99, 25),
        Producto::new("Ratón inalámbrico", 19.5, 40),
        Producto::new("Monitor 27 pulgadas", 229.0, 8),
        Producto::new("Auriculares", 34.9, 0),
        Producto::new("Webcam HD", 45.0, 12),
    ];

    let count = productos.len();
    for producto in productos {
        repository.save(producto).await?;
    }

    Ok(count)
}
