use productos_api::{
    config::AppConfig,
    db::{create_orm_conn, create_schema},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    create_schema(&orm).await?;
    println!("Schema ready");
    Ok(())
}
