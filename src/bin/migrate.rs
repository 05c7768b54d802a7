use botanical_boutique_api::{
    config::AppConfig,
    db::{create_orm_conn, ensure_schema},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let url = config
        .connection_url()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL and DATABASE_NAME must both be set"))?;
    let orm = create_orm_conn(&url).await?;
    ensure_schema(&orm).await?;
    println!("Tables ready");
    Ok(())
}
