use botanical_boutique_api::{
    config::AppConfig,
    db::{create_orm_conn, ensure_schema},
    dto::products::NewProduct,
    services::product_service,
    state::AppState,
    validation::parse_body,
};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let url = config
        .connection_url()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL and DATABASE_NAME must both be set"))?;

    let orm = create_orm_conn(&url).await?;
    // Ensure tables exist.
    ensure_schema(&orm).await?;
    let state = AppState::new(config, Some(orm));

    seed_products(&state).await?;
    Ok(())
}

async fn seed_products(state: &AppState) -> anyhow::Result<()> {
    let products = vec![
        json!({
            "title": "Blush Peony Bouquet",
            "description": "Soft pink peonies with eucalyptus",
            "price": 68.0,
            "category": "bouquet",
            "color": "pink",
            "occasion": "wedding",
            "tags": ["peony", "seasonal"]
        }),
        json!({
            "title": "White Lily Tribute",
            "price": 54.0,
            "category": "bouquet",
            "color": "white",
            "occasion": "sympathy",
            "care": "Change the water every two days"
        }),
        json!({
            "title": "Fiddle Leaf Fig",
            "price": 89.0,
            "category": "plant",
            "color": "green",
            "care": "Bright indirect light, water weekly"
        }),
        json!({
            "title": "Autumn Wreath",
            "price": 45.0,
            "category": "seasonal",
            "color": "orange",
            "in_stock": false
        }),
    ];

    for payload in products {
        let product = parse_body::<NewProduct>(payload)?;
        let title = product.title.clone();
        let created = product_service::create_product(state, product).await?;
        println!("Seeded {title} ({})", created.id);
    }

    Ok(())
}
