mod common;

use botanical_boutique_api::{
    dto::products::NewProduct,
    entity::Products,
    error::AppError,
    routes::params::ProductQuery,
    services::product_service,
    state::AppState,
    validation::parse_body,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{Value, json};

fn product(title: &str, category: &str, price: f64) -> NewProduct {
    parse_body::<NewProduct>(json!({
        "title": title,
        "price": price,
        "category": category
    }))
    .expect("valid product")
}

async fn seed(state: &AppState, products: Vec<NewProduct>) -> anyhow::Result<()> {
    for p in products {
        product_service::create_product(state, p).await?;
    }
    Ok(())
}

fn prices(items: &[botanical_boutique_api::models::Product]) -> Vec<f64> {
    items.iter().map(|p| p.price).collect()
}

#[tokio::test]
async fn created_product_round_trips_with_defaults() -> anyhow::Result<()> {
    let state = common::memory_state().await?;
    let payload = json!({
        "title": "Blush Peony Bouquet",
        "description": "Soft pink peonies",
        "price": 68.5,
        "category": "bouquet",
        "color": "pink",
        "images": ["https://cdn.example/peony-1.jpg", "https://cdn.example/peony-2.jpg"]
    });

    let created =
        product_service::create_product(&state, parse_body::<NewProduct>(payload)?).await?;
    assert!(!created.id.is_empty());

    let fetched = product_service::get_product(&state, &created.id).await?;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Blush Peony Bouquet");
    assert_eq!(fetched.description.as_deref(), Some("Soft pink peonies"));
    assert_eq!(fetched.price, 68.5);
    assert_eq!(fetched.category, "bouquet");
    assert_eq!(fetched.color.as_deref(), Some("pink"));
    assert_eq!(fetched.occasion, None);
    assert!(fetched.in_stock);
    assert_eq!(
        fetched.images,
        vec!["https://cdn.example/peony-1.jpg", "https://cdn.example/peony-2.jpg"]
    );
    assert_eq!(fetched.care, None);
    assert!(fetched.tags.is_empty());

    let body = serde_json::to_value(&fetched)?;
    let keys: Vec<&String> = body.as_object().map(|o| o.keys().collect()).unwrap_or_default();
    assert!(!keys.iter().any(|k| k.as_str() == "created_at"), "{keys:?}");
    Ok(())
}

#[tokio::test]
async fn negative_price_is_never_persisted() -> anyhow::Result<()> {
    let state = common::memory_state().await?;
    let result = parse_body::<NewProduct>(json!({
        "title": "Broken",
        "price": -0.01,
        "category": "bouquet"
    }));
    assert!(result.is_err());

    let orm = state.orm()?;
    assert_eq!(Products::find().count(orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn price_range_is_inclusive() -> anyhow::Result<()> {
    let state = common::memory_state().await?;
    seed(
        &state,
        vec![
            product("a", "bouquet", 5.0),
            product("b", "bouquet", 10.0),
            product("c", "bouquet", 15.0),
            product("d", "bouquet", 20.0),
            product("e", "bouquet", 25.0),
        ],
    )
    .await?;

    let both = product_service::list_products(
        &state,
        ProductQuery {
            min_price: Some(10.0),
            max_price: Some(20.0),
            ..ProductQuery::default()
        },
    )
    .await?;
    let mut got = prices(&both);
    got.sort_by(f64::total_cmp);
    assert_eq!(got, vec![10.0, 15.0, 20.0]);

    let lower_only = product_service::list_products(
        &state,
        ProductQuery {
            min_price: Some(10.0),
            ..ProductQuery::default()
        },
    )
    .await?;
    assert!(prices(&lower_only).iter().all(|p| *p >= 10.0));
    assert_eq!(lower_only.len(), 4);
    Ok(())
}

#[tokio::test]
async fn category_filter_is_exact_and_case_sensitive() -> anyhow::Result<()> {
    let state = common::memory_state().await?;
    seed(
        &state,
        vec![
            product("Peony", "bouquet", 40.0),
            product("Rose", "Bouquet", 40.0),
            product("Mixed", "bouquets", 40.0),
            product("Fern", "plant", 30.0),
        ],
    )
    .await?;

    let items = product_service::list_products(
        &state,
        ProductQuery {
            category: Some("bouquet".into()),
            ..ProductQuery::default()
        },
    )
    .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Peony");
    Ok(())
}

#[tokio::test]
async fn limit_caps_result_count() -> anyhow::Result<()> {
    let state = common::memory_state().await?;
    seed(
        &state,
        (1..=5)
            .map(|i| product(&format!("p{i}"), "plant", f64::from(i)))
            .collect(),
    )
    .await?;

    let items = product_service::list_products(
        &state,
        ProductQuery {
            limit: Some(2),
            ..ProductQuery::default()
        },
    )
    .await?;
    assert_eq!(items.len(), 2);

    let all = product_service::list_products(&state, ProductQuery::default()).await?;
    assert_eq!(all.len(), 5);
    Ok(())
}

#[tokio::test]
async fn listing_follows_insertion_order() -> anyhow::Result<()> {
    let state = common::memory_state().await?;
    let titles: Vec<String> = (1..=8).map(|i| format!("p{i}")).collect();
    // Prices run against insertion order so neither price nor title order can pass for it.
    seed(
        &state,
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| product(t, "plant", 100.0 - i as f64))
            .collect(),
    )
    .await?;

    let all = product_service::list_products(&state, ProductQuery::default()).await?;
    let got: Vec<&str> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(got, titles.iter().map(String::as_str).collect::<Vec<_>>());

    let first_three = product_service::list_products(
        &state,
        ProductQuery {
            limit: Some(3),
            ..ProductQuery::default()
        },
    )
    .await?;
    let got: Vec<&str> = first_three.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(got, vec!["p1", "p2", "p3"]);

    let filtered = product_service::list_products(
        &state,
        ProductQuery {
            max_price: Some(96.0),
            limit: Some(2),
            ..ProductQuery::default()
        },
    )
    .await?;
    let got: Vec<&str> = filtered.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(got, vec!["p5", "p6"]);
    Ok(())
}

#[tokio::test]
async fn lookup_errors_are_client_errors() -> anyhow::Result<()> {
    let state = common::memory_state().await?;

    let invalid = product_service::get_product(&state, "not-an-id").await;
    assert!(matches!(invalid, Err(AppError::InvalidIdentifier(_))));

    let missing =
        product_service::get_product(&state, "3f2b8a4e-5c1d-4e7a-9b6f-0a1b2c3d4e5f").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn storage_calls_fail_uniformly_when_unconfigured() {
    let state = common::degraded_state();

    let listed = product_service::list_products(&state, ProductQuery::default()).await;
    assert!(matches!(listed, Err(AppError::StorageUnavailable)));

    let created = product_service::create_product(&state, product("x", "plant", 1.0)).await;
    assert!(matches!(created, Err(AppError::StorageUnavailable)));

    let fetched =
        product_service::get_product(&state, "3f2b8a4e-5c1d-4e7a-9b6f-0a1b2c3d4e5f").await;
    assert!(matches!(fetched, Err(AppError::StorageUnavailable)));
}

#[tokio::test]
async fn invalid_identifier_wins_over_missing_storage() {
    let state = common::degraded_state();
    let result = product_service::get_product(&state, "not-an-id").await;
    assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));
}

#[test]
fn listing_serializes_public_id() {
    let product = botanical_boutique_api::models::Product {
        id: "abc".into(),
        title: "Fern".into(),
        description: None,
        price: 12.0,
        category: "plant".into(),
        color: None,
        occasion: None,
        in_stock: true,
        images: vec![],
        care: None,
        tags: vec![],
    };
    let body: Value = serde_json::to_value(product).unwrap();
    assert_eq!(body["id"], "abc");
    assert!(body.get("_id").is_none());
}
