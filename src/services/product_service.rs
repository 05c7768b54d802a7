use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use crate::{
    dto::products::NewProduct,
    entity::{
        RecordKind, StringList,
        products::{ActiveModel, Column, Entity as Products},
    },
    error::{AppError, AppResult},
    filter::ProductFilter,
    models::Product,
    response::Created,
    routes::params::ProductQuery,
    state::AppState,
};

/// Products matching the query, oldest first, capped at the query's limit.
pub async fn list_products(state: &AppState, query: ProductQuery) -> AppResult<Vec<Product>> {
    let filter = ProductFilter::from_query(&query)?;
    let orm = state.orm()?;

    let items = Products::find()
        .filter(filter.to_condition())
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .limit(query.limit())
        .all(orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    Ok(items)
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<Product> {
    let id = Uuid::parse_str(id).map_err(|_| AppError::InvalidIdentifier("product"))?;
    let orm = state.orm()?;

    Products::find_by_id(id)
        .one(orm)
        .await?
        .map(Product::from)
        .ok_or(AppError::NotFound("Product"))
}

pub async fn create_product(state: &AppState, payload: NewProduct) -> AppResult<Created> {
    let orm = state.orm()?;
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title),
        description: Set(payload.description),
        price: Set(payload.price),
        category: Set(payload.category),
        color: Set(payload.color),
        occasion: Set(payload.occasion),
        in_stock: Set(payload.in_stock),
        images: Set(StringList(payload.images)),
        care: Set(payload.care),
        tags: Set(StringList(payload.tags)),
        created_at: Set(Utc::now().into()),
    };
    let product = active.insert(orm).await?;

    tracing::info!(
        collection = RecordKind::Product.table_name(),
        id = %product.id,
        "record created"
    );

    Ok(Created {
        id: product.id.to_string(),
    })
}
