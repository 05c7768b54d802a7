use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    routing::get,
};

use crate::{
    dto::products::NewProduct,
    error::AppResult,
    extract::ValidatedJson,
    models::Product,
    response::{Created, ErrorResponse},
    routes::params::ProductQuery,
    services::product_service,
    state::AppState,
    validation::ValidationError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products matching the filter", body = Vec<Product>),
        (status = 422, description = "Malformed query", body = ErrorResponse),
        (status = 503, description = "Database not configured", body = ErrorResponse),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Product>>> {
    let Query(query) =
        query.map_err(|rejection| ValidationError::malformed_query(rejection.body_text()))?;
    let items = product_service::list_products(&state, query).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 400, description = "Invalid product id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = product_service::get_product(&state, &id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = NewProduct,
    responses(
        (status = 200, description = "Create product", body = Created),
        (status = 422, description = "Invalid product", body = ErrorResponse),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewProduct>,
) -> AppResult<Json<Created>> {
    let created = product_service::create_product(&state, payload).await?;
    Ok(Json(created))
}
