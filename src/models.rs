use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::products::Model as ProductModel;

/// A product as returned to clients: public `id`, no internal columns.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub color: Option<String>,
    pub occasion: Option<String>,
    pub in_stock: bool,
    pub images: Vec<String>,
    pub care: Option<String>,
    pub tags: Vec<String>,
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Self {
            id: model.id.to_string(),
            title: model.title,
            description: model.description,
            price: model.price,
            category: model.category,
            color: model.color,
            occasion: model.occasion,
            in_stock: model.in_stock,
            images: model.images.0,
            care: model.care,
            tags: model.tags.0,
        }
    }
}
