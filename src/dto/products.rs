use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A catalog product as submitted by a client, with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "String should have at least 1 character"))]
    pub title: String,
    pub description: Option<String>,
    /// Price in dollars.
    #[validate(range(min = 0.0, message = "Input should be greater than or equal to 0"))]
    #[schema(minimum = 0)]
    pub price: f64,
    /// e.g. bouquet, plant, seasonal
    #[validate(length(min = 1, message = "String should have at least 1 character"))]
    pub category: String,
    pub color: Option<String>,
    /// e.g. wedding, birthday, sympathy
    pub occasion: Option<String>,
    #[serde(default = "in_stock_default")]
    #[schema(default = true)]
    pub in_stock: bool,
    #[serde(default)]
    pub images: Vec<String>,
    pub care: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn in_stock_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::validation::{ErrorKind, parse_body};

    #[test]
    fn defaults_are_applied() {
        let product = parse_body::<NewProduct>(json!({
            "title": "Peony Cloud",
            "price": 48.5,
            "category": "bouquet"
        }))
        .unwrap();

        assert!(product.in_stock);
        assert!(product.images.is_empty());
        assert!(product.tags.is_empty());
        assert_eq!(product.description, None);
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = parse_body::<NewProduct>(json!({
            "title": "Peony Cloud",
            "price": -1,
            "category": "bouquet"
        }))
        .unwrap_err();

        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].kind, ErrorKind::GreaterThanEqual);
        assert_eq!(err.errors[0].loc, vec!["body", "price"]);
    }

    #[test]
    fn zero_price_is_allowed() {
        let product = parse_body::<NewProduct>(json!({
            "title": "Free cutting",
            "price": 0,
            "category": "plant"
        }))
        .unwrap();
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn empty_title_and_category_are_reported() {
        let err = parse_body::<NewProduct>(json!({ "title": "", "price": 10, "category": "" }))
            .unwrap_err();
        let fields: Vec<&str> = err.fields().collect();
        assert_eq!(fields, vec!["category", "title"]);
        assert!(err.errors.iter().all(|e| e.kind == ErrorKind::StringTooShort));
    }

    #[test]
    fn whitespace_title_counts_as_non_empty() {
        let product = parse_body::<NewProduct>(json!({
            "title": " ",
            "price": 10,
            "category": "plant"
        }))
        .unwrap();
        assert_eq!(product.title, " ");
    }

    #[test]
    fn missing_category_is_reported() {
        let err = parse_body::<NewProduct>(json!({ "title": "Fern", "price": 10 })).unwrap_err();
        assert_eq!(err.errors[0].kind, ErrorKind::Missing);
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["category"]);
    }

    #[test]
    fn wrong_types_are_reported() {
        let err = parse_body::<NewProduct>(json!({
            "title": "Fern",
            "price": 12,
            "category": "plant",
            "in_stock": "yes"
        }))
        .unwrap_err();
        assert_eq!(err.errors[0].kind, ErrorKind::BoolType);
        assert_eq!(err.errors[0].loc, vec!["body", "in_stock"]);

        let err = parse_body::<NewProduct>(json!({
            "title": "Fern",
            "price": 12,
            "category": "plant",
            "images": "https://cdn.example/fern.jpg"
        }))
        .unwrap_err();
        assert_eq!(err.errors[0].kind, ErrorKind::ListType);
    }
}
