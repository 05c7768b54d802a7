use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_LIMIT: u64 = 50;
pub const MAX_LIMIT: u64 = 200;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Exact category, e.g. `bouquet`
    pub category: Option<String>,
    pub occasion: Option<String>,
    pub color: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Maximum number of products, default 50, at most 200
    pub limit: Option<i64>,
}

impl ProductQuery {
    pub fn limit(&self) -> u64 {
        match self.limit {
            None => DEFAULT_LIMIT,
            Some(limit) => limit.clamp(1, MAX_LIMIT as i64) as u64,
        }
    }
}
