use serde::Deserialize;
use utoipa::ToSchema;

/// Both bounds are inclusive.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PriceRangeQuery {
    pub min: f64,
    pub max: f64,
}
