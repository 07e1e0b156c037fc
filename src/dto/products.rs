use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::products::Model;

/// Wire representation of a product. Field-for-field identical to the
/// stored record; `id` may be omitted on requests and is always set on
/// responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub quantity: i32,
    pub price: Option<f64>,
}

pub fn entity_to_dto(product: Model) -> ProductDto {
    ProductDto {
        id: Some(product.id),
        name: product.name,
        quantity: product.quantity,
        price: product.price,
    }
}

/// A missing `id` maps to the nil UUID; every write path overwrites the
/// entity id before persisting, so an id in the body never wins on its own.
pub fn dto_to_entity(dto: ProductDto) -> Model {
    Model {
        id: dto.id.unwrap_or_default(),
        name: dto.name,
        quantity: dto.quantity,
        price: dto.price,
    }
}
