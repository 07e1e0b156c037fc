use uuid::Uuid;

use crate::{
    dto::products::{ProductDto, dto_to_entity, entity_to_dto},
    error::{AppError, AppResult},
    repository::products as product_repo,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<ProductDto>> {
    let items = product_repo::find_all(&state.orm).await?;
    Ok(items.into_iter().map(entity_to_dto).collect())
}

/// Absent is not an error here; callers decide how to render a miss.
pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<Option<ProductDto>> {
    let product = product_repo::find_by_id(&state.orm, id).await?;
    Ok(product.map(entity_to_dto))
}

pub async fn list_products_in_range(
    state: &AppState,
    min: f64,
    max: f64,
) -> AppResult<Vec<ProductDto>> {
    let items = product_repo::find_by_price_between(&state.orm, min, max).await?;
    Ok(items.into_iter().map(entity_to_dto).collect())
}

pub async fn create_product(state: &AppState, payload: ProductDto) -> AppResult<ProductDto> {
    let product = product_repo::insert(&state.orm, dto_to_entity(payload)).await?;
    Ok(entity_to_dto(product))
}

pub async fn update_product(
    state: &AppState,
    id: Uuid,
    payload: ProductDto,
) -> AppResult<ProductDto> {
    if product_repo::find_by_id(&state.orm, id).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let mut product = dto_to_entity(payload);
    // The path id wins over any id embedded in the body.
    product.id = id;

    let product = product_repo::save(&state.orm, product).await?;
    Ok(entity_to_dto(product))
}

pub async fn delete_product(state: &AppState, id: Uuid) -> AppResult<()> {
    product_repo::delete_by_id(&state.orm, id).await?;
    Ok(())
}
