use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::{
    dto::products::ProductDto,
    error::AppResult,
    routes::params::PriceRangeQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(create_product))
        .route("/", axum::routing::get(list_products))
        .route("/price-range", axum::routing::get(list_products_in_range))
        .route("/{id}", axum::routing::get(get_product))
        .route("/update/{id}", axum::routing::put(update_product))
        .route("/delete/{id}", axum::routing::delete(delete_product))
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "List products", body = Vec<ProductDto>)
    ),
    tag = "products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let items = product_service::list_products(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product; empty body when no record has this id", body = ProductDto),
    ),
    tag = "products"
)]
pub async fn get_product(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    let result = product_service::get_product(&state, id).await?;
    // A miss is an empty 200, not an error.
    match result {
        Some(product) => Ok(Json(product).into_response()),
        None => Ok(().into_response()),
    }
}

#[utoipa::path(
    get,
    path = "/products/price-range",
    params(
        ("min" = f64, Query, description = "Lower price bound, inclusive"),
        ("max" = f64, Query, description = "Upper price bound, inclusive"),
    ),
    responses(
        (status = 200, description = "Products priced within the closed interval", body = Vec<ProductDto>)
    ),
    tag = "products"
)]
pub async fn list_products_in_range(
    State(state): State<AppState>,
    Query(range): Query<PriceRangeQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let items = product_service::list_products_in_range(&state, range.min, range.max).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductDto,
    responses(
        (status = 200, description = "Create product", body = ProductDto)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductDto>,
) -> AppResult<Json<ProductDto>> {
    let product = product_service::create_product(&state, payload).await?;
    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/products/update/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Updated product", body = ProductDto),
        (status = 404, description = "No product with this id"),
    ),
    tag = "products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductDto>,
) -> AppResult<Json<ProductDto>> {
    let product = product_service::update_product(&state, id, payload).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/products/delete/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product")
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    product_service::delete_product(&state, id).await?;
    Ok(StatusCode::OK)
}
