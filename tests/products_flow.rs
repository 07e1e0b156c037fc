use axum_product_api::{
    db::{create_orm_conn, run_migrations},
    dto::products::ProductDto,
    error::AppError,
    services::product_service,
    state::AppState,
};
use uuid::Uuid;

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

// Integration flow: create -> read -> range query -> update -> delete.
#[tokio::test]
async fn product_crud_and_range_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    // Create; the server assigns the id.
    let created = product_service::create_product(
        &state,
        ProductDto {
            id: None,
            name: "Sedan".into(),
            quantity: 1,
            price: Some(1700.0),
        },
    )
    .await?;
    let id = created.id.expect("created product has an id");
    assert_eq!(created.name, "Sedan");
    assert_eq!(created.quantity, 1);
    assert_eq!(created.price, Some(1700.0));

    // Read back
    let fetched = product_service::get_product(&state, id)
        .await?
        .expect("created product is readable");
    assert_eq!(fetched, created);

    // Listed among all products
    let all = product_service::list_products(&state).await?;
    assert!(all.iter().any(|p| p.id == Some(id)));

    // Both range boundaries are inclusive.
    let in_range = product_service::list_products_in_range(&state, 1500.0, 1700.0).await?;
    assert!(in_range.iter().any(|p| p.id == Some(id)));

    let out_of_range = product_service::list_products_in_range(&state, 1701.0, 2000.0).await?;
    assert!(!out_of_range.iter().any(|p| p.id == Some(id)));

    // The path id wins over whatever id the body carries.
    let updated = product_service::update_product(
        &state,
        id,
        ProductDto {
            id: Some(Uuid::new_v4()),
            name: "Sedan XL".into(),
            quantity: 2,
            price: Some(1800.0),
        },
    )
    .await?;
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, "Sedan XL");
    assert_eq!(updated.quantity, 2);
    assert_eq!(updated.price, Some(1800.0));

    // Updating a missing id reports not found and writes nothing.
    let missing = Uuid::new_v4();
    let err = product_service::update_product(
        &state,
        missing,
        ProductDto {
            id: None,
            name: "Ghost".into(),
            quantity: 0,
            price: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert!(product_service::get_product(&state, missing).await?.is_none());

    // Delete, then reads miss.
    product_service::delete_product(&state, id).await?;
    assert!(product_service::get_product(&state, id).await?.is_none());

    // Delete is idempotent, for both seen and never-seen ids.
    product_service::delete_product(&state, id).await?;
    product_service::delete_product(&state, Uuid::new_v4()).await?;

    Ok(())
}

#[tokio::test]
async fn products_without_price_stay_out_of_every_range() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let created = product_service::create_product(
        &state,
        ProductDto {
            id: None,
            name: "Unpriced".into(),
            quantity: 4,
            price: None,
        },
    )
    .await?;
    let id = created.id.expect("created product has an id");
    assert_eq!(created.price, None);

    let in_range = product_service::list_products_in_range(&state, 0.0, 1_000_000.0).await?;
    assert!(!in_range.iter().any(|p| p.id == Some(id)));

    product_service::delete_product(&state, id).await?;
    Ok(())
}
