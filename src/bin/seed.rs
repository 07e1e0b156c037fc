use axum_product_api::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::products::{ActiveModel, Column, Entity as Products},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    seed_products(&orm).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_products(orm: &OrmConn) -> anyhow::Result<()> {
    let products: Vec<(&str, i32, Option<f64>)> = vec![
        ("Sedan", 5, Some(1700.0)),
        ("Hatchback", 8, Some(1250.0)),
        ("Convertible", 2, Some(2400.0)),
        ("Pickup", 3, None),
    ];

    for (name, quantity, price) in products {
        let existing = Products::find()
            .filter(Column::Name.eq(name))
            .one(orm)
            .await?;
        if existing.is_some() {
            println!("Product {name} already present");
            continue;
        }

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            quantity: Set(quantity),
            price: Set(price),
        };
        active.insert(orm).await?;
        println!("Seeded product {name}");
    }

    Ok(())
}
