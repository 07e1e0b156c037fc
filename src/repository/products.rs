use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::db::OrmConn;
use crate::entity::products::{ActiveModel, Column, Entity as Products, Model};

pub async fn find_all(conn: &OrmConn) -> Result<Vec<Model>, DbErr> {
    Products::find().all(conn).await
}

pub async fn find_by_id(conn: &OrmConn, id: Uuid) -> Result<Option<Model>, DbErr> {
    Products::find_by_id(id).one(conn).await
}

/// Closed interval on both ends; records without a price never match.
pub async fn find_by_price_between(
    conn: &OrmConn,
    min: f64,
    max: f64,
) -> Result<Vec<Model>, DbErr> {
    Products::find()
        .filter(Column::Price.between(min, max))
        .all(conn)
        .await
}

/// Persist a new record under a freshly generated id. Whatever id the
/// incoming model carries is discarded.
pub async fn insert(conn: &OrmConn, product: Model) -> Result<Model, DbErr> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(product.name),
        quantity: Set(product.quantity),
        price: Set(product.price),
    };
    active.insert(conn).await
}

/// Upsert keyed on `id`.
pub async fn save(conn: &OrmConn, product: Model) -> Result<Model, DbErr> {
    let active = ActiveModel {
        id: Set(product.id),
        name: Set(product.name),
        quantity: Set(product.quantity),
        price: Set(product.price),
    };
    Products::insert(active)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([Column::Name, Column::Quantity, Column::Price])
                .to_owned(),
        )
        .exec_with_returning(conn)
        .await
}

/// No-op when the record is already gone.
pub async fn delete_by_id(conn: &OrmConn, id: Uuid) -> Result<(), DbErr> {
    Products::delete_by_id(id).exec(conn).await?;
    Ok(())
}
