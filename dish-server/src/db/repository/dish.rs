//! Dish Repository

use super::{RepoError, RepoResult};
use crate::utils::query_builder::UpdateBuilder;
use shared::models::{Dish, DishCreate, DishUpdate};
use sqlx::SqlitePool;

const TABLE: &str = "dishes";

pub const NOT_FOUND: &str = "dish not found";
pub const ALREADY_EXISTS: &str = "dish already exists";
pub const NOTHING_TO_UPDATE: &str = "no fields to update";

/// Idempotent schema creation
pub async fn create_table(pool: &SqlitePool) -> RepoResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dishes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            weight INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Dish>> {
    let dishes = sqlx::query_as::<_, Dish>("SELECT id, name, price, weight FROM dishes")
        .fetch_all(pool)
        .await?;
    Ok(dishes)
}

pub async fn find_all_prices(pool: &SqlitePool) -> RepoResult<Vec<f64>> {
    let prices = sqlx::query_scalar::<_, f64>("SELECT price FROM dishes")
        .fetch_all(pool)
        .await?;
    Ok(prices)
}

/// Whether a dish with this exact name and price is already stored
pub async fn exists(pool: &SqlitePool, name: &str, price: f64) -> RepoResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM dishes WHERE name = ? AND price = ?")
            .bind(name)
            .bind(price)
            .fetch_one(pool)
            .await?;
    Ok(count != 0)
}

/// Insert a dish, rejecting a second row with the same name + price.
/// Returns the assigned id.
///
/// The check and the insert are two statements; callers that may run
/// concurrently must hold [`crate::db::DbService::write_guard`].
pub async fn add(pool: &SqlitePool, data: &DishCreate) -> RepoResult<i64> {
    if exists(pool, &data.name, data.price).await? {
        return Err(RepoError::Duplicate(ALREADY_EXISTS.into()));
    }
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO dishes (name, price, weight) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(data.weight)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Dish> {
    sqlx::query_as::<_, Dish>("SELECT id, name, price, weight FROM dishes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(NOT_FOUND.into()))
}

/// Apply a sparse patch: only the present fields are written
pub async fn update(pool: &SqlitePool, id: i64, data: &DishUpdate) -> RepoResult<()> {
    let mut builder = UpdateBuilder::new(TABLE);
    builder
        .set_opt("name", data.name.clone())
        .set_opt("price", data.price)
        .set_opt("weight", data.weight);

    let Some(sql) = builder.build_sql("id") else {
        return Err(RepoError::Validation(NOTHING_TO_UPDATE.into()));
    };

    let rows = builder
        .apply_bindings(sqlx::query(&sql))
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(NOT_FOUND.into()));
    }
    Ok(())
}

pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM dishes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(NOT_FOUND.into()));
    }
    Ok(())
}
