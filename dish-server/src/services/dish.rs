//! Dish Service
//!
//! Orchestrates repository calls and owns the one derived value (average
//! price). Writes run under the database write guard, which makes the
//! duplicate check in `add` atomic with its insert.

use shared::models::{Dish, DishCreate, DishUpdate};

use crate::db::DbService;
use crate::db::repository::dish;
use crate::utils::{AppError, AppResult};

pub const NO_DISHES: &str = "there are no dishes";

#[derive(Clone)]
pub struct DishService {
    db: DbService,
}

impl DishService {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    /// Create a dish, returns the assigned id
    pub async fn create_dish(&self, data: DishCreate) -> AppResult<i64> {
        let _guard = self.db.write_guard().await;
        let id = dish::add(&self.db.pool, &data).await?;
        tracing::info!(id, name = %data.name, "Dish created");
        Ok(id)
    }

    pub async fn delete_dish(&self, id: i64) -> AppResult<()> {
        let _guard = self.db.write_guard().await;
        dish::delete_by_id(&self.db.pool, id).await?;
        tracing::info!(id, "Dish deleted");
        Ok(())
    }

    pub async fn update_dish(&self, id: i64, data: DishUpdate) -> AppResult<()> {
        let _guard = self.db.write_guard().await;
        dish::update(&self.db.pool, id, &data).await?;
        tracing::info!(id, "Dish updated");
        Ok(())
    }

    pub async fn list_dishes(&self) -> AppResult<Vec<Dish>> {
        Ok(dish::find_all(&self.db.pool).await?)
    }

    pub async fn get_dish(&self, id: i64) -> AppResult<Dish> {
        Ok(dish::get_by_id(&self.db.pool, id).await?)
    }

    /// Arithmetic mean over every stored price
    pub async fn average_price(&self) -> AppResult<f64> {
        let prices = dish::find_all_prices(&self.db.pool).await?;
        mean(&prices).ok_or_else(|| AppError::empty_collection(NO_DISHES))
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
