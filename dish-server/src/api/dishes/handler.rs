//! Dish API Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use shared::models::{Dish, DishCreate, DishUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

const MISSING_FIELDS: &str = "missing mandatory fields";
const INVALID_ID: &str = "invalid id";

/// Create body as sent by the client; presence is checked after decoding
#[derive(Debug, Deserialize)]
struct CreateDishRequest {
    name: Option<String>,
    price: Option<f64>,
    weight: Option<i64>,
}

/// GET /dishes - 获取所有菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Dish>>>> {
    let dishes = state.dishes.list_dishes().await?;
    Ok(Json(ApiResponse::ok_with_data(
        "dishes loaded successfully",
        dishes,
    )))
}

/// POST /dishes - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    body: Bytes,
) -> AppResult<Json<ApiResponse<()>>> {
    let req: CreateDishRequest = parse_body(&body)?;
    let Some(payload) = DishCreate::from_parts(req.name, req.price, req.weight) else {
        return Err(AppError::bad_request(MISSING_FIELDS));
    };

    state.dishes.create_dish(payload).await?;
    Ok(Json(ApiResponse::ok("dish was added successfully")))
}

/// GET /dishes/average_price - 平均价格
pub async fn average_price(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<f64>>> {
    let average = state.dishes.average_price().await?;
    Ok(Json(ApiResponse::data(average)))
}

/// GET /dish/{id} - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<Dish>>> {
    let id = path_id(id)?;
    let dish = state.dishes.get_dish(id).await?;
    Ok(Json(ApiResponse::ok_with_data(
        "dish loaded successfully",
        dish,
    )))
}

/// PUT /dish/{id} - 部分更新菜品
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = path_id(id)?;
    let payload: DishUpdate = parse_body(&body)?;

    state.dishes.update_dish(id, payload).await?;
    Ok(Json(ApiResponse::ok("dish was updated successfully")))
}

/// DELETE /dish/{id} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = path_id(id)?;

    state.dishes.delete_dish(id).await?;
    Ok(Json(ApiResponse::ok("dish was deleted successfully")))
}

/// The `{id}` segment as an integer. A segment axum cannot decode
/// (e.g. invalid UTF-8) is reported the same way as a non-numeric one.
fn path_id(path: Result<Path<String>, PathRejection>) -> AppResult<i64> {
    match path {
        Ok(Path(segment)) => parse_id(&segment),
        Err(_) => Err(AppError::bad_request(INVALID_ID)),
    }
}

fn parse_id(segment: &str) -> AppResult<i64> {
    segment
        .parse()
        .map_err(|_| AppError::bad_request(INVALID_ID))
}

/// Decode a JSON body without requiring a Content-Type header.
/// An empty body reads as `{}`.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    serde_json::from_slice(body)
        .map_err(|e| AppError::bad_request(format!("invalid JSON body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(ref m)) if m == INVALID_ID));
        assert!(parse_id("12abc").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_parse_body_empty_is_object() {
        let req: CreateDishRequest = parse_body(b"").unwrap();
        assert!(req.name.is_none() && req.price.is_none() && req.weight.is_none());

        let update: DishUpdate = parse_body(b"  \n").unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_parse_body_rejects_wrong_types() {
        let err = parse_body::<CreateDishRequest>(br#"{"name": "Soup", "price": "cheap"}"#)
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m.starts_with("invalid JSON body")));
    }
}
