//! Dish API 模块
//!
//! | 方法 | 路径 | 说明 |
//! |------|------|------|
//! | GET | /dishes | 获取所有菜品 |
//! | POST | /dishes | 创建菜品 (name, price, weight 必填) |
//! | GET | /dishes/average_price | 平均价格 |
//! | GET | /dish/{id} | 获取单个菜品 |
//! | PUT | /dish/{id} | 部分更新 |
//! | DELETE | /dish/{id} | 删除菜品 |
//!
//! `HEAD` is not derived from `GET`: it answers 404 like any other unlisted method.

mod handler;

use axum::{Router, routing::get};

use super::not_found;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/dishes",
            get(handler::list)
                .post(handler::create)
                .head(not_found)
                .fallback(not_found),
        )
        .route(
            "/dishes/average_price",
            get(handler::average_price)
                .head(not_found)
                .fallback(not_found),
        )
        .route(
            "/dish/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete)
                .head(not_found)
                .fallback(not_found),
        )
}
