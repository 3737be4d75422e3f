use axum::{Router, routing::get};

pub mod orders;
pub mod system;

/// Router for the order endpoints.
pub fn router() -> Router {
    Router::new().route("/orders/:order_id/items", get(orders::list_items))
}
