use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use orderitems_core::OrderId;

use crate::app::dto::{self, ErrorResponse, ItemResponse};
use crate::app::errors;
use crate::app::services::AppServices;

/// Returns every item of one order, flattened across its packages.
#[utoipa::path(
    get,
    path = "/orders/{order_id}/items",
    tag = "pedidos",
    summary = "Itens de um pedido",
    description = "Retorna todos os itens de um determinado pedido",
    params(
        ("order_id" = uuid::Uuid, Path, description = "Identificador do pedido")
    ),
    responses(
        (status = 200, description = "Itens do pedido", body = [ItemResponse]),
        (status = 404, description = "Pedido não encontrado", body = ErrorResponse),
        (status = 422, description = "Identificador de pedido inválido", body = ErrorResponse),
        (status = 502, description = "Falha de comunicação com o servidor remoto", body = ErrorResponse)
    )
)]
pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Path(order_id): Path<String>,
) -> axum::response::Response {
    let order_id: OrderId = match order_id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                errors::INVALID_ORDER_ID_MESSAGE,
            );
        }
    };

    match services.item_source().items_for_order(order_id).await {
        Ok(items) => (StatusCode::OK, Json(dto::items_to_response(items))).into_response(),
        Err(e) => errors::item_source_error_to_response(e),
    }
}
