use axum::http::StatusCode;
use axum::response::IntoResponse;

use orderitems_orders::ItemSourceError;

use crate::app::dto::ErrorResponse;

pub const ORDER_NOT_FOUND_MESSAGE: &str = "Pedido não encontrado";
pub const COMMUNICATION_FAILURE_MESSAGE: &str = "Falha de comunicação com o servidor remoto";
pub const INVALID_ORDER_ID_MESSAGE: &str = "Identificador de pedido inválido";

/// Map an item source failure onto an HTTP response.
///
/// Only two failures are classified; everything else is a bare 500.
pub fn item_source_error_to_response(err: ItemSourceError) -> axum::response::Response {
    match err {
        ItemSourceError::OrderNotFound => json_error(StatusCode::NOT_FOUND, ORDER_NOT_FOUND_MESSAGE),
        ItemSourceError::CommunicationFailure(_) => {
            json_error(StatusCode::BAD_GATEWAY, COMMUNICATION_FAILURE_MESSAGE)
        }
        other => {
            tracing::error!(error = %other, "unclassified item source failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(ErrorResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn order_not_found_is_404_with_message() {
        let response = item_source_error_to_response(ItemSourceError::OrderNotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Pedido não encontrado"})
        );
    }

    #[tokio::test]
    async fn communication_failure_is_502_with_message() {
        let response =
            item_source_error_to_response(ItemSourceError::communication("connection refused"));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Falha de comunicação com o servidor remoto"})
        );
    }

    #[test]
    fn unclassified_failures_are_500() {
        let response = item_source_error_to_response(ItemSourceError::UnexpectedStatus {
            status: 401,
            url: "http://upstream/orders/x".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = item_source_error_to_response(ItemSourceError::malformed("missing code"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
