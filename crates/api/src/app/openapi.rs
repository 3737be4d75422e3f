//! OpenAPI document served at `/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::app::dto::{ErrorResponse, HealthCheckResponse, ItemResponse};
use crate::app::routes;

#[derive(OpenApi)]
#[openapi(
    info(title = "API de Pedidos", description = "Itens de pedidos agregados a partir do serviço de pedidos"),
    paths(routes::system::healthcheck, routes::orders::list_items),
    components(schemas(HealthCheckResponse, ErrorResponse, ItemResponse)),
    tags(
        (name = "healthcheck", description = "Integridade do sistema"),
        (name = "pedidos", description = "Consulta de pedidos")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_endpoints() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/healthcheck"));
        assert!(paths.contains_key("/orders/{order_id}/items"));

        let responses = &doc["paths"]["/orders/{order_id}/items"]["get"]["responses"];
        for status in ["200", "404", "422", "502"] {
            assert!(responses.get(status).is_some(), "missing {status}");
        }
    }

    #[test]
    fn item_schema_uses_public_name() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["components"]["schemas"].get("Item").is_some());
    }
}
