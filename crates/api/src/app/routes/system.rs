use axum::Json;

use crate::app::dto::HealthCheckResponse;

/// Checks that the server is online.
#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "healthcheck",
    summary = "Integridade do sistema",
    description = "Checa se o servidor está online",
    responses(
        (status = 200, description = "Servidor online", body = HealthCheckResponse, content_type = "application/json")
    )
)]
pub async fn healthcheck() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::ok())
}
