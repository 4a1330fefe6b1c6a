use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Liveness payload, byte-for-byte constant.
pub const HEALTH_BODY: &str = "{\"status\":\"ok\"}\n";

/// `/health` for any method.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        HEALTH_BODY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_200_with_fixed_body() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"{\"status\":\"ok\"}\n");
    }
}
