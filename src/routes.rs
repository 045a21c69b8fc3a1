use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::frontend;
use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Browser form
        .route("/", get(frontend::show_page).post(frontend::submit_form))

        // REST API routes
        .route("/api/translate", post(handlers::translate))
        .route("/api/health", get(handlers::health_check))
        .route("/api/languages", get(handlers::list_languages))
}

/// The full application with middleware, ready to serve.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransLinguaError;
    use crate::translate::prompt::build_prompt;
    use crate::translate::MockTranslationClient;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(client: MockTranslationClient) -> Router {
        build_app(AppState::new(Arc::new(client)).unwrap())
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/translate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_translate_success_echoes_inputs() {
        let mut client = MockTranslationClient::new();
        client
            .expect_generate()
            .withf(|prompt: &str| prompt == build_prompt("Hello", "English", "Spanish"))
            .times(1)
            .returning(|_| Ok("Hola".to_string()));

        let response = app(client)
            .oneshot(post_json(
                json!({"text": "Hello", "source_language": "English", "target_language": "Spanish"})
                    .to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({
                "success": true,
                "original_text": "Hello",
                "translated_text": "Hola",
                "source_language": "English",
                "target_language": "Spanish"
            })
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_without_client_call() {
        let mut client = MockTranslationClient::new();
        client.expect_generate().times(0);

        let response = app(client)
            .oneshot(post_json(json!({"text": "Hello", "target_language": "Spanish"}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"error": "Missing required fields: text, source_language, target_language"})
        );
    }

    #[tokio::test]
    async fn test_empty_body_is_no_data() {
        let mut client = MockTranslationClient::new();
        client.expect_generate().times(0);

        let response = app(client).oneshot(post_json(Body::empty())).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({"error": "No data provided"}));
    }

    #[tokio::test]
    async fn test_body_without_content_type_is_accepted() {
        let mut client = MockTranslationClient::new();
        client.expect_generate().times(1).returning(|_| Ok("Ciao".to_string()));

        let request = Request::builder()
            .method("POST")
            .uri("/api/translate")
            .body(Body::from(
                r#"{"text": "Hi", "source_language": "English", "target_language": "Italian"}"#,
            ))
            .unwrap();
        let response = app(client).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_downstream_failure_is_500() {
        let mut client = MockTranslationClient::new();
        client.expect_generate().times(1).returning(|_| {
            Err(TransLinguaError::ExternalService(
                "429 Resource has been exhausted".to_string(),
            ))
        });

        let response = app(client)
            .oneshot(post_json(
                json!({"text": "Hello", "source_language": "English", "target_language": "Spanish"})
                    .to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"success": false, "error": "429 Resource has been exhausted"})
        );
    }

    #[tokio::test]
    async fn test_health_is_always_healthy() {
        let mut client = MockTranslationClient::new();
        client.expect_generate().times(0);

        let response = app(client)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"status": "healthy", "service": "TransLingua Translation API"})
        );
    }

    #[tokio::test]
    async fn test_languages_lists_sixteen() {
        let response = app(MockTranslationClient::new())
            .oneshot(Request::builder().uri("/api/languages").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = json_body(response).await;
        let languages = body["languages"].as_array().unwrap();
        assert_eq!(languages.len(), 16);
        assert_eq!(languages[0], "English");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = app(MockTranslationClient::new())
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
