pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::errors::AppError;
use crate::resume::handlers as resume;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/score", post(ats::handle_score))
        .route(
            "/api/v1/ats/bullet-guidance",
            post(ats::handle_bullet_guidance),
        )
        // Resume API
        .route("/api/v1/resume/sample", get(resume::handle_sample))
        .route("/api/v1/resume/plain-text", post(resume::handle_plain_text))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn router() -> Router {
        let config = Config {
            port: 0,
            rust_log: "debug".to_string(),
            action_verbs: None,
        };
        build_router(AppState::new(&config))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_vocabulary() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["action_verbs"], 28);
    }

    #[tokio::test]
    async fn test_score_empty_record() {
        let response = router()
            .oneshot(post_json("/api/v1/ats/score", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["result"]["score"], 0);
        assert_eq!(body["result"]["label"], "Needs Work");
        assert_eq!(body["result"]["color"], "red");
        assert_eq!(body["result"]["suggestions"].as_array().unwrap().len(), 5);
        assert_eq!(body["improvements"].as_array().unwrap().len(), 3);
        assert_eq!(body["ats_ready"], false);
    }

    #[tokio::test]
    async fn test_score_sample_record() {
        let sample = serde_json::to_value(crate::models::resume::ResumeRecord::sample()).unwrap();
        let response = router()
            .oneshot(post_json("/api/v1/ats/score", sample))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["result"]["score"], 100);
        assert_eq!(body["result"]["label"], "Strong Resume");
        assert_eq!(body["result"]["color"], "green");
    }

    #[tokio::test]
    async fn test_score_rejects_malformed_json() {
        let request = Request::post("/api/v1/ats/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_bullet_guidance_route() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/ats/bullet-guidance",
                json!({"text": "Worked on stuff"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["hints"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_sample_and_plain_text_routes() {
        let sample = router()
            .oneshot(Request::get("/api/v1/resume/sample").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let sample = body_json(sample).await;
        assert_eq!(sample["name"], "Alex Johnson");
        assert!(sample["skillCategories"]["technical"].is_array());

        let response = router()
            .oneshot(post_json("/api/v1/resume/plain-text", sample))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert!(body["text"].as_str().unwrap().starts_with("Alex Johnson"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = router()
            .oneshot(Request::get("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_configured_vocabulary_is_used() {
        let config = Config {
            port: 0,
            rust_log: "debug".to_string(),
            action_verbs: Some(vec!["orchestrated".to_string()]),
        };
        let app = build_router(AppState::new(&config));
        let response = app
            .oneshot(post_json(
                "/api/v1/ats/score",
                json!({"summary": "Orchestrated releases"}),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["result"]["score"], 10);
    }
}
