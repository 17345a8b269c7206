pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::context::handlers as context;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Brand context
        .route("/api/v1/initialize", post(context::handle_initialize))
        .route(
            "/api/v1/context",
            get(context::handle_get_context).patch(context::handle_update_context),
        )
        // Stateless checks
        .route("/api/v1/classify", post(analysis::handle_classify))
        .route("/api/v1/tone-check", post(analysis::handle_tone_check))
        .route("/api/v1/somatic", post(analysis::handle_somatic))
        .route("/api/v1/colors/analyze", post(analysis::handle_analyze_colors))
        // Single stages keyed off the brand tone
        .route("/api/v1/colors", get(analysis::handle_colors))
        .route("/api/v1/sensory", get(analysis::handle_sensory))
        .route("/api/v1/naming", get(analysis::handle_naming))
        // Pipeline
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route(
            "/api/v1/analyze/enhanced",
            post(analysis::handle_analyze_enhanced),
        )
        .route(
            "/api/v1/recommendations",
            get(analysis::handle_recommendations),
        )
        .route("/api/v1/content", post(analysis::handle_generate_content))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::composer::Vera;
    use crate::analysis::enhancer::HeuristicEnhancer;
    use crate::config::Config;

    fn test_app() -> Router {
        build_router(AppState {
            vera: Arc::new(Vera::with_seed(42)),
            enhancer: Arc::new(HeuristicEnhancer),
            config: Config::default(),
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "vera-api");
        assert_eq!(body["ai_enhancement"], false);
    }

    #[tokio::test]
    async fn test_analyze_before_initialize_is_conflict() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/analyze",
            Some(json!({ "content": "Breathe, you are safe" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "NOT_INITIALIZED");
        assert_eq!(
            body["error"]["message"],
            "VERA not initialized. Call initialize() first."
        );

        let (status, _) = send(&app, Method::GET, "/api/v1/recommendations", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_initialize_then_analyze_urgent_copy() {
        let app = test_app();
        let (status, init) = send(
            &app,
            Method::POST,
            "/api/v1/initialize",
            Some(json!({ "brand_name": "Haven", "tone": "soothing" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(init["status"], "initialized");
        assert!(init["context_id"].is_string());

        let (status, report) = send(
            &app,
            Method::POST,
            "/api/v1/analyze",
            Some(json!({ "content": "ACT NOW! Limited time offer expires in 24 hours!" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["analysis_type"], "full");
        assert_eq!(report["tone_analysis"]["tone"], "urgent");
        assert_eq!(report["color_recommendations"]["hex_codes"]["primary"], "#E74C3C");
        assert!(report["nervous_system_guidance"]
            .as_str()
            .unwrap()
            .contains("anxiety"));

        let (_, state) = send(&app, Method::GET, "/api/v1/context", None).await;
        assert_eq!(state["status"], "ready");
        assert_eq!(state["context"]["tone"], "urgent");
        assert_eq!(state["capabilities"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_unknown_mode_and_empty_content_rejected() {
        let app = test_app();
        send(&app, Method::POST, "/api/v1/initialize", Some(json!({}))).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/analyze",
            Some(json!({ "content": "hello", "mode": "everything" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/classify",
            Some(json!({ "text": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_enhanced_analysis_without_llm() {
        let app = test_app();
        send(&app, Method::POST, "/api/v1/initialize", Some(json!({}))).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/analyze/enhanced",
            Some(json!({ "content": "You can do this", "mode": "naming" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ai_enhanced"], false);
        assert!(body.get("naming_suggestions").is_some());
        assert!(body.get("color_recommendations").is_none());
    }

    #[tokio::test]
    async fn test_patch_context_and_recommendations() {
        let app = test_app();
        send(&app, Method::POST, "/api/v1/initialize", Some(json!({}))).await;

        let (status, updated) = send(
            &app,
            Method::PATCH,
            "/api/v1/context",
            Some(json!({ "tone": "playful", "archetype": "Creator" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "updated");
        assert_eq!(updated["new_context"]["tone"], "playful");
        assert_eq!(updated["new_context"]["brand_name"], "Unknown Brand");

        let (status, _) = send(&app, Method::PATCH, "/api/v1/context", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, recs) = send(&app, Method::GET, "/api/v1/recommendations", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(recs["recommendations"]["colors"]["tone"], "playful");
        assert_eq!(recs["recommendations"]["voice"]["audience"], "young adults");
        assert_eq!(recs["action_items"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_content_generation() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/content",
            Some(json!({ "type": "story", "tone": "empowering", "platform": "tiktok" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "story");
        assert_eq!(body["content"]["voice_tone"], "Confident, strong, clear");
        assert_eq!(body["metadata"]["platform"], "tiktok");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/content",
            Some(json!({ "type": "podcast" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Content type 'podcast' not supported"));
    }

    #[tokio::test]
    async fn test_colors_follow_query_then_brand_tone() {
        let app = test_app();
        send(
            &app,
            Method::POST,
            "/api/v1/initialize",
            Some(json!({ "tone": "playful" })),
        )
        .await;

        let (status, colors) = send(&app, Method::GET, "/api/v1/colors", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(colors["tone"], "playful");
        assert_eq!(colors["hex_codes"]["primary"], "#9B59B6");

        let (status, colors) = send(&app, Method::GET, "/api/v1/colors?tone=urgent", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(colors["tone"], "urgent");
        assert_eq!(colors["hex_codes"]["primary"], "#E74C3C");
    }

    #[tokio::test]
    async fn test_sensory_and_naming_use_brand_tone() {
        let app = test_app();
        send(
            &app,
            Method::POST,
            "/api/v1/initialize",
            Some(json!({ "tone": "urgent" })),
        )
        .await;

        let (status, sensory) = send(&app, Method::GET, "/api/v1/sensory", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(sensory["emotional_state"], "urgent");
        assert_eq!(sensory["sensory_design"].as_array().unwrap().len(), 3);

        let (status, naming) = send(&app, Method::GET, "/api/v1/naming", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(naming["suggested_archetype"], "Explorer");
        assert_eq!(naming["name_ideas"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_stateless_endpoints() {
        let app = test_app();

        let (status, check) = send(
            &app,
            Method::POST,
            "/api/v1/tone-check",
            Some(json!({ "text": "safe calm trust relax grounded" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(check["tone"], "soothing");
        assert_eq!(check["quick_fix"], "Perfect for nervous system regulation");

        let (status, reading) = send(
            &app,
            Method::POST,
            "/api/v1/somatic",
            Some(json!({ "text": "Hurry, offer expires tonight" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reading["felt_sense"]["primary"], "tension");
        assert_eq!(reading["nervous_system_reading"]["name"], "Sympathetic Overload");

        let (status, scheme) = send(
            &app,
            Method::POST,
            "/api/v1/colors/analyze",
            Some(json!({ "colors": ["soft blue", "forest green"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(scheme["dominant_mood"], "calming");
    }
}
