// tests/api_test.rs — Integration test: HTTP routes against a mock provider

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use codescribe::api::{build_router, ApiState};
use codescribe::infra::config::{Config, ServerConfig};
use codescribe::infra::errors::ScribeError;
use codescribe::provider::*;

struct MockProvider {
    response_content: String,
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Provider"
    }

    async fn chat(&self, _request: ChatRequest) -> Result<ChatResponse, ScribeError> {
        Ok(ChatResponse {
            content: self.response_content.clone(),
            usage: TokenUsage::default(),
            stop_reason: StopReason::EndTurn,
        })
    }
}

struct RateLimitedProvider;

#[async_trait]
impl ModelProvider for RateLimitedProvider {
    fn id(&self) -> &str {
        "limited"
    }

    fn name(&self) -> &str {
        "Rate Limited"
    }

    async fn chat(&self, _request: ChatRequest) -> Result<ChatResponse, ScribeError> {
        Err(ScribeError::RateLimited {
            provider: "limited".into(),
        })
    }
}

fn app_replying(content: &str) -> Router {
    let provider = Arc::new(MockProvider {
        response_content: content.to_string(),
    });
    build_router(
        ApiState::new(provider, &Config::default()),
        &ServerConfig::default(),
    )
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

const CODE: &str = "def square(x):\n    return x * x";

// ─── Success paths ──────────────────────────────────────────

#[tokio::test]
async fn test_annotate_route() {
    let annotated = "def square(x):\n    # multiply x by itself\n    return x * x";
    let (status, json) = post_json(
        app_replying(annotated),
        "/generation/annotate/",
        json!({
            "language_model": "openai",
            "code_extension": "python",
            "code_block_to_generate_from": CODE,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["annotated_output"], annotated);
    assert_eq!(json["successful_annotation"], true);
}

#[tokio::test]
async fn test_explain_route_echoes_complexity() {
    let (status, json) = post_json(
        app_replying("Squares a number."),
        "/generation/explain/",
        json!({
            "code_extension": "python",
            "code_block_to_generate_from": CODE,
            "explanation_complexity": 10,
            "response_language": "german",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({"explained_output": "Squares a number.", "explanation_complexity": 10})
    );
}

#[tokio::test]
async fn test_analyse_route() {
    let (status, json) = post_json(
        app_replying("square: O(1) runtime, O(1) space"),
        "/generation/analyse/",
        json!({"code_extension": "python", "code_block_to_generate_from": CODE}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["complexity_breakdown"],
        json!({"square": {"runtime": "1", "space": "1"}})
    );
}

#[tokio::test]
async fn test_revise_route() {
    let (status, json) = post_json(
        app_replying("```python\ndef square(number):\n    return number * number\n```"),
        "/generation/revise/",
        json!({
            "code_extension": "python",
            "code_block_to_generate_from": CODE,
            "variable_naming_scheme": "snake",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["revised_output"],
        "def square(number):\n    return number * number"
    );
    assert_eq!(json["successful_revision"], true);
}

#[tokio::test]
async fn test_define_route() {
    let (status, json) = post_json(
        app_replying("def square(x):\n    '''Returns x squared.'''\n    return x * x\n"),
        "/generation/define/",
        json!({
            "code_extension": "python",
            "code_block_to_generate_from": CODE,
            "alternative_framework": "Sphinx",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["successful_definition"], true);
}

#[tokio::test]
async fn test_generate_pdf_route() {
    let document = "title: Math\ndescription: Squares.#####function square: squares x\nMultiplies.\nUsage Example:\nsquare(3)";
    let (status, json) = post_json(
        app_replying(document),
        "/generation/generate-pdf/",
        json!({"code_extension": "python", "file_content": CODE}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Math");
    assert_eq!(json["description"], "Squares.");
    assert_eq!(json["footnotes"], json!([]));
    assert_eq!(json["function_explanations"][0]["name"], "square");
    assert_eq!(json["function_explanations"][0]["usage_example"], "square(3)");
}

#[tokio::test]
async fn test_create_pdf_route_with_extension_body() {
    let document = "title: Math#####function square: squares x\nMultiplies.";
    let (status, json) = post_json(
        app_replying(document),
        "/generation/create-pdf/",
        json!({
            "code_file_to_generate_from": CODE,
            "language_model": "openai",
            "code_extension": "python",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Math");
    assert!(json["id"]
        .as_str()
        .unwrap()
        .starts_with("scribe_autodocs__"));
    assert_eq!(json["function_explanations"][0]["name"], "square");
}

// ─── Validation ─────────────────────────────────────────────

#[tokio::test]
async fn test_blank_code_rejected() {
    let (status, json) = post_json(
        app_replying("unused"),
        "/generation/annotate/",
        json!({"code_extension": "java", "code_block_to_generate_from": "   "}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_invalid_framework_rejected() {
    let (status, _) = post_json(
        app_replying("unused"),
        "/generation/define/",
        json!({
            "code_extension": "java",
            "code_block_to_generate_from": "int x = 1;",
            "alternative_framework": "sphinx",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_invalid_complexity_rejected() {
    let (status, _) = post_json(
        app_replying("unused"),
        "/generation/explain/",
        json!({
            "code_extension": "python",
            "code_block_to_generate_from": CODE,
            "explanation_complexity": 25,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_enum_values_rejected() {
    let (status, _) = post_json(
        app_replying("unused"),
        "/generation/revise/",
        json!({
            "code_extension": "rust",
            "code_block_to_generate_from": "let x = 1;",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post_json(
        app_replying("unused"),
        "/generation/revise/",
        json!({
            "code_extension": "python",
            "code_block_to_generate_from": CODE,
            "variable_naming_scheme": "kebab",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ─── Upstream failures ──────────────────────────────────────

#[tokio::test]
async fn test_upstream_failure_is_503() {
    let app = build_router(
        ApiState::new(Arc::new(RateLimitedProvider), &Config::default()),
        &ServerConfig::default(),
    );
    let (status, json) = post_json(
        app,
        "/generation/analyse/",
        json!({"code_extension": "python", "code_block_to_generate_from": CODE}),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        json["error"],
        "Service is temporarily unavailable... Please try again later!"
    );
}
