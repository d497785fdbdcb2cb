//! Tests for the chat completions prompter against a local mock API.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use episodic_error::{PrompterError, PrompterErrorKind};
use episodic_interface::Prompter;
use episodic_models::{DeepSeekPrompter, PrompterConfig};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// What the mock API answers with.
#[derive(Clone)]
enum Reply {
    Completion(&'static str),
    NoChoices,
    Status(StatusCode),
}

#[derive(Clone)]
struct MockApi {
    reply: Reply,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn completions(
    State(api): State<MockApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    api.seen.lock().unwrap().push((auth, body));

    match api.reply {
        Reply::Completion(text) => (
            StatusCode::OK,
            Json(json!({
                "id": "cmpl-1",
                "object": "chat.completion",
                "created": 1700000000,
                "model": "deepseek-chat",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": text},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
            })),
        )
            .into_response(),
        Reply::NoChoices => (
            StatusCode::OK,
            Json(json!({"id": "cmpl-2", "model": "deepseek-chat", "choices": []})),
        )
            .into_response(),
        Reply::Status(status) => (status, "upstream says no").into_response(),
    }
}

/// Start the mock API and return its base URL plus the request log.
async fn spawn_mock(reply: Reply) -> (String, Arc<Mutex<Vec<(Option<String>, Value)>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/chat/completions", post(completions))
        .with_state(MockApi {
            reply,
            seen: seen.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), seen)
}

fn prompter(base_url: &str) -> DeepSeekPrompter {
    DeepSeekPrompter::new(PrompterConfig::new(base_url, "deepseek-chat").with_api_key("test-key"))
}

#[tokio::test]
async fn test_prompt_returns_first_choice() {
    let (base_url, seen) = spawn_mock(Reply::Completion("AI, but make it vibe")).await;

    let text = prompter(&base_url)
        .prompt("Rewrite for Gen Z user", "We discuss upcoming trends in AI.")
        .await
        .unwrap();
    assert_eq!(text, "AI, but make it vibe");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer test-key"));
    assert_eq!(body["model"], "deepseek-chat");
    assert_eq!(body["max_tokens"], 50);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(
        body["messages"][0]["content"],
        "You work with podcast episodes' titles and descriptions. Rewrite for Gen Z user"
    );
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "We discuss upcoming trends in AI.");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let (base_url, _) = spawn_mock(Reply::Status(StatusCode::UNAUTHORIZED)).await;

    let err = prompter(&base_url).prompt("x", "y").await.unwrap_err();
    let prompter_err = err.downcast_ref::<PrompterError>().unwrap();
    match &prompter_err.kind {
        PrompterErrorKind::Api { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "upstream says no");
        }
        other => panic!("unexpected kind: {other}"),
    }
}

#[tokio::test]
async fn test_empty_choices_is_an_error() {
    let (base_url, _) = spawn_mock(Reply::NoChoices).await;

    let err = prompter(&base_url).prompt("x", "y").await.unwrap_err();
    let prompter_err = err.downcast_ref::<PrompterError>().unwrap();
    assert_eq!(prompter_err.kind, PrompterErrorKind::EmptyCompletion);
}

#[tokio::test]
async fn test_missing_api_key_fails_before_sending() {
    let (base_url, seen) = spawn_mock(Reply::Completion("unused")).await;
    let prompter = DeepSeekPrompter::new(PrompterConfig::new(&base_url, "deepseek-chat"));

    let err = prompter.prompt("x", "y").await.unwrap_err();
    let prompter_err = err.downcast_ref::<PrompterError>().unwrap();
    assert!(matches!(
        prompter_err.kind,
        PrompterErrorKind::Configuration(_)
    ));
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_api_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = prompter(&format!("http://{}", addr))
        .prompt("x", "y")
        .await
        .unwrap_err();
    let prompter_err = err.downcast_ref::<PrompterError>().unwrap();
    assert!(matches!(prompter_err.kind, PrompterErrorKind::Http(_)));
}
