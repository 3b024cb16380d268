use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use qanda_cli::enums::ai_provider_error::AiProviderError;
use qanda_cli::errors::QandaError;
use qanda_cli::helpers::prompt_generator::generate_prompt;
use qanda_cli::services::ai_providers::openai::OpenAIProvider;
use qanda_cli::structs::config::generation_config::GenerationConfig;

const COMPLETION_BODY: &str = r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"4"},"finish_reason":"stop"}],"usage":{"prompt_tokens":25,"completion_tokens":1,"total_tokens":26}}"#;

const AUTH_ERROR_BODY: &str = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#;

fn test_config() -> GenerationConfig {
    GenerationConfig::new("sk-test".to_string(), "gpt-3.5-turbo".to_string(), 0.0, 50)
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn parse_content_length(headers: &[u8]) -> usize {
    String::from_utf8_lossy(headers)
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

async fn serve_one(mut stream: TcpStream, status: &str, body: &str) {
    // Drain the full request before answering so the client never sees a
    // reset mid-write.
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if let Some(end) = find_headers_end(&buf) {
                    if buf.len() >= end + parse_content_length(&buf[..end]) {
                        break;
                    }
                }
            }
        }
    }

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Local stand-in for the hosted completion service. Returns the base URL
/// to point the provider at and a counter of requests actually received.
async fn spawn_completion_fixture(
    status: &'static str,
    body: &'static str,
) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fixture listener");
    let addr = listener.local_addr().expect("fixture addr");
    let hits = Arc::new(AtomicUsize::new(0));
    let fixture_hits = Arc::clone(&hits);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((stream, _)) => {
                    fixture_hits.fetch_add(1, Ordering::SeqCst);
                    serve_one(stream, status, body).await;
                }
                Err(_) => break,
            }
        }
    });

    (format!("http://{}", addr), hits)
}

#[tokio::test]
async fn valid_submission_returns_completion_text() {
    let (base_url, hits) = spawn_completion_fixture("200 OK", COMPLETION_BODY).await;
    let provider = OpenAIProvider::new().with_base_url(base_url);

    let prompt = generate_prompt("What is 2+2?");
    let answer = provider
        .complete(&prompt, &test_config())
        .await
        .expect("completion succeeds");

    assert!(!answer.is_empty());
    assert_eq!(answer, "4");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rejected_credential_surfaces_authentication_error() {
    let (base_url, hits) = spawn_completion_fixture("401 Unauthorized", AUTH_ERROR_BODY).await;
    let provider = OpenAIProvider::new().with_base_url(base_url);

    let prompt = generate_prompt("Hello");
    let result = provider.complete(&prompt, &test_config()).await;

    match result {
        Err(QandaError::ProviderError(AiProviderError::AuthenticationError(msg))) => {
            assert!(msg.contains("Incorrect API key provided"));
        }
        other => panic!("expected AuthenticationError, got {:?}", other),
    }

    // Surfaced as-is: exactly one request, no retry.
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unreachable_service_surfaces_remote_service_error() {
    // Grab a port that nothing is listening on anymore.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe listener");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);

    let provider = OpenAIProvider::new().with_base_url(format!("http://{}", addr));
    let prompt = generate_prompt("Hello");
    let result = provider.complete(&prompt, &test_config()).await;

    assert!(matches!(
        result,
        Err(QandaError::ProviderError(AiProviderError::RemoteServiceError(_)))
    ));
}

#[tokio::test]
async fn non_success_status_surfaces_remote_service_error() {
    let (base_url, _hits) =
        spawn_completion_fixture("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let provider = OpenAIProvider::new().with_base_url(base_url);

    let prompt = generate_prompt("Hello");
    let result = provider.complete(&prompt, &test_config()).await;

    match result {
        Err(QandaError::ProviderError(AiProviderError::RemoteServiceError(msg))) => {
            assert!(msg.contains("HTTP 500"));
        }
        other => panic!("expected RemoteServiceError, got {:?}", other),
    }
}

#[tokio::test]
async fn response_without_content_surfaces_remote_service_error() {
    let (base_url, _hits) = spawn_completion_fixture("200 OK", r#"{"choices":[]}"#).await;
    let provider = OpenAIProvider::new().with_base_url(base_url);

    let prompt = generate_prompt("Hello");
    let result = provider.complete(&prompt, &test_config()).await;

    assert!(matches!(
        result,
        Err(QandaError::ProviderError(AiProviderError::RemoteServiceError(_)))
    ));
}

#[tokio::test]
async fn out_of_range_config_is_rejected_before_any_network_call() {
    let (base_url, hits) = spawn_completion_fixture("200 OK", COMPLETION_BODY).await;
    let provider = OpenAIProvider::new().with_base_url(base_url);
    let prompt = generate_prompt("Hello");

    let mut config = test_config();
    config.temperature = 1.5;
    assert!(matches!(
        provider.complete(&prompt, &config).await,
        Err(QandaError::ValidationError { .. })
    ));

    let mut config = test_config();
    config.max_tokens = 301;
    assert!(matches!(
        provider.complete(&prompt, &config).await,
        Err(QandaError::ValidationError { .. })
    ));

    let mut config = test_config();
    config.api_key = String::new();
    assert!(matches!(
        provider.complete(&prompt, &config).await,
        Err(QandaError::MissingCredential)
    ));

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
