use shopfront::session::{HttpSessionService, SessionError, SessionService};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// fetch_session
// ============================================================================

#[tokio::test]
async fn test_fetch_session_parses_snapshot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cart_count": 3,
            "user": { "email": "gym@rat.example", "token": "tok-1" }
        })))
        .mount(&mock_server)
        .await;

    let service = HttpSessionService::new(mock_server.uri(), None);
    let view = service.fetch_session().await.unwrap();

    assert_eq!(view.cart_count, 3);
    assert!(view.is_authenticated());
    assert_eq!(view.user.unwrap().email, "gym@rat.example");
}

#[tokio::test]
async fn test_fetch_session_signed_out_snapshot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cart_count": 0
        })))
        .mount(&mock_server)
        .await;

    let service = HttpSessionService::new(mock_server.uri(), None);
    let view = service.fetch_session().await.unwrap();

    assert_eq!(view.cart_count, 0);
    assert!(!view.is_authenticated());
}

#[tokio::test]
async fn test_fetch_session_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .and(header("Authorization", "Bearer sf-test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpSessionService::new(mock_server.uri(), Some("sf-test-token".to_string()));
    service.fetch_session().await.unwrap();
}

#[tokio::test]
async fn test_fetch_session_api_error_carries_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&mock_server)
        .await;

    let service = HttpSessionService::new(mock_server.uri(), None);
    let err = service.fetch_session().await.unwrap_err();

    match err {
        SessionError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "token expired");
        }
        other => panic!("expected Api error, got: {other}"),
    }
}

#[tokio::test]
async fn test_fetch_session_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let service = HttpSessionService::new(mock_server.uri(), None);
    let err = service.fetch_session().await.unwrap_err();

    assert!(matches!(err, SessionError::Parse(_)), "got: {err}");
}

// ============================================================================
// sign_out
// ============================================================================

#[tokio::test]
async fn test_sign_out_posts_with_request_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/sign-out"))
        .and(header_exists("X-Request-Id"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpSessionService::new(mock_server.uri(), Some("sf-test-token".to_string()));
    service.sign_out().await.unwrap();
}

#[tokio::test]
async fn test_sign_out_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/sign-out"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let service = HttpSessionService::new(mock_server.uri(), None);
    let err = service.sign_out().await.unwrap_err();

    match err {
        SessionError::Api { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Api error, got: {other}"),
    }
}

#[tokio::test]
async fn test_sign_out_network_error() {
    // Nothing listening on this port
    let service = HttpSessionService::new("http://127.0.0.1:1".to_string(), None);
    let err = service.sign_out().await.unwrap_err();

    assert!(matches!(err, SessionError::Network(_)), "got: {err}");
}

#[tokio::test]
async fn test_overlapping_sign_out_invocations_are_independent() {
    // Fire-and-forget means a second activation can race the first; each
    // call carries its own request id and both complete.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/sign-out"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&mock_server)
        .await;

    let service = HttpSessionService::new(mock_server.uri(), None);
    let (a, b) = tokio::join!(service.sign_out(), service.sign_out());
    assert!(a.is_ok());
    assert!(b.is_ok());
}
