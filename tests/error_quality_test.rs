//! Error message quality tests
//!
//! Tests that verify error messages are helpful and distinguishable.

use freenas_api_client::ClientError;

#[test]
fn test_http_error_message_clarity() {
    // Given: An HTTP-level error
    let error = ClientError::Http {
        status: 404,
        body: "Volume not found".to_string(),
    };

    // When: Converting to string
    let message = format!("{}", error);

    // Then: Message carries the status and body
    assert!(message.contains("HTTP 404"));
    assert!(message.contains("Volume not found"));
}

#[test]
fn test_auth_error_message_clarity() {
    let error = ClientError::Auth("credentials rejected by FreeNAS".to_string());

    let message = format!("{}", error);

    assert!(message.contains("Authentication failed"));
    assert!(message.contains("credentials rejected"));
}

#[test]
fn test_rpc_error_message_clarity() {
    let error = ClientError::Rpc {
        code: Some(22),
        reason: "Method does not exist".to_string(),
    };

    let message = format!("{}", error);

    assert!(message.contains("FreeNAS API error"));
    assert!(message.contains("Method does not exist"));
}

#[test]
fn test_websocket_error_message_clarity() {
    // Given: A WebSocket error (needs a tungstenite::Error)
    use tungstenite::error::Error as WsError;
    use tungstenite::error::ProtocolError;

    let ws_err = WsError::Protocol(ProtocolError::ResetWithoutClosingHandshake);
    let error = ClientError::WebSocket(ws_err);

    // When: Converting to string
    let message = format!("{}", error);

    // Then: Message should clearly indicate WebSocket issue
    assert!(message.contains("WebSocket error"));
}

#[test]
fn test_deserialization_error_hides_body_from_message() {
    // Given: A deserialization error with a large body
    let error = ClientError::Deserialization {
        message: "missing field `vol_name`".to_string(),
        body: "x".repeat(10_000),
    };

    // When: Converting to string
    let message = format!("{}", error);

    // Then: The message names the problem without dumping the body
    assert!(message.contains("vol_name"));
    assert!(message.len() < 200);
}

#[test]
fn test_json_error_message_clarity() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let error = ClientError::Json(json_err);

    let message = format!("{}", error);

    assert!(message.contains("JSON error"));
}

#[test]
fn test_timeout_message_names_duration() {
    let error = ClientError::Timeout { timeout_secs: 10 };

    assert_eq!(error.to_string(), "Operation timed out after 10s");
}

#[test]
fn test_error_classification() {
    let unauthorized = ClientError::Http {
        status: 401,
        body: String::new(),
    };
    let forbidden = ClientError::Http {
        status: 403,
        body: String::new(),
    };
    let missing = ClientError::Http {
        status: 404,
        body: String::new(),
    };

    assert!(unauthorized.is_unauthorized());
    assert!(forbidden.is_unauthorized());
    assert!(!missing.is_unauthorized());
    assert!(missing.is_not_found());
    assert!(ClientError::Auth(String::new()).is_unauthorized());
    assert_eq!(ClientError::NotConnected.status(), None);
}

#[test]
fn test_errors_are_distinguishable() {
    let errors = [
        ClientError::Http {
            status: 500,
            body: "boom".to_string(),
        },
        ClientError::Deserialization {
            message: "boom".to_string(),
            body: String::new(),
        },
        ClientError::Rpc {
            code: None,
            reason: "boom".to_string(),
        },
        ClientError::Auth("boom".to_string()),
        ClientError::Config("boom".to_string()),
        ClientError::NotConnected,
        ClientError::ConnectionClosed,
    ];

    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    for (i, a) in messages.iter().enumerate() {
        for b in &messages[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
