use super::*;

#[test]
fn error_message_prefers_server_message() {
    assert_eq!(
        error_message(400, r#"{"message":"invalid credentials"}"#),
        "invalid credentials"
    );
}

#[test]
fn error_message_falls_back_on_unparseable_body() {
    assert_eq!(error_message(502, "<html>bad gateway</html>"), "request failed with status 502");
}

#[test]
fn error_message_falls_back_on_empty_message() {
    assert_eq!(error_message(500, r#"{"message":""}"#), "request failed with status 500");
}

#[test]
fn is_unauthorized_only_for_401() {
    let unauthorized = ApiError::Http {
        status: 401,
        message: "expired".to_owned(),
    };
    let forbidden = ApiError::Http {
        status: 403,
        message: "nope".to_owned(),
    };
    let network = ApiError::Network("offline".to_owned());
    assert!(unauthorized.is_unauthorized());
    assert!(!forbidden.is_unauthorized());
    assert!(!network.is_unauthorized());
}

#[test]
fn display_shows_server_message_for_http_errors() {
    let err = ApiError::Http {
        status: 404,
        message: "customer not found".to_owned(),
    };
    assert_eq!(err.to_string(), "customer not found");
}

#[test]
fn display_prefixes_network_failures() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}
