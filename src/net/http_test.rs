use super::*;

#[test]
fn join_url_handles_slash_combinations() {
    assert_eq!(join_url("http://localhost:8080", "/api/customers"), "http://localhost:8080/api/customers");
    assert_eq!(join_url("http://localhost:8080/", "/api/customers"), "http://localhost:8080/api/customers");
    assert_eq!(join_url("http://localhost:8080", "api/customers"), "http://localhost:8080/api/customers");
}

#[test]
fn bearer_value_formats_token() {
    assert_eq!(bearer_value("T"), "Bearer T");
}

#[test]
fn intercept_401_evicts_session_before_error_is_returned() {
    let session = SessionStore::default();
    let events = SessionEvents::new();
    session.set("stale");

    let err = intercept_status(401, "expired".to_owned(), &session, &events);

    // Store is already empty by the time the caller sees the error.
    assert_eq!(session.get(), None);
    assert_eq!(events.epoch_untracked(), 1);
    assert_eq!(
        err,
        ApiError::Http {
            status: 401,
            message: "expired".to_owned()
        }
    );
}

#[test]
fn intercept_notifies_once_per_distinct_401() {
    let session = SessionStore::default();
    let events = SessionEvents::new();

    let _ = intercept_status(401, "expired".to_owned(), &session, &events);
    let _ = intercept_status(401, "expired".to_owned(), &session, &events);

    assert_eq!(events.epoch_untracked(), 2);
}

#[test]
fn intercept_passes_other_statuses_through_untouched() {
    let session = SessionStore::default();
    let events = SessionEvents::new();
    session.set("T");

    let err = intercept_status(500, "boom".to_owned(), &session, &events);

    assert_eq!(session.get(), Some("T".to_owned()));
    assert_eq!(events.epoch_untracked(), 0);
    assert_eq!(
        err,
        ApiError::Http {
            status: 500,
            message: "boom".to_owned()
        }
    );
}

#[test]
fn native_builds_report_a_network_kind_failure() {
    let client = HttpClient::new(DEFAULT_API_BASE, SessionStore::default(), SessionEvents::new());
    let result = futures::executor::block_on(client.get_json::<serde_json::Value>("/api/customers"));
    assert!(matches!(result, Err(ApiError::Network(_))));
}
