use roster_engine::{format_error, FailureKind, FetchError};

fn error(kind: FailureKind) -> FetchError {
    FetchError {
        kind,
        message: "detail".to_string(),
    }
}

#[test]
fn http_status_keeps_code() {
    let formatted = format_error(&error(FailureKind::HttpStatus(401)));
    assert_eq!(formatted.status, Some(401));
    assert_eq!(formatted.message, "You are not authenticated.");

    let formatted = format_error(&error(FailureKind::HttpStatus(502)));
    assert_eq!(formatted.status, Some(502));
    assert_eq!(formatted.message, "The server encountered an error.");
}

#[test]
fn transport_failures_have_no_status() {
    for kind in [
        FailureKind::Timeout,
        FailureKind::Network,
        FailureKind::Decode,
        FailureKind::InvalidUrl,
    ] {
        let formatted = format_error(&error(kind));
        assert_eq!(formatted.status, None);
        assert!(!formatted.message.is_empty());
    }
}
