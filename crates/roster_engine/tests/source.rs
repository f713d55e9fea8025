use std::time::Duration;

use pretty_assertions::assert_eq;
use roster_engine::{
    CollectionSource, FailureKind, Group, ReqwestSource, SourceSettings, Subscription,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> SourceSettings {
    SourceSettings {
        base_url: format!("{}/api", server.uri()),
        ..SourceSettings::default()
    }
}

#[tokio::test]
async fn fetch_all_decodes_embedded_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"_embedded":{"items":[
                {"id":1,"name":"Rust","description":"Systems"},
                {"id":2,"name":"Go","description":null}
            ]}}"#,
            "application/hal+json",
        ))
        .mount(&server)
        .await;

    let source = ReqwestSource::new(settings_for(&server));
    let groups = source.fetch_all().await.expect("fetch ok");

    assert_eq!(
        groups,
        vec![
            Group {
                id: 1,
                name: "Rust".to_string(),
                description: Some("Systems".to_string()),
            },
            Group {
                id: 2,
                name: "Go".to_string(),
                description: None,
            },
        ]
    );
}

#[tokio::test]
async fn fetch_all_without_embedded_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/groups"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"_links":{}}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let source = ReqwestSource::new(settings_for(&server));
    assert!(source.fetch_all().await.expect("fetch ok").is_empty());
}

#[tokio::test]
async fn fetch_memberships_substitutes_owner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/subscriptions/user/42"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"_embedded":{"items":[{"id":5,"userId":42,"groupId":2}]}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let source = ReqwestSource::new(settings_for(&server));
    let subscriptions = source.fetch_memberships(42).await.expect("fetch ok");

    assert_eq!(
        subscriptions,
        vec![Subscription {
            id: Some(5),
            user_id: Some(42),
            group_id: 2,
        }]
    );
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/groups"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let settings = SourceSettings {
        bearer_token: Some("secret".to_string()),
        ..settings_for(&server)
    };
    let source = ReqwestSource::new(settings);
    assert!(source.fetch_all().await.expect("fetch ok").is_empty());
}

#[tokio::test]
async fn http_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/groups"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = ReqwestSource::new(settings_for(&server));
    let err = source.fetch_all().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/groups"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;

    let settings = SourceSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let source = ReqwestSource::new(settings);
    let err = source.fetch_all().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let source = ReqwestSource::new(settings_for(&server));
    let err = source.fetch_all().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/groups"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Length", "11")
                .set_body_string("{\"a\":12345}"),
        )
        .mount(&server)
        .await;

    let settings = SourceSettings {
        max_bytes: 10,
        ..settings_for(&server)
    };
    let source = ReqwestSource::new(settings);
    let err = source.fetch_all().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn invalid_base_url_is_reported() {
    let settings = SourceSettings {
        base_url: "not a url".to_string(),
        ..SourceSettings::default()
    };
    let source = ReqwestSource::new(settings);
    let err = source.fetch_all().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
