//! Login, session continuity and session mismatch through the full router.

use salvo::http::StatusCode;

use super::helpers::*;
use porter_test::component::account::AccountStatus;

#[test_log::test(tokio::test)]
async fn known_user_is_logged_in_and_gets_session_cookie() {
    let gateway = TestGateway::new(strict_gateway());
    gateway.seed_account("alice", AccountStatus::Active).await;

    let response = TestRequest::get(WHOAMI)
        .remote_user("alice")
        .secure()
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK);

    let session_id = response.session_cookie().expect("Session cookie should be set");
    assert!(gateway.session_exists(&session_id).await);

    let body = response.json();
    assert_eq!(body["status"], "authenticated");
    assert_eq!(body["account"]["name"], "alice");
    assert_eq!(body["asserted"]["secure_channel"], true);
}

#[test_log::test(tokio::test)]
async fn returning_session_is_reused() {
    let gateway = TestGateway::new(strict_gateway());
    let alice = gateway.seed_account("alice", AccountStatus::Active).await;
    let session = gateway.start_session(&alice).await;

    let response = TestRequest::get(WHOAMI)
        .remote_user("alice")
        .session(&session.id)
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK);

    // No new session: any cookie on the response is the one that was sent.
    if let Some(cookie) = response.session_cookie() {
        assert_eq!(cookie, session.id);
    }
    assert!(gateway.session_exists(&session.id).await);
    assert_eq!(gateway.sessions.len().await, 1);
}

#[test_log::test(tokio::test)]
async fn session_for_another_user_is_logged_out() {
    let gateway = TestGateway::new(strict_gateway());
    let alice = gateway.seed_account("alice", AccountStatus::Active).await;
    gateway.seed_account("bob", AccountStatus::Active).await;
    let session = gateway.start_session(&alice).await;

    let response = TestRequest::get(WHOAMI)
        .remote_user("bob")
        .session(&session.id)
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    assert!(!gateway.session_exists(&session.id).await);
    assert_eq!(response.session_cookie().as_deref(), Some(""));
    assert_eq!(
        response.json()["logout_url"],
        "https://weblogin.example.edu/logout?https://www.example.edu/"
    );
}

#[test_log::test(tokio::test)]
async fn session_without_asserted_identity_is_logged_out() {
    let gateway = TestGateway::new(strict_gateway());
    let alice = gateway.seed_account("alice", AccountStatus::Active).await;
    let session = gateway.start_session(&alice).await;

    TestRequest::get(WHOAMI)
        .session(&session.id)
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    assert!(!gateway.session_exists(&session.id).await);
}

#[test_log::test(tokio::test)]
async fn missing_identity_browses_anonymously_when_allowed() {
    let gateway = TestGateway::new(porter_test::component::config::GatewayConfig {
        allow_anons_on_https: true,
        ..strict_gateway()
    });

    let body = TestRequest::get(WHOAMI)
        .secure()
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "anonymous");
    assert_eq!(body["account"], serde_json::Value::Null);
    assert_eq!(body["notices"][0]["level"], "status");
}

#[test_log::test(tokio::test)]
async fn blocked_account_is_refused() {
    let gateway = TestGateway::new(strict_gateway());
    gateway.seed_account("mallory", AccountStatus::Blocked).await;

    let body = TestRequest::get(WHOAMI)
        .remote_user("mallory")
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::FORBIDDEN)
        .json();

    assert_eq!(body["notices"][0]["message"], "The account mallory has been blocked.");
    assert!(gateway.sessions.is_empty().await);
}

#[test_log::test(tokio::test)]
async fn healthcheck_needs_no_identity() {
    let gateway = TestGateway::new(strict_gateway());

    let response = TestRequest::get(HEALTHCHECK)
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(response.text(), "OK");
}
