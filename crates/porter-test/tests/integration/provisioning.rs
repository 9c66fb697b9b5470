//! Auto-creation of accounts for unknown asserted identities.

use salvo::http::StatusCode;

use super::helpers::*;
use porter_test::component::account::AccountStatus;
use porter_test::component::config::GatewayConfig;

fn autocreate_gateway() -> GatewayConfig {
    GatewayConfig {
        autocreate: true,
        ..strict_gateway()
    }
}

#[test_log::test(tokio::test)]
async fn unknown_user_is_created_and_logged_in() {
    let gateway = TestGateway::new(autocreate_gateway());

    let response = TestRequest::get(WHOAMI)
        .remote_user("carol")
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK);

    let account = gateway
        .find_account("carol")
        .await
        .expect("Account should be created");
    assert_eq!(account.email, "carol@example.edu");
    assert_eq!(account.status, AccountStatus::Active);

    let session_id = response.session_cookie().expect("Session cookie should be set");
    assert!(gateway.session_exists(&session_id).await);
    assert_eq!(response.json()["account"]["name"], "carol");
}

#[test_log::test(tokio::test)]
async fn second_request_reuses_provisioned_account() {
    let gateway = TestGateway::new(autocreate_gateway());

    let first = TestRequest::get(WHOAMI)
        .remote_user("carol")
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK);
    let session_id = first.session_cookie().expect("Session cookie should be set");

    TestRequest::get(WHOAMI)
        .remote_user("carol")
        .session(&session_id)
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(gateway.accounts.len().await, 1);
    assert_eq!(gateway.sessions.len().await, 1);
}

#[test_log::test(tokio::test)]
async fn unknown_user_stays_anonymous_without_autocreate() {
    let gateway = TestGateway::new(strict_gateway());

    let body = TestRequest::get(WHOAMI)
        .remote_user("dave")
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "anonymous");
    assert_eq!(body["asserted"]["username"], "dave");
    assert!(gateway.accounts.is_empty().await);
}
