//! Shared-cache exclusion for responses to identified visitors.

use salvo::http::StatusCode;

use super::helpers::*;
use porter_test::component::account::AccountStatus;
use porter_test::component::config::GatewayConfig;

const NO_STORE: &str = "private, no-store";

#[test_log::test(tokio::test)]
async fn logged_in_response_is_not_stored() {
    let gateway = TestGateway::new(strict_gateway());
    gateway.seed_account("alice", AccountStatus::Active).await;

    TestRequest::get(WHOAMI)
        .remote_user("alice")
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Cache-Control", NO_STORE);
}

#[test_log::test(tokio::test)]
async fn refused_response_is_not_stored() {
    let gateway = TestGateway::new(strict_gateway());

    TestRequest::get(WHOAMI)
        .remote_user("bob")
        .realm("friend")
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::FORBIDDEN)
        .assert_header("Cache-Control", NO_STORE);
}

#[test_log::test(tokio::test)]
async fn anonymous_response_is_left_cacheable() {
    let gateway = TestGateway::new(GatewayConfig {
        allow_anons_on_https: true,
        ..strict_gateway()
    });

    let response = TestRequest::get(WHOAMI)
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK);

    assert_ne!(response.header("Cache-Control"), Some(NO_STORE));
}
