//! Friend (guest) account handling.

use salvo::http::StatusCode;

use super::helpers::*;
use porter_test::component::config::GatewayConfig;

#[test_log::test(tokio::test)]
async fn friend_realm_is_refused_and_logged_out() {
    let gateway = TestGateway::new(strict_gateway());

    let body = TestRequest::get(WHOAMI)
        .remote_user("bob")
        .realm("friend")
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::FORBIDDEN)
        .json();

    let notices = body["notices"].as_array().expect("notices array");
    assert_eq!(notices.len(), 2);
    assert_eq!(
        notices[0]["message"],
        "Friend accounts are not allowed to log in to this site."
    );
    assert!(
        notices[1]["message"]
            .as_str()
            .is_some_and(|m| m.contains(LOGOUT))
    );
}

#[test_log::test(tokio::test)]
async fn friend_address_stays_anonymous_when_anonymous_browsing_is_allowed() {
    let gateway = TestGateway::new(GatewayConfig {
        allow_anons_on_https: true,
        autocreate: true,
        ..strict_gateway()
    });

    let body = TestRequest::get(WHOAMI)
        .remote_user("bob@gmail.com")
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "anonymous");
    assert!(gateway.find_account("bob@gmail.com").await.is_none());
    assert!(gateway.sessions.is_empty().await);
}

#[test_log::test(tokio::test)]
async fn friend_is_provisioned_when_allowed() {
    let gateway = TestGateway::new(GatewayConfig {
        allow_friend_accounts: true,
        autocreate: true,
        ..strict_gateway()
    });

    TestRequest::get(WHOAMI)
        .remote_user("bob@gmail.com")
        .realm("friend")
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::OK);

    let account = gateway
        .find_account("bob@gmail.com")
        .await
        .expect("Friend account should be created");
    assert_eq!(account.email, "bob@gmail.com");
}
