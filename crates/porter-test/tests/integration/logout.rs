//! Local logout followed by a redirect to the single sign-on logout page.

use salvo::http::StatusCode;

use super::helpers::*;
use porter_test::component::account::AccountStatus;

#[test_log::test(tokio::test)]
async fn logout_ends_session_and_redirects_upstream() {
    let gateway = TestGateway::new(strict_gateway());
    let alice = gateway.seed_account("alice", AccountStatus::Active).await;
    let session = gateway.start_session(&alice).await;

    let response = TestRequest::get(LOGOUT)
        .remote_user("alice")
        .session(&session.id)
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::FOUND)
        .assert_header(
            "Location",
            "https://weblogin.example.edu/logout?https://www.example.edu/",
        )
        .assert_header("Cache-Control", "private, no-store");

    assert_eq!(response.session_cookie().as_deref(), Some(""));
    assert!(!gateway.session_exists(&session.id).await);
}

#[test_log::test(tokio::test)]
async fn logout_without_session_still_redirects() {
    let gateway = TestGateway::new(strict_gateway());

    TestRequest::get(LOGOUT)
        .send(&gateway.service)
        .await
        .assert_status(StatusCode::FOUND);
}
