//! Session cookie handling shared by the identity middleware and the logout route.

use porter_core::{config::SessionConfig, identity::LocalSession};
use porter_store::store::{Session, SessionStore};
use salvo::http::cookie::{Cookie, SameSite};

use crate::error::AppResult;

/// The session bound to the request's cookie, if it is still live.
///
/// ## Errors
/// Returns an error if the session store cannot be queried.
pub async fn current_session(
    req: &salvo::Request,
    cfg: &SessionConfig,
    sessions: &dyn SessionStore,
) -> AppResult<Option<Session>> {
    let Some(cookie) = req.cookie(&cfg.cookie_name) else {
        return Ok(None);
    };

    let session = sessions.get(cookie.value()).await?;
    if session.is_none() {
        tracing::debug!("Session cookie refers to an unknown session");
    }

    Ok(session)
}

#[must_use]
pub fn local_session(session: Option<&Session>) -> LocalSession {
    session.map_or_else(LocalSession::anonymous, |s| {
        LocalSession::active(s.username.clone())
    })
}

#[must_use]
pub fn session_cookie(cfg: &SessionConfig, session: &Session) -> Cookie<'static> {
    Cookie::build((cfg.cookie_name.clone(), session.id.clone()))
        .path("/")
        .http_only(true)
        .secure(cfg.secure_cookie)
        .same_site(SameSite::Lax)
        .build()
}

#[must_use]
pub fn removal_cookie(cfg: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::new(cfg.cookie_name.clone(), "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

/// ## Summary
/// Ends the session, if any, and tells the client to drop its cookie.
///
/// ## Errors
/// Returns an error if the session store cannot be reached.
pub async fn end_session(
    session: Option<&Session>,
    cfg: &SessionConfig,
    sessions: &dyn SessionStore,
    res: &mut salvo::Response,
) -> AppResult<()> {
    if let Some(session) = session {
        sessions.end(&session.id).await?;
    }
    res.add_cookie(removal_cookie(cfg));
    Ok(())
}
