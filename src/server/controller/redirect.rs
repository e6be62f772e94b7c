use axum::{extract::Query, response::Redirect};
use serde::Deserialize;

use crate::server::util::redirect::{role_or_default, sign_in_target, sign_up_target};

/// Query parameters accepted by the auth dispatchers.
///
/// Unknown role values fall back to customer rather than erroring.
#[derive(Deserialize)]
pub struct DispatchQuery {
    pub role: Option<String>,
    pub redirect: Option<String>,
}

/// GET /auth/sign-in - Dispatch to the role-specific sign-in page
///
/// Computes `/auth/{role}/sign-in`, carrying the optional redirect target
/// along as a URL-encoded query parameter.
///
/// # Authentication
/// Public
///
/// # Returns
/// - `307 Temporary Redirect`: To the role-specific sign-in path
pub async fn dispatch_sign_in(Query(query): Query<DispatchQuery>) -> Redirect {
    let role = role_or_default(query.role.as_deref());
    Redirect::temporary(&sign_in_target(role, query.redirect.as_deref()))
}

/// GET /auth/sign-up - Dispatch to the role-specific sign-up page
///
/// # Authentication
/// Public
///
/// # Returns
/// - `307 Temporary Redirect`: To the role-specific sign-up path
pub async fn dispatch_sign_up(Query(query): Query<DispatchQuery>) -> Redirect {
    let role = role_or_default(query.role.as_deref());
    Redirect::temporary(&sign_up_target(role, query.redirect.as_deref()))
}
