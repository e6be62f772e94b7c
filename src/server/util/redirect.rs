//! Role-based sign-in/sign-up redirect targets.
//!
//! Pure functions computing the destination path for the generic
//! `/auth/sign-in` and `/auth/sign-up` dispatchers. The optional redirect
//! target is carried along as a URL-encoded query parameter.

use entity::user::Role;

/// Parses an optional `role` query value, defaulting to customer.
///
/// Unknown values fall back to customer rather than erroring, matching the
/// dispatcher's permissive contract.
pub fn role_or_default(role: Option<&str>) -> Role {
    match role {
        Some("owner") => Role::Owner,
        Some("admin") => Role::Admin,
        _ => Role::Customer,
    }
}

/// Computes the sign-in page path for a role.
///
/// # Arguments
/// - `role` - Resolved account role
/// - `redirect` - Optional path to return to after signing in
///
/// # Returns
/// - Path such as `/auth/owner/sign-in?redirect=%2Fdashboard`
pub fn sign_in_target(role: Role, redirect: Option<&str>) -> String {
    build_target(role, "sign-in", redirect)
}

/// Computes the sign-up page path for a role.
///
/// # Arguments
/// - `role` - Resolved account role
/// - `redirect` - Optional path to return to after signing up
///
/// # Returns
/// - Path such as `/auth/customer/sign-up`
pub fn sign_up_target(role: Role, redirect: Option<&str>) -> String {
    build_target(role, "sign-up", redirect)
}

fn build_target(role: Role, page: &str, redirect: Option<&str>) -> String {
    let segment = match role {
        Role::Customer => "customer",
        Role::Owner => "owner",
        Role::Admin => "admin",
    };

    let mut target = format!("/auth/{}/{}", segment, page);

    if let Some(redirect) = redirect {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("redirect", redirect)
            .finish();
        target.push('?');
        target.push_str(&query);
    }

    target
}
