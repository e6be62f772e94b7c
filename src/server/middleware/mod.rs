//! Request middleware and authorization guards.
//!
//! `session` wraps tower-sessions with a typed interface for the auth state;
//! `auth` provides the `AuthGuard` that enforces each endpoint's privilege
//! tier before business logic runs.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
