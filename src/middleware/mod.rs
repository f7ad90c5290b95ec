//! Request-gating middleware.
//!
//! [`auth`] provides the [`auth::AuthGuard`] extractor that protects the
//! students, classes and dashboard routes. It validates credentials and then
//! lets the request through unchanged; it never refreshes tokens or mutates
//! state.

pub mod auth;
