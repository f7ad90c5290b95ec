//! Shared utilities:
//!
//! - [`errors`]: application error type mapped to HTTP status codes
//! - [`existence`]: generic row-exists precondition check
//! - [`jwt`]: access/refresh token issuance and validation
//! - [`pagination`]: page/limit query parameters
//! - [`password`]: bcrypt hashing and verification
//! - [`response`]: the `{success, message, data}` response envelope

pub mod errors;
pub mod existence;
pub mod jwt;
pub mod pagination;
pub mod password;
pub mod response;
