//! Configuration modules for the SIMS API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with development defaults:
//!
//! - [`cors`]: allowed origins for the browser frontend
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: signing secrets and expiries for the token pair

pub mod cors;
pub mod database;
pub mod jwt;
