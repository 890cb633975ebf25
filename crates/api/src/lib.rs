//! EcoSort HTTP API.
//!
//! Axum handlers over `ecosort-db` repositories, with the geocoding and
//! vision adapters wired in through [`state::AppState`]. The library
//! surface exists so integration tests can build the exact router the
//! binary serves.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
