//! Fantasy Premier League API layer: public fetch with caching,
//! authenticated sessions, payload types and fixture arithmetic.

pub mod auth;
pub mod compute;
pub mod http;
pub mod position;
pub mod types;
