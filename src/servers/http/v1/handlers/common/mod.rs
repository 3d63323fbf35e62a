//! Logic shared by the HTTP tracker handlers.
pub mod auth;
