//! Application services for the HTTP tracker.
//!
//! These modules contain logic that is specific for the HTTP tracker but it
//! does not depend on the Axum web server. It could be reused for other web
//! servers.
pub mod scrape;
