//! HTTP handlers.

pub mod health_handler;
pub mod notify_handler;

pub use health_handler::health_routes;
pub use notify_handler::notify_routes;
