// HTTP surface: routing, handlers and response helpers

pub mod handlers;
pub mod response;
pub mod routes;

pub use handlers::AppState;
pub use routes::router;
