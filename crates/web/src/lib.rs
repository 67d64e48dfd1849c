pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod openapi;
pub mod routes;

pub use routes::app;
