pub mod cors;
pub mod request_logger;

pub use cors::build_cors_layer;
pub use request_logger::{request_logger_middleware, RequestLogSettings};
