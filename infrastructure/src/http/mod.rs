//! HTTP client adapters

mod gateway;

pub use gateway::{HttpQuizGateway, failure_from_status};
