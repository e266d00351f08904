//! JSON quiz API served over HTTP

mod error;
mod middleware;
mod router;
mod server;

pub use error::{ApiError, ErrorBody, GENERIC_INTERNAL_MESSAGE};
pub use router::{ApiState, build_router};
pub use server::serve;
