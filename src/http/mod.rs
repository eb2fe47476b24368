//! HTTP protocol layer module
//!
//! The value controllers return ([`Reply`]) and the builder that turns it
//! into a hyper response.

pub mod reply;
pub mod response;

// Re-export commonly used types
pub use reply::Reply;
pub use response::build_reply_response;
