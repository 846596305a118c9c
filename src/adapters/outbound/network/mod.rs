/// Network adapters for the remote validation server
mod validation_server_client;

pub use validation_server_client::{build_request_url, ValidationServerClient, DEFAULT_HOST};
