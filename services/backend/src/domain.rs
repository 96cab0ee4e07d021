// Domain layer modules
pub mod greeting;
pub mod proxy_response;

// Re-exports
pub use greeting::GREETING_BODY;
pub use proxy_response::{ProxyResponse, ResponseHeaders, RESPONSE_HEADERS, STATUS_OK};
