mod download;
mod form;
mod openapi;

// Re-export all handlers
pub use download::{handle_download, method_not_allowed};
pub use form::index;
pub use openapi::{openapi_json, ApiDoc};
