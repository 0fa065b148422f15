// Service exports
pub mod items_api;

pub use items_api::{ItemsApiClient, ItemsApiError};
