pub mod api_error;
pub mod list_query;
pub mod media;
pub mod multipart;
pub mod serde_helpers;
