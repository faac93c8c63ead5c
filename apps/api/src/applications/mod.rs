pub mod handlers;
pub mod multipart;
