pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod pricing;
