pub mod cloud_provider;
pub mod error;
