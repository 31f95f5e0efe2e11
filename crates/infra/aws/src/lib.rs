mod config;
mod instance;
mod provider;

pub use provider::AwsProvider;
