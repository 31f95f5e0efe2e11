use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Failed to describe instances in region {region}: {reason}")]
    DescribeInstances { region: String, reason: String },
}

pub type Result<T> = std::result::Result<T, QueryError>;
