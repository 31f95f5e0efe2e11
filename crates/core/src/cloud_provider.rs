use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Flattened view of an EC2 instance. Every field is a plain string so
/// renderers never have to deal with absent values: anything the API
/// leaves unset comes through as "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDetails {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub state: String,
    pub public_ip: String,
    pub private_ip: String,
    pub availability_zone: String,
    pub ami_id: String,
    pub architecture: String,
    pub launch_time: String,
}

#[async_trait]
pub trait ComputeProvider: Send + Sync {
    /// Returns every instance visible in the provider's region, or only
    /// the one matching `instance_id` when a filter is given.
    async fn describe_instances(&self, instance_id: Option<&str>)
        -> Result<Vec<InstanceDetails>>;

    fn region(&self) -> &str;
}
