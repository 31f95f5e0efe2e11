use async_trait::async_trait;
use aws_sdk_ec2::Client as Ec2Client;
use ec2scope_core::cloud_provider::{ComputeProvider, InstanceDetails};
use ec2scope_core::error::Result;

use crate::config;
use crate::instance;

pub struct AwsProvider {
    pub ec2_client: Ec2Client,
    pub region: String,
}

impl AwsProvider {
    /// Builds a provider bound to `region`. Credentials come from the
    /// default chain (environment, shared config, instance profile).
    pub async fn new(region: &str) -> Self {
        let config = config::load_sdk_config(region).await;
        let ec2_client = Ec2Client::new(&config);
        Self {
            ec2_client,
            region: region.to_string(),
        }
    }
}

#[async_trait]
impl ComputeProvider for AwsProvider {
    async fn describe_instances(
        &self,
        instance_id: Option<&str>,
    ) -> Result<Vec<InstanceDetails>> {
        instance::describe_instances(&self.ec2_client, &self.region, instance_id).await
    }

    fn region(&self) -> &str {
        &self.region
    }
}
