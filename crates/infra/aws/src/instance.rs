use aws_sdk_ec2::{Client as Ec2Client, primitives::DateTime, types::Instance};
use ec2scope_core::{
    cloud_provider::InstanceDetails,
    error::{QueryError, Result},
};
use tracing::debug;

pub(super) async fn describe_instances(
    ec2_client: &Ec2Client,
    region: &str,
    instance_id: Option<&str>,
) -> Result<Vec<InstanceDetails>> {
    debug!(region, filter = ?instance_id, "sending DescribeInstances");

    let mut request = ec2_client.describe_instances();
    if let Some(id) = instance_id {
        request = request.instance_ids(id);
    }

    let resp = request
        .send()
        .await
        .map_err(|error| QueryError::DescribeInstances {
            region: region.to_string(),
            reason: error.to_string(),
        })?;

    let instances: Vec<InstanceDetails> = resp
        .reservations()
        .iter()
        .flat_map(|r| r.instances())
        .map(map_instance)
        .collect();

    debug!(count = instances.len(), "mapped instances");
    Ok(instances)
}

fn map_instance(instance: &Instance) -> InstanceDetails {
    let name = instance
        .tags()
        .iter()
        .find_map(|tag| {
            tag.key()
                .filter(|key| *key == "Name")
                .and_then(|_| tag.value().map(ToString::to_string))
        })
        .unwrap_or_default();

    InstanceDetails {
        id: instance.instance_id().unwrap_or_default().to_string(),
        name,
        instance_type: instance
            .instance_type()
            .map(|instance_type| instance_type.as_str().to_string())
            .unwrap_or_default(),
        state: instance
            .state()
            .and_then(|state| state.name())
            .map(|state_name| state_name.as_str().to_string())
            .unwrap_or_default(),
        public_ip: instance.public_ip_address().unwrap_or_default().to_string(),
        private_ip: instance
            .private_ip_address()
            .unwrap_or_default()
            .to_string(),
        availability_zone: instance
            .placement()
            .and_then(|placement| placement.availability_zone())
            .unwrap_or_default()
            .to_string(),
        ami_id: instance.image_id().unwrap_or_default().to_string(),
        architecture: instance
            .architecture()
            .map(|architecture| architecture.as_str().to_string())
            .unwrap_or_default(),
        launch_time: instance
            .launch_time()
            .map(format_launch_time)
            .unwrap_or_default(),
    }
}

fn format_launch_time(launch_time: &DateTime) -> String {
    chrono::DateTime::from_timestamp(launch_time.secs(), launch_time.subsec_nanos())
        .map(|utc| utc.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_default()
}
