use aws_config::{SdkConfig, meta::region::RegionProviderChain};
use aws_sdk_ec2::config::Region;

pub(super) async fn load_sdk_config(region: &str) -> SdkConfig {
    let region_provider =
        RegionProviderChain::first_try(Region::new(region.to_string())).or_default_provider();
    aws_config::from_env().region(region_provider).load().await
}
