use anyhow::Result;

use super::Outcome;
use crate::api::ApiClient;
use crate::format;
use crate::resources::{self, DropletCreated};
use crate::Cli;

/// Everything needed to create one droplet, borrowed from the flag set.
/// `ssh_key_ids` is passed through comma-separated, exactly as typed.
#[derive(Debug, PartialEq, Eq)]
pub struct DropletSpec<'a> {
    pub name: &'a str,
    pub size_id: &'a str,
    pub image_id: &'a str,
    pub region_id: &'a str,
    pub ssh_key_ids: &'a str,
}

/// Check the mandatory flags before anything touches the network. Returns
/// the exact list of missing flags on failure.
pub fn validate(cli: &Cli) -> Result<DropletSpec<'_>, Vec<&'static str>> {
    if let (Some(name), Some(size_id), Some(image_id), Some(region_id), Some(ssh_key_ids)) = (
        cli.droplet_name.as_deref(),
        cli.droplet_size.as_deref(),
        cli.droplet_image.as_deref(),
        cli.droplet_region.as_deref(),
        cli.droplet_keys.as_deref(),
    ) {
        return Ok(DropletSpec {
            name,
            size_id,
            image_id,
            region_id,
            ssh_key_ids,
        });
    }

    let mut missing = Vec::new();
    if cli.droplet_name.is_none() {
        missing.push("--droplet-name");
    }
    if cli.droplet_size.is_none() {
        missing.push("--droplet-size");
    }
    if cli.droplet_image.is_none() {
        missing.push("--droplet-image");
    }
    if cli.droplet_region.is_none() {
        missing.push("--droplet-region");
    }
    if cli.droplet_keys.is_none() {
        missing.push("--droplet-keys");
    }
    Err(missing)
}

pub async fn run(api: &ApiClient, spec: &DropletSpec<'_>) -> Result<Outcome> {
    let resp = api
        .get(
            "/droplets/new",
            &[
                ("name", spec.name),
                ("size_id", spec.size_id),
                ("image_id", spec.image_id),
                ("region_id", spec.region_id),
                ("ssh_key_ids", spec.ssh_key_ids),
            ],
        )
        .await?;
    if !resp.is_success() {
        return Ok(Outcome::ApiError {
            action: "creating new droplet",
            response: resp,
        });
    }
    let result: DropletCreated = resources::decode(&resp, "droplet creation")?;
    println!("{}", format::droplet_created_table(&result));
    Ok(Outcome::Success)
}
