use anyhow::Result;

use super::Outcome;
use crate::api::ApiClient;
use crate::format;
use crate::resources::{self, RebootResult};

pub async fn run(api: &ApiClient, droplet_id: &str) -> Result<Outcome> {
    let resp = api.get(&format!("/droplets/{droplet_id}/reboot/"), &[]).await?;
    if !resp.is_success() {
        return Ok(Outcome::ApiError {
            action: "reboot",
            response: resp,
        });
    }
    let result: RebootResult = resources::decode(&resp, "reboot")?;
    println!("{}", format::reboot_table(&result));
    Ok(Outcome::Success)
}
