use anyhow::Result;

use super::Outcome;
use crate::api::ApiClient;
use crate::format;
use crate::resources::{self, DropletList};

pub async fn run(api: &ApiClient) -> Result<Outcome> {
    let resp = api.get("/droplets/", &[]).await?;
    if !resp.is_success() {
        return Ok(Outcome::ApiError {
            action: "listing droplets",
            response: resp,
        });
    }
    let list: DropletList = resources::decode(&resp, "droplet list")?;
    println!("{}", format::droplets_table(&list));
    Ok(Outcome::Success)
}
