use anyhow::Result;

use super::Outcome;
use crate::api::ApiClient;
use crate::format;
use crate::resources::{self, RegionList};

pub async fn run(api: &ApiClient) -> Result<Outcome> {
    let resp = api.get("/regions/", &[]).await?;
    if !resp.is_success() {
        return Ok(Outcome::ApiError {
            action: "listing regions",
            response: resp,
        });
    }
    let list: RegionList = resources::decode(&resp, "region list")?;
    println!("{}", format::regions_table(&list));
    Ok(Outcome::Success)
}
