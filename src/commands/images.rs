use anyhow::Result;

use super::Outcome;
use crate::api::ApiClient;
use crate::format;
use crate::resources::{self, ImageList};

pub async fn run(api: &ApiClient) -> Result<Outcome> {
    let resp = api.get("/images/", &[]).await?;
    if !resp.is_success() {
        return Ok(Outcome::ApiError {
            action: "listing images",
            response: resp,
        });
    }
    let list: ImageList = resources::decode(&resp, "image list")?;
    println!("{}", format::images_table(&list));
    Ok(Outcome::Success)
}
