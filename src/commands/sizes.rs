use anyhow::Result;

use super::Outcome;
use crate::api::ApiClient;
use crate::format;
use crate::resources::{self, SizeList};

pub async fn run(api: &ApiClient) -> Result<Outcome> {
    let resp = api.get("/sizes/", &[]).await?;
    if !resp.is_success() {
        return Ok(Outcome::ApiError {
            action: "listing sizes",
            response: resp,
        });
    }
    let list: SizeList = resources::decode(&resp, "size list")?;
    println!("{}", format::sizes_table(&list));
    Ok(Outcome::Success)
}
