use anyhow::Result;

use super::Outcome;
use crate::api::ApiClient;
use crate::format;
use crate::resources::{self, DomainList};

pub async fn run(api: &ApiClient) -> Result<Outcome> {
    let resp = api.get("/domains", &[]).await?;
    if !resp.is_success() {
        return Ok(Outcome::ApiError {
            action: "getting domain data",
            response: resp,
        });
    }
    let list: DomainList = resources::decode(&resp, "domain list")?;
    println!("{}", format::domains_table(&list));
    Ok(Outcome::Success)
}
