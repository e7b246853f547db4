use anyhow::Result;

use super::Outcome;
use crate::api::ApiClient;
use crate::format;
use crate::resources::{self, DomainDetailResponse};

pub async fn run(api: &ApiClient, domain_id: &str) -> Result<Outcome> {
    let resp = api.get(&format!("/domains/{domain_id}"), &[]).await?;
    if !resp.is_success() {
        return Ok(Outcome::ApiError {
            action: "getting specific domain data",
            response: resp,
        });
    }
    let detail: DomainDetailResponse = resources::decode(&resp, "domain detail")?;
    println!("{}", format::domain_detail_table(&detail.domain));
    // zone file and error text are raw multi-line data, shown after the table
    println!("{}", format::domain_free_text(&detail.domain));
    Ok(Outcome::Success)
}
