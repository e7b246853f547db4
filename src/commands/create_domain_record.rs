use anyhow::Result;

use super::Outcome;
use crate::api::ApiClient;
use crate::format;
use crate::resources::{self, RecordCreated};
use crate::Cli;

/// Everything needed to create one DNS record, borrowed from the flag set.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordSpec<'a> {
    pub record_type: &'a str,
    pub data: &'a str,
    pub name: &'a str,
    pub domain_id: &'a str,
}

/// Check the mandatory flags before anything touches the network. Returns
/// the exact list of missing flags on failure.
pub fn validate(cli: &Cli) -> Result<RecordSpec<'_>, Vec<&'static str>> {
    if let (Some(record_type), Some(data), Some(name), Some(domain_id)) = (
        cli.record_type.as_deref(),
        cli.record_data.as_deref(),
        cli.record_name.as_deref(),
        cli.domain_id.as_deref(),
    ) {
        return Ok(RecordSpec {
            record_type,
            data,
            name,
            domain_id,
        });
    }

    let mut missing = Vec::new();
    if cli.record_type.is_none() {
        missing.push("--record-type");
    }
    if cli.record_data.is_none() {
        missing.push("--record-data");
    }
    if cli.record_name.is_none() {
        missing.push("--record-name");
    }
    if cli.domain_id.is_none() {
        missing.push("--domain-id");
    }
    Err(missing)
}

pub async fn run(api: &ApiClient, spec: &RecordSpec<'_>) -> Result<Outcome> {
    let resp = api
        .get(
            &format!("/domains/{}/records/new", spec.domain_id),
            &[
                ("record_type", spec.record_type),
                ("data", spec.data),
                ("name", spec.name),
            ],
        )
        .await?;
    if !resp.is_success() {
        return Ok(Outcome::ApiError {
            action: "creating new entry",
            response: resp,
        });
    }
    let result: RecordCreated = resources::decode(&resp, "domain record")?;
    println!("{}", format::record_created_table(&result));
    Ok(Outcome::Success)
}
