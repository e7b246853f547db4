use anyhow::Result;

use super::Outcome;
use crate::api::ApiClient;
use crate::format;
use crate::resources::{self, SshKeyList};

pub async fn run(api: &ApiClient) -> Result<Outcome> {
    let resp = api.get("/ssh_keys/", &[]).await?;
    if !resp.is_success() {
        return Ok(Outcome::ApiError {
            action: "listing ssh keys",
            response: resp,
        });
    }
    let list: SshKeyList = resources::decode(&resp, "ssh key list")?;
    println!("{}", format::ssh_keys_table(&list));
    Ok(Outcome::Success)
}
