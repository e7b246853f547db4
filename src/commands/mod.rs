//! Command dispatch.
//!
//! Each requested flag runs in a fixed order, one network round trip at a
//! time. Read commands that hit an API error print the raw response and
//! let the rest of the invocation continue; a mutating command with
//! missing mandatory flags aborts the whole invocation before any I/O.

use anyhow::{bail, Result};

use crate::api::{ApiClient, ApiResponse};
use crate::config::Credentials;
use crate::Cli;

pub mod completions;
pub mod create_config;
pub mod create_domain_record;
pub mod create_droplet;
pub mod get_domains;
pub mod images;
pub mod list_droplets;
pub mod reboot;
pub mod regions;
pub mod sizes;
pub mod ssh_keys;
pub mod view_domain;

/// What a single command did. API errors are data, not process aborts;
/// the dispatcher decides what happens next.
#[derive(Debug)]
pub enum Outcome {
    Success,
    ApiError {
        action: &'static str,
        response: ApiResponse,
    },
}

fn report(outcome: Outcome) {
    if let Outcome::ApiError { action, response } = outcome {
        println!("{action} failed with response: {}", response.body);
    }
}

/// Run every requested command in the fixed order:
/// list droplets, reboot, sizes, ssh-keys, regions, images, get-domains,
/// view-domain, create-domain-record, create-droplet, create-config.
pub async fn run(cli: &Cli, credentials: &Credentials, api: &ApiClient) -> Result<()> {
    let mut wrote_config = false;

    if cli.list_droplets {
        report(list_droplets::run(api).await?);
    }
    if let Some(droplet_id) = &cli.reboot {
        report(reboot::run(api, droplet_id).await?);
    }
    if cli.sizes {
        report(sizes::run(api).await?);
    }
    if cli.ssh_keys {
        report(ssh_keys::run(api).await?);
    }
    if cli.regions {
        report(regions::run(api).await?);
    }
    if cli.images {
        report(images::run(api).await?);
    }
    if cli.get_domains {
        report(get_domains::run(api).await?);
    }
    if let Some(domain_id) = &cli.view_domain {
        report(view_domain::run(api, domain_id).await?);
    }

    if cli.create_domain_record {
        match create_domain_record::validate(cli) {
            Ok(spec) => report(create_domain_record::run(api, &spec).await?),
            Err(missing) => bail!("Missing options: {}", missing.join(", ")),
        }
    }
    if cli.create_droplet {
        match create_droplet::validate(cli) {
            Ok(spec) => report(create_droplet::run(api, &spec).await?),
            Err(missing) => bail!("Missing options: {}", missing.join(", ")),
        }
    }
    if cli.create_config {
        match create_config::validate(cli) {
            Ok((client_id, api_key)) => {
                wrote_config = create_config::run(client_id, api_key);
            }
            Err(missing) => bail!("Missing options: {}", missing.join(", ")),
        }
    }

    if credentials.looks_unset() && !wrote_config {
        println!("Did you forget to set your API key and client ID? Run:\n");
        println!("  oceanctl --create-config --client-id YOUR_CLIENT_ID --api-key YOUR_API_KEY\n");
    }

    Ok(())
}
