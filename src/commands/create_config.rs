use crate::config;
use crate::Cli;

/// Check the mandatory flags. Returns the credential pair to write, or
/// the exact list of missing flags.
pub fn validate(cli: &Cli) -> Result<(&str, &str), Vec<&'static str>> {
    if let (Some(client_id), Some(api_key)) = (cli.client_id.as_deref(), cli.api_key.as_deref()) {
        return Ok((client_id, api_key));
    }

    let mut missing = Vec::new();
    if cli.client_id.is_none() {
        missing.push("--client-id");
    }
    if cli.api_key.is_none() {
        missing.push("--api-key");
    }
    Err(missing)
}

/// Write the credential file, overwriting any existing content. A write
/// failure is reported with guidance and does not abort the run; returns
/// whether the file was actually written.
pub fn run(client_id: &str, api_key: &str) -> bool {
    let path = config::config_path();
    match config::save_to(&path, client_id, api_key) {
        Ok(()) => {
            println!("Wrote credentials to {}", path.display());
            true
        }
        Err(err) => {
            println!(
                "Error writing config file! Ensure {} is not a directory and you have permission to write to it ({err:#})",
                path.display()
            );
            false
        }
    }
}
