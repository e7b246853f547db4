//! Credential storage for oceanctl.
//!
//! Credentials are a single `CLIENT_ID:API_KEY` line in `~/.rubyocean`
//! (the path predates this tool and is kept so existing config files keep
//! working). The path can be overridden with `OCEANCTL_CONFIG_PATH`.

use anyhow::{anyhow, Context};
use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::constants::{CONFIG_FILE_NAME, CONFIG_PATH_ENV};

/// The client-id/api-key pair authenticating every API request.
///
/// Loaded once at startup and immutable for the rest of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub api_key: String,
}

impl Credentials {
    /// True when both halves are too short to be real credentials, which
    /// drives the end-of-run reminder to create a config file.
    pub fn looks_unset(&self) -> bool {
        self.client_id.len() < 10 && self.api_key.len() < 10
    }
}

/// Resolve the credential file path: env override, else `~/.rubyocean`.
pub fn config_path() -> PathBuf {
    env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut p = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            p.push(CONFIG_FILE_NAME);
            p
        })
}

/// Read credentials from `path`. Fails if the file is absent or the line
/// has no colon separator.
pub fn load_from(path: &Path) -> anyhow::Result<Credentials> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading credentials from {}", path.display()))?;
    let line = data.trim();
    let (client_id, api_key) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("malformed credential file {}: expected CLIENT_ID:API_KEY", path.display()))?;
    Ok(Credentials {
        client_id: client_id.to_string(),
        api_key: api_key.to_string(),
    })
}

/// Load credentials from the resolved path, falling back to empty
/// credentials if the file is absent or unreadable. The fallback is
/// surfaced through tracing rather than swallowed.
pub fn load_or_default() -> Credentials {
    let path = config_path();
    match load_from(&path) {
        Ok(creds) => creds,
        Err(err) => {
            if path.exists() {
                tracing::warn!("ignoring credential file: {err:#}");
            } else {
                tracing::debug!("no credential file at {}", path.display());
            }
            Credentials::default()
        }
    }
}

/// Write `CLIENT_ID:API_KEY` to `path`, truncating any existing content.
/// No trailing newline, so a save/load round trip reproduces the file.
pub fn save_to(path: &Path, client_id: &str, api_key: &str) -> anyhow::Result<()> {
    fs::write(path, format!("{client_id}:{api_key}"))
        .with_context(|| format!("writing credentials to {}", path.display()))?;
    Ok(())
}
