/// Control-plane API entry point. Unlikely to ever change.
pub const API_BASE_URL: &str = "https://api.digitalocean.com";

/// Env var overriding the API base URL (points the binary at a mock server).
pub const API_BASE_ENV: &str = "OCEANCTL_API_BASE";

/// Credential file in the user's home directory, one `CLIENT_ID:API_KEY` line.
pub const CONFIG_FILE_NAME: &str = ".rubyocean";

/// Env var overriding the credential file path.
pub const CONFIG_PATH_ENV: &str = "OCEANCTL_CONFIG_PATH";
