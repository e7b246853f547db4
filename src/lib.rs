//! # oceanctl
//!
//! Command-line client for the DigitalOcean control-plane API.
//!
//! Lists, creates, and reboots droplets, and manages DNS domains and domain
//! records, authenticating with the client-id/api-key pair stored in
//! `~/.rubyocean` (or passed to `--create-config`).
//!
//! Commands are independent flags and may be chained in one invocation:
//!
//! ```bash
//! # gather everything needed before creating a droplet
//! oceanctl -l -g -i -k
//!
//! # then create it
//! oceanctl --create-droplet --droplet-name http4 --droplet-size 66 \
//!     --droplet-image 473123 --droplet-region 4 --droplet-keys 11709
//! ```

use clap::Parser;

pub mod api;
pub mod commands;
pub mod config;
pub mod constants;
pub mod format;
pub mod resources;
pub mod table;

/// Parsed command-line flags for a single invocation.
///
/// Every command is an optional flag; any combination may be requested at
/// once and runs in a fixed order (see [`commands::run`]). Built once by
/// argument parsing and passed around immutably.
#[derive(Parser, Debug)]
#[command(
    name = "oceanctl",
    version,
    about = "Manage DigitalOcean droplets and DNS from the command line",
    long_about = "Command-line client for the DigitalOcean control-plane API.\n\nCommands are independent flags and can be chained in a single invocation,\ne.g. `oceanctl -l -g -i -k` to gather all the IDs needed before creating\na droplet. Credentials are read from ~/.rubyocean (see --create-config)."
)]
pub struct Cli {
    /// List droplets
    #[arg(short = 'l', long = "list-droplets")]
    pub list_droplets: bool,

    /// Run verbosely (debug logging)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Reboot the droplet with the given ID (obtained via -l)
    #[arg(short = 'r', long = "reboot", value_name = "DROPLET_ID")]
    pub reboot: Option<String>,

    /// List available droplet sizes
    #[arg(short = 's', long = "sizes")]
    pub sizes: bool,

    /// List the SSH keys tied to the account
    #[arg(short = 'k', long = "ssh-keys")]
    pub ssh_keys: bool,

    /// List available droplet regions
    #[arg(short = 'g', long = "regions")]
    pub regions: bool,

    /// List available droplet images
    #[arg(short = 'i', long = "images")]
    pub images: bool,

    /// List the domains attached to the account
    #[arg(long = "get-domains")]
    pub get_domains: bool,

    /// View data for a specific domain ID
    #[arg(long = "view-domain", value_name = "DOMAIN_ID")]
    pub view_domain: Option<String>,

    /// Create a new domain record (requires the --record-* flags and --domain-id)
    #[arg(long = "create-domain-record")]
    pub create_domain_record: bool,

    /// Record type: A, CNAME, NS, TXT, MX, SRV
    #[arg(long = "record-type", value_name = "TYPE")]
    pub record_type: Option<String>,

    /// Value of the record
    #[arg(long = "record-data", value_name = "DATA")]
    pub record_data: Option<String>,

    /// Record name, required for A, CNAME, TXT, SRV
    #[arg(long = "record-name", value_name = "NAME")]
    pub record_name: Option<String>,

    /// Domain to create the record on, as obtained via --get-domains
    #[arg(long = "domain-id", value_name = "DOMAIN_ID")]
    pub domain_id: Option<String>,

    /// Create a new droplet (requires the --droplet-* flags)
    #[arg(short = 'c', long = "create-droplet")]
    pub create_droplet: bool,

    /// Hostname of the new droplet
    #[arg(long = "droplet-name", value_name = "NAME")]
    pub droplet_name: Option<String>,

    /// Size ID of the new droplet (view available with -s)
    #[arg(long = "droplet-size", value_name = "SIZE_ID")]
    pub droplet_size: Option<String>,

    /// Image ID to apply to the new droplet (view available with -i)
    #[arg(long = "droplet-image", value_name = "IMAGE_ID")]
    pub droplet_image: Option<String>,

    /// Region ID for the new droplet (view available with -g)
    #[arg(long = "droplet-region", value_name = "REGION_ID")]
    pub droplet_region: Option<String>,

    /// SSH key IDs for the root account, comma-separated with no spaces
    #[arg(long = "droplet-keys", value_name = "KEY_IDS")]
    pub droplet_keys: Option<String>,

    /// Write the credential config file to ~/.rubyocean
    #[arg(long = "create-config")]
    pub create_config: bool,

    /// Client ID to write to the config file
    #[arg(long = "client-id", value_name = "CLIENT_ID")]
    pub client_id: Option<String>,

    /// API key to write to the config file
    #[arg(long = "api-key", value_name = "API_KEY")]
    pub api_key: Option<String>,

    /// Emit a shell completion script (bash/zsh/fish) and exit
    #[arg(long = "completions", value_name = "SHELL")]
    pub completions: Option<String>,
}
