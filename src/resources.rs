//! Typed schemas for the API payloads oceanctl consumes.
//!
//! Responses are decoded strictly into these structs before any formatting
//! happens; a payload missing an expected field fails the whole command
//! with an error naming the field instead of producing partial rows.

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::ApiResponse;

/// Decode a successful response body into a typed resource.
pub fn decode<T: DeserializeOwned>(resp: &ApiResponse, what: &str) -> anyhow::Result<T> {
    serde_json::from_str(&resp.body).with_context(|| format!("decoding {what} response"))
}

#[derive(Debug, Deserialize)]
pub struct DropletList {
    pub droplets: Vec<Droplet>,
}

#[derive(Debug, Deserialize)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    pub status: String,
    /// Absent until the droplet finishes provisioning.
    pub ip_address: Option<String>,
    pub region_id: u64,
    pub size_id: u64,
    pub image_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct RebootResult {
    pub status: String,
    pub event_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct SizeList {
    pub sizes: Vec<Size>,
}

#[derive(Debug, Deserialize)]
pub struct Size {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SshKeyList {
    pub ssh_keys: Vec<SshKey>,
}

#[derive(Debug, Deserialize)]
pub struct SshKey {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RegionList {
    pub regions: Vec<Region>,
}

#[derive(Debug, Deserialize)]
pub struct Region {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageList {
    pub images: Vec<Image>,
}

#[derive(Debug, Deserialize)]
pub struct Image {
    pub id: u64,
    pub name: String,
    pub distribution: String,
}

#[derive(Debug, Deserialize)]
pub struct DomainList {
    pub domains: Vec<DomainSummary>,
}

#[derive(Debug, Deserialize)]
pub struct DomainSummary {
    pub id: u64,
    pub name: String,
    pub ttl: u64,
}

#[derive(Debug, Deserialize)]
pub struct DomainDetailResponse {
    pub domain: DomainDetail,
}

#[derive(Debug, Deserialize)]
pub struct DomainDetail {
    pub id: u64,
    pub name: String,
    pub ttl: u64,
    /// Marker for a zone file the nameservers rejected.
    pub zone_file_with_error: Option<String>,
    pub live_zone_file: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordCreated {
    pub status: String,
    pub record: DomainRecord,
}

#[derive(Debug, Deserialize)]
pub struct DomainRecord {
    pub domain_id: u64,
    pub record_type: String,
    pub name: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct DropletCreated {
    pub status: String,
    pub droplet: NewDroplet,
}

#[derive(Debug, Deserialize)]
pub struct NewDroplet {
    pub id: u64,
    pub name: String,
    pub image_id: u64,
    pub size_id: u64,
}
