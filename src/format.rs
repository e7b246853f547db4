//! Presentation of decoded API resources as display tables.
//!
//! Pure functions, one per resource kind. Inputs are the typed structs
//! from [`crate::resources`]; nothing here touches raw JSON or the
//! network.

use crate::resources::{
    DomainDetail, DomainList, DropletCreated, DropletList, ImageList, RebootResult, RecordCreated,
    RegionList, SizeList, SshKeyList,
};
use crate::table::Table;

pub fn droplets_table(list: &DropletList) -> Table {
    let mut t = Table::new([
        "id",
        "name",
        "status",
        "public ip",
        "region id",
        "size id",
        "image id",
    ]);
    for d in &list.droplets {
        t.add_row([
            d.id.to_string(),
            d.name.clone(),
            d.status.clone(),
            d.ip_address.clone().unwrap_or_default(),
            d.region_id.to_string(),
            d.size_id.to_string(),
            d.image_id.to_string(),
        ]);
    }
    t
}

pub fn reboot_table(result: &RebootResult) -> Table {
    let mut t = Table::new(["status", "event id"]).with_title("Reboot Results");
    t.add_row([result.status.clone(), result.event_id.to_string()]);
    t
}

pub fn sizes_table(list: &SizeList) -> Table {
    let mut t = Table::new(["id", "size name (RAM)"]);
    for s in &list.sizes {
        t.add_row([s.id.to_string(), s.name.clone()]);
    }
    t
}

pub fn ssh_keys_table(list: &SshKeyList) -> Table {
    let mut t = Table::new(["id", "ssh key name"]);
    for k in &list.ssh_keys {
        t.add_row([k.id.to_string(), k.name.clone()]);
    }
    t
}

pub fn regions_table(list: &RegionList) -> Table {
    let mut t = Table::new(["id", "region name"]);
    for r in &list.regions {
        t.add_row([r.id.to_string(), r.name.clone()]);
    }
    t
}

pub fn images_table(list: &ImageList) -> Table {
    let mut t = Table::new(["id", "name (distribution)"]).with_title("Available Droplet Images");
    for i in &list.images {
        t.add_row([i.id.to_string(), format!("{} ({})", i.name, i.distribution)]);
    }
    t
}

pub fn domains_table(list: &DomainList) -> Table {
    let mut t = Table::new(["id", "name", "ttl"]).with_title("Account Domains");
    for d in &list.domains {
        t.add_row([d.id.to_string(), d.name.clone(), d.ttl.to_string()]);
    }
    t
}

/// Tabular half of the single-domain view. The zone file and error text
/// are returned by [`domain_free_text`] and printed separately, since raw
/// zone data does not survive cell formatting.
pub fn domain_detail_table(domain: &DomainDetail) -> Table {
    let mut t = Table::key_value("Domain Details");
    t.add_row(["domain id".to_string(), domain.id.to_string()]);
    t.add_row(["name".to_string(), domain.name.clone()]);
    t.add_row(["ttl".to_string(), domain.ttl.to_string()]);
    t.add_row([
        "zone file errors".to_string(),
        domain.zone_file_with_error.clone().unwrap_or_default(),
    ]);
    t
}

/// Free-text tail of the single-domain view: live zone file, then errors.
pub fn domain_free_text(domain: &DomainDetail) -> String {
    format!(
        "\nLive zone file:\n\n{}\n\n\nDomain errors:\n\n{}\n",
        domain.live_zone_file.as_deref().unwrap_or(""),
        domain.error.as_deref().unwrap_or("")
    )
}

pub fn record_created_table(result: &RecordCreated) -> Table {
    let mut t = Table::key_value("DNS Results");
    t.add_row(["status".to_string(), result.status.clone()]);
    t.add_row(["domain id".to_string(), result.record.domain_id.to_string()]);
    t.add_row(["record type".to_string(), result.record.record_type.clone()]);
    t.add_row(["name".to_string(), result.record.name.clone()]);
    t.add_row(["data".to_string(), result.record.data.clone()]);
    t
}

pub fn droplet_created_table(result: &DropletCreated) -> Table {
    let mut t = Table::key_value("Droplet Creation Results");
    t.add_row(["status".to_string(), result.status.clone()]);
    t.add_row(["droplet id".to_string(), result.droplet.id.to_string()]);
    t.add_row(["name".to_string(), result.droplet.name.clone()]);
    t.add_row(["image id".to_string(), result.droplet.image_id.to_string()]);
    t.add_row(["size id".to_string(), result.droplet.size_id.to_string()]);
    t
}
