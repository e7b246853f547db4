use oceanctl::api::ApiResponse;
use oceanctl::format;
use oceanctl::resources::{
    self, DomainDetailResponse, DomainList, DropletCreated, DropletList, ImageList, RebootResult,
    RecordCreated, RegionList,
};

fn ok(body: &str) -> ApiResponse {
    ApiResponse {
        status: 200,
        body: body.to_string(),
    }
}

#[test]
fn droplets_table_has_one_row_per_droplet() {
    let list: DropletList = resources::decode(
        &ok(r#"{"droplets":[
            {"id":1,"name":"web1","status":"active","ip_address":"1.2.3.4","region_id":1,"size_id":66,"image_id":473123},
            {"id":2,"name":"web2","status":"new","ip_address":null,"region_id":4,"size_id":66,"image_id":473123}
        ]}"#),
        "droplet list",
    )
    .unwrap();

    let table = format::droplets_table(&list);
    assert_eq!(table.row_count(), 2);
    assert_eq!(
        table.rows()[0],
        vec!["1", "web1", "active", "1.2.3.4", "1", "66", "473123"]
    );
    // a droplet still provisioning has no public ip yet
    assert_eq!(table.rows()[1][3], "");
}

#[test]
fn empty_droplet_list_renders_zero_rows() {
    let list: DropletList = resources::decode(&ok(r#"{"droplets":[]}"#), "droplet list").unwrap();
    assert_eq!(format::droplets_table(&list).row_count(), 0);
}

#[test]
fn droplet_payload_missing_a_field_fails_decode_naming_it() {
    let resp = ok(r#"{"droplets":[{"id":1,"name":"web1","ip_address":"1.2.3.4","region_id":1,"size_id":66,"image_id":473123}]}"#);
    let err = resources::decode::<DropletList>(&resp, "droplet list").unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("decoding droplet list response"), "{msg}");
    assert!(msg.contains("status"), "{msg}");
}

#[test]
fn regions_table_matches_scenario_payload() {
    let list: RegionList = resources::decode(
        &ok(r#"{"regions":[{"id":1,"name":"New York 1"}]}"#),
        "region list",
    )
    .unwrap();
    let table = format::regions_table(&list);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows()[0], vec!["1", "New York 1"]);
}

#[test]
fn images_table_combines_name_and_distribution() {
    let list: ImageList = resources::decode(
        &ok(r#"{"images":[{"id":473123,"name":"12.10 x64","distribution":"Ubuntu"}]}"#),
        "image list",
    )
    .unwrap();
    let table = format::images_table(&list);
    assert_eq!(table.rows()[0], vec!["473123", "12.10 x64 (Ubuntu)"]);
}

#[test]
fn reboot_table_has_status_and_event_id() {
    let result: RebootResult =
        resources::decode(&ok(r#"{"status":"OK","event_id":7501}"#), "reboot").unwrap();
    let table = format::reboot_table(&result);
    assert_eq!(table.rows(), [vec!["OK".to_string(), "7501".to_string()]]);
    assert!(table.to_string().contains("Reboot Results"));
}

#[test]
fn domains_table_lists_id_name_ttl() {
    let list: DomainList = resources::decode(
        &ok(r#"{"domains":[{"id":47188,"name":"example.com","ttl":1800}]}"#),
        "domain list",
    )
    .unwrap();
    let table = format::domains_table(&list);
    assert_eq!(table.rows()[0], vec!["47188", "example.com", "1800"]);
}

#[test]
fn domain_detail_splits_table_from_zone_text() {
    let detail: DomainDetailResponse = resources::decode(
        &ok(r#"{"domain":{
            "id":47188,"name":"example.com","ttl":1800,
            "zone_file_with_error":null,
            "live_zone_file":"$ORIGIN example.com.\n@ IN A 1.2.3.4",
            "error":null
        }}"#),
        "domain detail",
    )
    .unwrap();

    let table = format::domain_detail_table(&detail.domain);
    assert_eq!(table.row_count(), 4);
    assert_eq!(table.rows()[0], vec!["domain id", "47188"]);
    // multi-line zone data never goes through the table
    assert!(!table.to_string().contains("$ORIGIN"));

    let text = format::domain_free_text(&detail.domain);
    assert!(text.contains("Live zone file:"));
    assert!(text.contains("$ORIGIN example.com."));
    assert!(text.contains("Domain errors:"));
}

#[test]
fn record_created_table_is_key_value() {
    let result: RecordCreated = resources::decode(
        &ok(r#"{"status":"OK","record":{"domain_id":47188,"record_type":"A","name":"dev","data":"192.241.245.76"}}"#),
        "domain record",
    )
    .unwrap();
    let table = format::record_created_table(&result);
    assert_eq!(
        table.rows(),
        [
            vec!["status".to_string(), "OK".to_string()],
            vec!["domain id".to_string(), "47188".to_string()],
            vec!["record type".to_string(), "A".to_string()],
            vec!["name".to_string(), "dev".to_string()],
            vec!["data".to_string(), "192.241.245.76".to_string()],
        ]
    );
}

#[test]
fn droplet_created_table_is_key_value() {
    let result: DropletCreated = resources::decode(
        &ok(r#"{"status":"OK","droplet":{"id":100824,"name":"http4","image_id":473123,"size_id":66}}"#),
        "droplet creation",
    )
    .unwrap();
    let table = format::droplet_created_table(&result);
    assert_eq!(table.rows()[1], vec!["droplet id", "100824"]);
    assert!(table.to_string().contains("Droplet Creation Results"));
}
