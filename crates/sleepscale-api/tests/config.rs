use std::collections::HashMap;

use jiff::tz::Offset;
use sleepscale_api::config::{ApiConfig, StoreKind};

fn config(vars: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults() {
    let config = config(&[]).unwrap();
    assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
    assert_eq!(config.store, StoreKind::Memory);
    assert_eq!(config.bucket, "sleepscale");
    assert_eq!(config.admin_token, None);
    assert_eq!(config.utc_offset, Offset::from_hours(8).unwrap());
}

#[test]
fn reads_overrides() {
    let config = config(&[
        ("SLEEPSCALE_ADDR", "127.0.0.1:3000"),
        ("SLEEPSCALE_STORE", "s3"),
        ("SLEEPSCALE_BUCKET", "clinic-records"),
        ("SLEEPSCALE_ADMIN_TOKEN", "secret"),
        ("SLEEPSCALE_UTC_OFFSET", "-5"),
        ("AWS_REGION", "ap-east-1"),
    ])
    .unwrap();
    assert_eq!(config.addr.port(), 3000);
    assert_eq!(config.store, StoreKind::S3);
    assert_eq!(config.bucket, "clinic-records");
    assert_eq!(config.admin_token.as_deref(), Some("secret"));
    assert_eq!(config.utc_offset, Offset::from_hours(-5).unwrap());
    assert_eq!(config.region.as_deref(), Some("ap-east-1"));
}

#[test]
fn empty_admin_token_keeps_queries_closed() {
    let config = config(&[("SLEEPSCALE_ADMIN_TOKEN", "")]).unwrap();
    assert_eq!(config.admin_token, None);
}

#[test]
fn rejects_bad_values() {
    assert!(config(&[("SLEEPSCALE_STORE", "postgres")]).is_err());
    assert!(config(&[("SLEEPSCALE_ADDR", "localhost")]).is_err());
    assert!(config(&[("SLEEPSCALE_UTC_OFFSET", "eight")]).is_err());
    assert!(config(&[("SLEEPSCALE_UTC_OFFSET", "30")]).is_err());
}
