use std::net::SocketAddr;

use eyre::{WrapErr, bail};
use jiff::tz::Offset;

/// Which record store backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    S3,
    Memory,
}

/// Server configuration, read from `SLEEPSCALE_*` environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub addr: SocketAddr,
    pub store: StoreKind,
    pub bucket: String,
    /// Region override for the S3 client; the default chain is used otherwise.
    pub region: Option<String>,
    /// Bearer token for the query endpoints. Without one they stay closed.
    pub admin_token: Option<String>,
    /// Clinic-local offset used to date submissions.
    pub utc_offset: Offset,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let addr: SocketAddr = lookup("SLEEPSCALE_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .wrap_err("SLEEPSCALE_ADDR is not a socket address")?;

        let store = match lookup("SLEEPSCALE_STORE").as_deref() {
            None | Some("memory") => StoreKind::Memory,
            Some("s3") => StoreKind::S3,
            Some(other) => bail!("SLEEPSCALE_STORE must be 's3' or 'memory', got {other:?}"),
        };

        let hours: i8 = match lookup("SLEEPSCALE_UTC_OFFSET") {
            Some(v) => v
                .trim()
                .parse()
                .wrap_err("SLEEPSCALE_UTC_OFFSET must be a whole number of hours")?,
            None => 8,
        };
        let utc_offset =
            Offset::from_hours(hours).wrap_err("SLEEPSCALE_UTC_OFFSET is out of range")?;

        Ok(Self {
            addr,
            store,
            bucket: lookup("SLEEPSCALE_BUCKET").unwrap_or_else(|| "sleepscale".to_string()),
            region: lookup("AWS_REGION"),
            admin_token: lookup("SLEEPSCALE_ADMIN_TOKEN").filter(|t| !t.is_empty()),
            utc_offset,
        })
    }
}
