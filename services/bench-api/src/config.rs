// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Service configuration.
//!
//! Settings come from an optional `bench-api.toml` file in the working
//! directory, overridden by `BULKBENCH_*` environment variables
//! (`BULKBENCH_DATABASE_URL`, `BULKBENCH_LISTEN_ADDR`,
//! `BULKBENCH_DEFAULT_COUNT`). A `.env` file is honored when present.

use std::net::SocketAddr;

use serde::Deserialize;

/// Runtime configuration for the bench API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// PostgreSQL connection string. Required.
    pub database_url: String,
    /// Socket address to serve on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,
    /// Record count used when a request does not pass `?count=`.
    #[serde(default = "default_count")]
    pub default_count: i64,
}

fn default_listen_addr() -> SocketAddr {
    "0.0.0.0:8080".parse().expect("static address")
}

fn default_count() -> i64 {
    5000
}

impl ApiConfig {
    /// Load configuration from file and environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("bench-api").required(false))
            .add_source(config::Environment::with_prefix("BULKBENCH"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_fields() {
        let cfg: ApiConfig =
            serde_json::from_str(r#"{"database_url": "postgres://localhost/bench"}"#).unwrap();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.default_count, 5000);
    }

    #[test]
    fn explicit_values_win() {
        let cfg: ApiConfig = serde_json::from_str(
            r#"{"database_url": "postgres://db/x", "listen_addr": "127.0.0.1:9999", "default_count": 100}"#,
        )
        .unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9999".parse().unwrap());
        assert_eq!(cfg.default_count, 100);
    }
}
