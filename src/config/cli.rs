use crate::config::{DEFAULT_CREDENTIALS_PATH, DEFAULT_DESTINATION_ENDPOINT, DEFAULT_SOURCE_ENDPOINT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_timeout, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "user-transfer")]
#[command(about = "Fetch template users, reformat them and submit the batch to the destination API")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_SOURCE_ENDPOINT)]
    pub source_endpoint: String,

    #[arg(long, default_value = DEFAULT_DESTINATION_ENDPOINT)]
    pub destination_endpoint: String,

    #[arg(long, default_value = DEFAULT_CREDENTIALS_PATH)]
    pub credentials: String,

    #[arg(long, help = "Timeout in seconds for both the source and destination requests (no timeout when omitted)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML configuration file; replaces the endpoint and credentials flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn source_endpoint(&self) -> &str {
        &self.source_endpoint
    }

    fn destination_endpoint(&self) -> &str {
        &self.destination_endpoint
    }

    fn credentials_path(&self) -> &str {
        &self.credentials
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source_endpoint", &self.source_endpoint)?;
        validate_url("destination_endpoint", &self.destination_endpoint)?;
        validate_path("credentials", &self.credentials)?;
        validate_timeout("timeout_seconds", self.timeout_seconds)?;
        Ok(())
    }
}
