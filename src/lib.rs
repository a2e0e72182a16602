pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{pipelines::HttpTransferPipeline, run_transfer};
pub use config::toml_config::TomlConfig;
pub use core::etl::EtlEngine;
pub use utils::error::{Result, TransferError};
