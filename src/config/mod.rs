pub mod credentials;
pub mod toml_config;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_SOURCE_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_DESTINATION_ENDPOINT: &str = "https://dev.app.homecarepulse.com/Primary/?FlowId=7423bd80-cddb-11ea-9160-326dddd3e106&Action=api";
pub const DEFAULT_CREDENTIALS_PATH: &str = "credentials.json";
