use clap::Parser;
use user_transfer::utils::{logger, validation::Validate};
use user_transfer::{run_transfer, CliConfig, TomlConfig, TransferError};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting user-transfer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = match config.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(toml_config) => execute(toml_config).await,
            Err(e) => Err(e),
        },
        None => execute(config).await,
    };

    match result {
        Ok(report) => {
            tracing::info!(
                "✅ Transfer completed: {} fetched, {} submitted, status {}, took {}ms",
                report.fetched,
                report.submitted,
                report.status,
                (report.finished_at - report.started_at).num_milliseconds()
            );
            println!("✅ Transferred {} users", report.submitted);
        }
        Err(e) => {
            tracing::error!("❌ Transfer failed (Category: {:?})", e.category());
            tracing::error!("{}", e.report());
            eprintln!("{}", e.report());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

async fn execute<C>(config: C) -> Result<user_transfer::core::TransferReport, TransferError>
where
    C: user_transfer::core::ConfigProvider + Validate,
{
    // 驗證配置
    config.validate()?;
    run_transfer(config).await
}
