pub mod pipelines;

use crate::core::etl::EtlEngine;
use crate::core::{ConfigProvider, TransferReport};
use crate::utils::error::Result;
use pipelines::HttpTransferPipeline;

/// 載入憑證後執行完整傳輸流程
pub async fn run_transfer<C: ConfigProvider>(config: C) -> Result<TransferReport> {
    let pipeline = HttpTransferPipeline::from_config(config)?;
    EtlEngine::new(pipeline).run().await
}
