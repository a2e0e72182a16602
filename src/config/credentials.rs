use crate::domain::model::Credentials;
use crate::utils::error::{Result, TransferError};
use std::path::Path;

impl Credentials {
    /// 啟動時讀取一次，檔案不存在或格式錯誤都是致命錯誤
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| TransferError::StartupConfig {
                message: format!("cannot read credentials file {}: {}", path.display(), e),
            })?;
        Self::from_json_str(&content).map_err(|e| TransferError::StartupConfig {
            message: format!("credentials file {} is malformed: {}", path.display(), e),
        })
    }

    pub fn from_json_str(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
