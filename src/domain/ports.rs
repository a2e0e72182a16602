use crate::domain::model::{DestinationUser, SourceUser, SubmitResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn source_endpoint(&self) -> &str;
    fn destination_endpoint(&self) -> &str;
    fn credentials_path(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}

/// 單次傳輸的三個階段；結果判定由 EtlEngine 負責
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourceUser>>;
    async fn transform(&self, users: Vec<SourceUser>) -> Result<Vec<DestinationUser>>;
    async fn load(&self, users: Vec<DestinationUser>) -> Result<SubmitResponse>;
}
