use crate::domain::model::SubmitResponse;
use crate::utils::error::{Result, TransferError};

pub const SUCCESS_STATUS: u16 = 200;

/// 只有 200 算成功，其他狀態碼（包含其他 2xx）都帶著完整回應往上拋
pub fn check_outcome(response: SubmitResponse) -> Result<SubmitResponse> {
    if response.status == SUCCESS_STATUS {
        tracing::info!("✅ Users submitted successfully (status {})", response.status);
        Ok(response)
    } else {
        tracing::warn!("Destination rejected submission with status {}", response.status);
        Err(TransferError::HttpStatus {
            status: response.status,
            body: response.body,
        })
    }
}
