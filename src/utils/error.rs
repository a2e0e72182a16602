use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Startup configuration error: {message}")]
    StartupConfig { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed source data: {message}")]
    MalformedInput { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Http,
    Data,
}

impl TransferError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TransferError::StartupConfig { .. } | TransferError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            TransferError::Transport(_) => ErrorCategory::Network,
            TransferError::HttpStatus { .. } => ErrorCategory::Http,
            TransferError::MalformedInput { .. } | TransferError::Serialization(_) => {
                ErrorCategory::Data
            }
        }
    }

    /// 啟動階段錯誤：尚未發出任何網路請求
    pub fn is_startup_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    /// HTTP 狀態碼（僅限伺服器回應錯誤）
    pub fn status(&self) -> Option<u16> {
        match self {
            TransferError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Terminal failure message. Errors carrying a status and body get the
    /// multi-line HTTP layout, everything else falls back to its display text.
    pub fn report(&self) -> String {
        match self {
            TransferError::HttpStatus { status, body } => format!(
                "An HTTP Error Occurred\nStatus: {}\nmessage: \"{}\"",
                status, body
            ),
            other => other.to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("設定錯誤，傳輸未開始: {}", self),
            ErrorCategory::Network => format!("無法連線到遠端服務: {}", self),
            ErrorCategory::Http => format!("遠端服務回應失敗 (status {})", self.status().unwrap_or(0)),
            ErrorCategory::Data => format!("資料格式錯誤: {}", self),
        }
    }

    /// Every failure ends the run the same way.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, TransferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_http_status_layout() {
        let err = TransferError::HttpStatus {
            status: 500,
            body: "internal failure".to_string(),
        };

        assert_eq!(
            err.report(),
            "An HTTP Error Occurred\nStatus: 500\nmessage: \"internal failure\""
        );
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.category(), ErrorCategory::Http);
    }

    #[test]
    fn test_report_falls_back_to_display() {
        let err = TransferError::MalformedInput {
            message: "expected an array".to_string(),
        };

        assert_eq!(err.report(), "Malformed source data: expected an array");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_startup_errors_are_configuration() {
        let err = TransferError::StartupConfig {
            message: "credentials file missing".to_string(),
        };
        assert!(err.is_startup_error());
        assert_eq!(err.exit_code(), 1);

        let invalid = TransferError::InvalidConfigValue {
            field: "source.endpoint".to_string(),
            value: "nope".to_string(),
            reason: "Invalid URL format".to_string(),
        };
        assert!(invalid.is_startup_error());

        let rejected = TransferError::HttpStatus {
            status: 500,
            body: String::new(),
        };
        assert!(!rejected.is_startup_error());
    }
}
