use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 來源 API 的使用者記錄，未列出的欄位（id、email、geo…）一律忽略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceUser {
    pub name: String,
    pub company: SourceCompany,
    pub address: SourceAddress,
    pub website: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceCompany {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAddress {
    pub street: String,
    pub city: String,
    pub zipcode: String,
}

/// 目的端格式。解析不到的姓名欄位序列化時直接省略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub company_name: String,
    pub company_full_address: String,
    pub website: String,
    pub phone: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub userid: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("userid", &self.userid)
            .field("password", &"***")
            .finish()
    }
}

pub const OUTPUT_TYPE: &str = "Json";

#[derive(Clone, Serialize)]
pub struct SubmissionEnvelope {
    pub userid: String,
    pub password: String,
    pub outputtype: String,
    pub users: Vec<DestinationUser>,
}

impl SubmissionEnvelope {
    pub fn new(credentials: &Credentials, users: Vec<DestinationUser>) -> Self {
        Self {
            userid: credentials.userid.clone(),
            password: credentials.password.clone(),
            outputtype: OUTPUT_TYPE.to_string(),
            users,
        }
    }

    /// 日誌用的 JSON，密碼以 *** 取代
    pub fn to_redacted_json(&self) -> serde_json::Result<String> {
        let mut value = serde_json::to_value(self)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert(
                "password".to_string(),
                serde_json::Value::String("***".to_string()),
            );
        }
        serde_json::to_string(&value)
    }
}

/// Raw answer from the write endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferReport {
    pub fetched: usize,
    pub submitted: usize,
    pub status: u16,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_user_ignores_unknown_fields() {
        let json = serde_json::json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": {"lat": "-37.3159", "lng": "81.1496"}
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered"}
        });

        let user: SourceUser = serde_json::from_value(json).unwrap();
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.company.name, "Romaguera-Crona");
        assert_eq!(user.address.zipcode, "92998-3874");
    }

    #[test]
    fn test_destination_user_omits_missing_names() {
        let user = DestinationUser {
            first_name: Some("Cher".to_string()),
            last_name: None,
            company_name: "Acme".to_string(),
            company_full_address: "1 Main St, Springfield, 00000".to_string(),
            website: "acme.test".to_string(),
            phone: "5551234567".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["first_name"], "Cher");
        assert!(value.get("last_name").is_none());
    }

    #[test]
    fn test_envelope_shape_and_redaction() {
        let credentials = Credentials {
            userid: "agent".to_string(),
            password: "hunter2".to_string(),
        };
        let envelope = SubmissionEnvelope::new(&credentials, Vec::new());

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["userid"], "agent");
        assert_eq!(value["password"], "hunter2");
        assert_eq!(value["outputtype"], "Json");
        assert_eq!(value["users"], serde_json::json!([]));

        let redacted = envelope.to_redacted_json().unwrap();
        assert!(!redacted.contains("hunter2"));
        assert!(redacted.contains("\"outputtype\":\"Json\""));
        assert!(!format!("{:?}", credentials).contains("hunter2"));
    }
}
