use rail_shared::PnrRecord;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::search::TrainSearchResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user_id: u64,
    pub name: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub user_id: u64,
    pub username: String,
}

/// Operation-specific body of a successful call.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ResponseData {
    Login(LoginData),
    Signup(SignupData),
    PnrStatus(PnrRecord),
    SearchTrains(TrainSearchResult),
}

impl ResponseData {
    pub fn as_login(&self) -> Option<&LoginData> {
        match self {
            ResponseData::Login(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_signup(&self) -> Option<&SignupData> {
        match self {
            ResponseData::Signup(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_pnr(&self) -> Option<&PnrRecord> {
        match self {
            ResponseData::PnrStatus(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_search(&self) -> Option<&TrainSearchResult> {
        match self {
            ResponseData::SearchTrains(result) => Some(result),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiSuccess {
    pub message: String,
    pub data: ResponseData,
}

impl ApiSuccess {
    pub fn new(message: &str, data: ResponseData) -> Self {
        Self {
            message: message.to_string(),
            data,
        }
    }
}

/// A failed call. Carries only the text shown to the end user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiFailure {
    pub message: String,
}

impl ApiFailure {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub type ApiResponse = Result<ApiSuccess, ApiFailure>;

/// `{success, message, data?}` body, the shape the front-end consumed.
pub fn to_envelope(response: &ApiResponse) -> Value {
    match response {
        Ok(success) => json!({
            "success": true,
            "message": success.message,
            "data": success.data,
        }),
        Err(failure) => json!({
            "success": false,
            "message": failure.message,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_envelope() {
        let response: ApiResponse = Ok(ApiSuccess::new(
            "Login successful",
            ResponseData::Login(LoginData {
                user_id: 1,
                name: "Demo User".to_string(),
                token: "t".to_string(),
            }),
        ));
        let body = to_envelope(&response);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["userId"], 1);
        assert_eq!(body["data"]["name"], "Demo User");
    }

    #[test]
    fn test_failure_envelope_has_no_data() {
        let response: ApiResponse = Err(ApiFailure::new("PNR not found"));
        let body = to_envelope(&response);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "PNR not found");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn test_accessors_match_variant() {
        let data = ResponseData::Signup(SignupData {
            user_id: 2,
            username: "user1".to_string(),
        });
        assert!(data.as_signup().is_some());
        assert!(data.as_login().is_none());
        assert!(data.as_pnr().is_none());
    }
}
