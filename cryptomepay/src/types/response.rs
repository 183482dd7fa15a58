//! Response envelope shared by every endpoint.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Status code the gateway uses for a successful call.
pub const SUCCESS_CODE: i64 = 200;

/// Envelope wrapping every gateway response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status_code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub request_id: String,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status_code == SUCCESS_CODE
    }

    /// Unwrap the payload, turning an error envelope into an [`ApiError`].
    ///
    /// A success envelope without data is reported as an error too, carrying
    /// the envelope's own code and message.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self.data {
            Some(data) if self.status_code == SUCCESS_CODE => Ok(data),
            _ => Err(ApiError::new(self.status_code, self.message, self.request_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MerchantData, OrderData};

    #[test]
    fn test_into_result_success() {
        let response: ApiResponse<MerchantData> = serde_json::from_str(
            r#"{"status_code":200,"message":"success","data":{"merchant_code":"M001"},"request_id":"req_1"}"#,
        )
        .unwrap();

        assert!(response.is_success());
        assert_eq!(response.into_result().unwrap().merchant_code, "M001");
    }

    #[test]
    fn test_into_result_error_envelope() {
        let response: ApiResponse<MerchantData> = serde_json::from_str(
            r#"{"status_code":1001,"message":"invalid api key","data":null,"request_id":"req_2"}"#,
        )
        .unwrap();

        assert!(!response.is_success());
        let err = response.into_result().unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(err.request_id, "req_2");
    }

    #[test]
    fn test_into_result_success_without_data() {
        let response: ApiResponse<MerchantData> =
            serde_json::from_str(r#"{"status_code":200,"message":"success"}"#).unwrap();

        let err = response.into_result().unwrap_err();
        assert_eq!(err.status_code, 200);
        assert_eq!(err.message, "success");
    }

    // OrderData has no Default impl, so this only decodes if the envelope
    // does not require one of its payload type.
    fn decode_orders(body: &str) -> ApiResponse<OrderData> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_missing_data_decodes_as_none() {
        let response = decode_orders(r#"{"status_code":10008,"message":"order not found"}"#);

        assert_eq!(response.data, None);
        assert_eq!(
            response.into_result().unwrap_err().code(),
            Some(crate::error::ErrorCode::OrderNotFound)
        );
    }

    #[test]
    fn test_missing_status_code_decodes_as_zero() {
        let response = decode_orders(r#"{"message":"bad gateway"}"#);

        assert_eq!(response.status_code, 0);
        assert!(!response.is_success());
        assert_eq!(response.request_id, "");
    }
}
