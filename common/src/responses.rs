//! The `{ success, data }` envelope every `/api/penguins` endpoint answers with.

use serde::{Deserialize, Serialize};

/// JSON envelope shared by the server handlers and the browser store client.
///
/// A failed call carries `success = false`, no `data` and a human-readable `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Unwraps the envelope, treating `success = false` and a missing payload alike.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("response carried no data".to_string()),
            (false, _) => Err(self
                .error
                .unwrap_or_else(|| "request was not successful".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_envelope_omits_data() {
        let json = serde_json::to_string(&ApiResponse::<Vec<u8>>::failure("boom")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"boom"}"#);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ApiResponse::ok(3).into_result(), Ok(3));
        assert_eq!(
            ApiResponse::<i32>::failure("nope").into_result(),
            Err("nope".to_string())
        );

        let parsed: ApiResponse<i32> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(
            parsed.into_result(),
            Err("request was not successful".to_string())
        );
    }
}
