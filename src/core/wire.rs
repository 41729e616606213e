use std::fmt;

use serde::{Deserialize, Serialize};

/// The `{ result, error }` body shared by every `<endpoint>Response` envelope.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub(crate) result: Option<Vec<T>>,
    #[serde(default)]
    pub(crate) error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    /// Split into records or the embedded error object.
    pub(crate) fn into_result(self) -> Result<Vec<T>, ApiError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result.unwrap_or_default()),
        }
    }
}

/// Error object Yahoo embeds in an otherwise successful response.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.code.as_deref().unwrap_or("unknown");
        match self.description.as_deref() {
            Some(desc) => write!(f, "{code}: {desc}"),
            None => f.write_str(code),
        }
    }
}
