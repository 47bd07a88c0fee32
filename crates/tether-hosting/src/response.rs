//! Shared response handling for the hosting clients.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Turn an API response into a value, mapping error statuses uniformly.
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        let body = response.json().await?;
        return Ok(body);
    }

    let status_code = status.as_u16();

    match status_code {
        401 => Err(Error::AuthenticationFailed),
        429 => Err(Error::RateLimited),
        403 if response
            .headers()
            .get("x-ratelimit-remaining")
            .is_some_and(|v| v == "0") =>
        {
            Err(Error::RateLimited)
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(Error::ApiError {
                status: status_code,
                message: text,
            })
        }
    }
}
