// SPDX-License-Identifier: MPL-2.0
//! Remote image download.

use crate::error::{Error, Result};
use std::time::Duration;

/// Give up on a single image after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Builds the HTTP client shared by all downloads.
pub fn client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(Error::from)
}

/// Downloads the bytes behind `url`. Non-success statuses are errors.
pub async fn fetch_remote(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    tracing::debug!(%url, "fetching remote image");
    let response = client.get(&url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}
